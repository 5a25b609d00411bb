//! Skills section with reveal-animated progress bars.
//!
//! Each bar starts at zero width; the reveal animator reads the bar's
//! `data-width` attribute and grows the fill to that percentage once the
//! bar scrolls into view.

use leptos::prelude::*;

/// Skill name and target fill percentage.
const SKILLS: &[(&str, &str)] = &[
    ("Rust", "90"),
    ("TypeScript", "85"),
    ("PostgreSQL", "80"),
    ("WebAssembly", "75"),
    ("Kubernetes", "65"),
];

/// Skills section.
#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="section skills">
            <h2 class="section__title">"Skills"</h2>
            <div class="skills__list">
                {SKILLS
                    .iter()
                    .map(|(name, width)| {
                        view! {
                            <div class="skill">
                                <div class="skill__header">
                                    <span class="skill__name">{*name}</span>
                                    <span class="skill__value">{format!("{width}%")}</span>
                                </div>
                                <div class="skill__track">
                                    <div class="skill-progress reveal" data-width=*width></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
