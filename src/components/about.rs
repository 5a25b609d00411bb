//! About section with reveal-animated highlight and stat cards.

use leptos::prelude::*;

const HIGHLIGHTS: &[(&str, &str)] = &[
    ("Clean Code", "Readable, tested, reviewed"),
    ("Performance", "Measured before optimized"),
    ("Collaboration", "Remote-friendly, async-first"),
];

const STATS: &[(&str, &str)] = &[
    ("6+", "Years shipping"),
    ("40+", "Projects delivered"),
    ("12", "Open source crates"),
];

/// About section.
#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section about">
            <h2 class="section__title">"About Me"</h2>
            <div class="about__body">
                <p class="about__text">
                    "I build web applications end to end: storage and APIs on the "
                    "backend, fast and accessible interfaces on the front. Lately "
                    "most of my stack is Rust compiled to WebAssembly."
                </p>
                <div class="about__highlights">
                    {HIGHLIGHTS
                        .iter()
                        .map(|(title, blurb)| {
                            view! {
                                <div class="highlight-item reveal">
                                    <h3>{*title}</h3>
                                    <p>{*blurb}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="about__stats">
                    {STATS
                        .iter()
                        .map(|(value, label)| {
                            view! {
                                <div class="stat-item reveal">
                                    <span class="stat-item__value">{*value}</span>
                                    <span class="stat-item__label">{*label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
