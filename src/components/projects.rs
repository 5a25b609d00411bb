//! Projects section with reveal-animated cards.

use leptos::prelude::*;

struct Project {
    name: &'static str,
    blurb: &'static str,
    tech: &'static [&'static str],
    link: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        name: "collab-canvas",
        blurb: "Real-time collaborative whiteboard with CRDT-backed sync.",
        tech: &["Rust", "WebSocket", "Leptos"],
        link: "https://github.com/jordanreyes/collab-canvas",
    },
    Project {
        name: "shipwatch",
        blurb: "Deployment dashboard aggregating rollout health across clusters.",
        tech: &["Rust", "Kubernetes", "Postgres"],
        link: "https://github.com/jordanreyes/shipwatch",
    },
    Project {
        name: "tidewave",
        blurb: "Static-site generator with incremental rebuilds and live reload.",
        tech: &["Rust", "WASM"],
        link: "https://github.com/jordanreyes/tidewave",
    },
];

/// Projects section.
#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="section projects">
            <h2 class="section__title">"Projects"</h2>
            <div class="projects__grid">
                {PROJECTS
                    .iter()
                    .map(|project| {
                        view! {
                            <article class="project-card reveal">
                                <h3 class="project-card__name">{project.name}</h3>
                                <p class="project-card__blurb">{project.blurb}</p>
                                <ul class="project-card__tech">
                                    {project
                                        .tech
                                        .iter()
                                        .map(|tech| view! { <li class="tech-item">{*tech}</li> })
                                        .collect_view()}
                                </ul>
                                <a class="project-card__link" href=project.link rel="noreferrer">
                                    "Source"
                                </a>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
