//! Hero section: looping typed-text effect and decorative floating shapes.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;

#[cfg(feature = "hydrate")]
use crate::state::typing::{TYPE_STEP_MS, TypingEngine};
use crate::util::shapes::ShapeDrift;

/// Phrases the typing effect cycles through, in order.
pub const TYPING_PHRASES: &[&str] = &[
    "Full-Stack Developer",
    "Rust Enthusiast",
    "Open Source Contributor",
    "Systems Tinkerer",
];

/// Schedule the next typing tick. Each tick advances the engine, renders
/// the new prefix, and reschedules itself with the engine-chosen delay.
/// The shared `pending` slot keeps the loop cancellable: dropping the
/// handle (or clearing the engine) stops it.
#[cfg(feature = "hydrate")]
fn schedule_tick(
    engine: &Rc<RefCell<Option<TypingEngine>>>,
    pending: &Rc<RefCell<Option<Timeout>>>,
    typed: RwSignal<String>,
    delay_ms: u32,
) {
    let engine_for_cb = Rc::clone(engine);
    let pending_for_cb = Rc::clone(pending);
    let handle = Timeout::new(delay_ms, move || {
        let next_delay = {
            let mut guard = engine_for_cb.borrow_mut();
            let Some(engine) = guard.as_mut() else {
                return;
            };
            let delay = engine.advance();
            typed.set(engine.rendered());
            delay
        };
        schedule_tick(&engine_for_cb, &pending_for_cb, typed, next_delay);
    });
    *pending.borrow_mut() = Some(handle);
}

/// Hero section with the typing effect headline.
#[component]
pub fn Hero() -> impl IntoView {
    let typed = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        let phrases = TYPING_PHRASES.iter().map(|p| (*p).to_owned()).collect();
        let engine = Rc::new(RefCell::new(TypingEngine::new(phrases)));
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        if engine.borrow().is_some() {
            schedule_tick(&engine, &pending, typed, TYPE_STEP_MS);
        }
        let handles = StoredValue::new_local((engine, pending));
        on_cleanup(move || {
            handles.with_value(|(engine, pending)| {
                pending.borrow_mut().take();
                engine.borrow_mut().take();
            });
        });
    }

    // Shape drift starts after mount so the `.shape` nodes exist.
    {
        let drift = StoredValue::new_local(None::<ShapeDrift>);
        Effect::new(move || {
            drift.update_value(|slot| {
                if slot.is_none() {
                    *slot = ShapeDrift::start();
                }
            });
        });
        on_cleanup(move || {
            drift.set_value(None);
        });
    }

    view! {
        <section id="home" class="hero">
            <div class="hero__shapes">
                <div class="shape shape--one"></div>
                <div class="shape shape--two"></div>
                <div class="shape shape--three"></div>
            </div>
            <div class="hero__content">
                <h1 class="hero__title">"Hi, I'm Jordan Reyes"</h1>
                <p class="hero__subtitle">
                    <span id="typing-text" class="typing-text">{move || typed.get()}</span>
                    <span class="typing-cursor">"|"</span>
                </p>
                <div class="hero__actions">
                    <a
                        href="#projects"
                        class="button button--primary"
                        on:click=move |ev| {
                            ev.prevent_default();
                            crate::util::scroll::scroll_to_section("projects");
                        }
                    >
                        "View My Work"
                    </a>
                    <a
                        href="#contact"
                        class="button button--ghost"
                        on:click=move |ev| {
                            ev.prevent_default();
                            crate::util::scroll::scroll_to_section("contact");
                        }
                    >
                        "Get In Touch"
                    </a>
                </div>
            </div>
        </section>
    }
}
