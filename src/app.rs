//! Root application component: context providers and startup wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! All shared state is created here once and passed down through context,
//! so controllers never reach for globals. Startup order matches the page
//! design: loading overlay timer, theme before anything paint-relevant,
//! then the scroll listener and reveal observer once the DOM exists. Every
//! step degrades on its own; none can halt the others.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::hero::Hero;
use crate::components::loading::LoadingOverlay;
use crate::components::navbar::Navbar;
use crate::components::projects::Projects;
use crate::components::skills::Skills;
use crate::components::toast::Toast;
use crate::state::nav::NavState;
use crate::state::notification::NotificationState;
use crate::util::reveal::RevealObserver;
#[cfg(feature = "hydrate")]
use crate::state::nav::{self, SCROLL_DEBOUNCE_MS, SECTIONS};
#[cfg(feature = "hydrate")]
use crate::util::debounce::Debouncer;
#[cfg(feature = "hydrate")]
use crate::util::scroll::{self, ScrollWatcher};
use crate::util::storage;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Shared reactive state for all child components.
    let theme = RwSignal::new(storage::load_theme());
    let nav_state = RwSignal::new(NavState::default());
    let notification = RwSignal::new(NotificationState::default());

    provide_context(theme);
    provide_context(nav_state);
    provide_context(notification);

    // The stored theme must be on the document root before anything else
    // paints against it.
    Effect::new(move || storage::apply_theme(theme.get()));

    // Debounced window scroll listener driving the navbar style and the
    // scroll-spy highlight. Bursts collapse into one trailing run.
    #[cfg(feature = "hydrate")]
    {
        let debouncer = Debouncer::new(SCROLL_DEBOUNCE_MS);
        let watcher = ScrollWatcher::attach(move || {
            debouncer.call(move || {
                let offset = scroll::page_y_offset();
                let ids: Vec<&str> = SECTIONS.iter().map(|(id, _)| *id).collect();
                let spans = scroll::measure_sections(&ids);
                nav_state.update(|state| {
                    state.scrolled = nav::is_scrolled(offset);
                    state.active_section =
                        nav::active_section(offset, &spans).map(ToOwned::to_owned);
                });
            });
        });
        let watcher = StoredValue::new_local(Some(watcher));
        on_cleanup(move || watcher.set_value(None));
    }

    // Reveal animations start after mount so the observed nodes exist.
    {
        let reveal = StoredValue::new_local(None::<RevealObserver>);
        Effect::new(move || {
            reveal.update_value(|slot| {
                if slot.is_none() {
                    *slot = RevealObserver::start();
                }
            });
        });
        on_cleanup(move || {
            reveal.set_value(None);
        });
    }

    view! {
        <Title text="Jordan Reyes | Full-Stack Developer"/>

        <LoadingOverlay/>
        <Navbar/>
        <main>
            <Hero/>
            <About/>
            <Skills/>
            <Projects/>
            <Contact/>
        </main>
        <Toast/>
    }
}
