//! Full-page loading overlay, hidden on a fixed delay after startup.

use leptos::prelude::*;

/// Delay before the overlay fades out.
pub const LOADING_HIDE_MS: u32 = 2000;

/// Loading overlay shown while the page settles.
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let hidden = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(LOADING_HIDE_MS, move || hidden.set(true)).forget();
    }

    let class = move || {
        if hidden.get() {
            "loading-screen loading-screen--hidden"
        } else {
            "loading-screen"
        }
    };

    view! {
        <div id="loading-screen" class=class>
            <div class="loading-spinner"></div>
        </div>
    }
}
