//! Transient toast notification.
//!
//! Shows whatever [`NotificationState`] currently holds and hides it
//! [`DISMISS_MS`] after the latest `show`. Hide timers are keyed by the
//! state's sequence counter, so a newer toast restarts the clock and a
//! stale timer firing later is a no-op.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

use crate::state::notification::NotificationState;
#[cfg(feature = "hydrate")]
use crate::state::notification::DISMISS_MS;

fn toast_class(state: &NotificationState) -> String {
    if state.visible {
        format!("{} notification--show", state.kind.class())
    } else {
        state.kind.class().to_owned()
    }
}

/// Toast container; lives at the page root so any controller can notify.
#[component]
pub fn Toast() -> impl IntoView {
    let toast = expect_context::<RwSignal<NotificationState>>();

    Effect::new(move || {
        let state = toast.get();
        if !state.visible {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let seq = state.seq;
            gloo_timers::callback::Timeout::new(DISMISS_MS, move || {
                toast.update(|s| s.hide_if_current(seq));
            })
            .forget();
        }
    });

    view! {
        <div id="notification" class=move || toast.with(toast_class)>
            <span class="notification-text">{move || toast.get().message}</span>
        </div>
    }
}
