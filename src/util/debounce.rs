//! Trailing-edge debouncing for bursty DOM events.
//!
//! DESIGN
//! ======
//! The replace/cancel decision lives in [`PendingSlot`], which only knows
//! that dropping a handle cancels its scheduled work. [`Debouncer`] plugs
//! gloo's `Timeout` into the slot under the `hydrate` feature; outside it
//! there are no timers and the work runs immediately.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::RefCell;
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;

/// Shared slot holding the one pending run of a debounced action.
///
/// Arming stores the new handle and drops the previous one, which cancels
/// it. A burst of arms inside the quiet window therefore leaves exactly
/// one handle alive, and only that handle's work runs.
pub struct PendingSlot<H> {
    slot: Rc<RefCell<Option<H>>>,
}

impl<H> PendingSlot<H> {
    #[must_use]
    pub fn new() -> Self {
        Self { slot: Rc::new(RefCell::new(None)) }
    }

    /// Replace the pending handle, cancelling the previous one.
    pub fn arm(&self, handle: H) {
        *self.slot.borrow_mut() = Some(handle);
    }

    /// Take the pending handle without running it.
    pub fn disarm(&self) -> Option<H> {
        self.slot.borrow_mut().take()
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.slot.borrow().is_some()
    }
}

impl<H> Clone for PendingSlot<H> {
    fn clone(&self) -> Self {
        Self { slot: Rc::clone(&self.slot) }
    }
}

impl<H> Default for PendingSlot<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Trailing-edge debouncer with a fixed quiet window.
#[derive(Clone)]
pub struct Debouncer {
    delay_ms: u32,
    #[cfg(feature = "hydrate")]
    pending: PendingSlot<Timeout>,
}

impl Debouncer {
    #[must_use]
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            #[cfg(feature = "hydrate")]
            pending: PendingSlot::new(),
        }
    }

    #[must_use]
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Schedule `work` after the quiet window, replacing any pending run.
    pub fn call(&self, work: impl FnOnce() + 'static) {
        #[cfg(feature = "hydrate")]
        {
            let pending = self.pending.clone();
            let handle = Timeout::new(self.delay_ms, move || {
                pending.disarm();
                work();
            });
            self.pending.arm(handle);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            work();
        }
    }

    /// Drop any pending run without executing it.
    pub fn cancel(&self) {
        #[cfg(feature = "hydrate")]
        {
            self.pending.disarm();
        }
    }
}
