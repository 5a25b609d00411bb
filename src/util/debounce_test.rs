#![cfg(not(feature = "hydrate"))]

use std::cell::Cell;
use std::rc::Rc;

use super::*;

/// Stand-in timer: runs its work only when fired. Dropping it unfired is
/// the cancellation path, exactly like a real timeout handle.
struct FakeTimer {
    work: Option<Box<dyn FnOnce()>>,
}

impl FakeTimer {
    fn new(work: impl FnOnce() + 'static) -> Self {
        Self { work: Some(Box::new(work)) }
    }

    /// The quiet window elapsed without a replacement.
    fn fire(mut self) {
        if let Some(work) = self.work.take() {
            work();
        }
    }
}

/// Handle that counts its own drop, to observe cancellation directly.
struct CountingHandle {
    drops: Rc<Cell<u32>>,
}

impl Drop for CountingHandle {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

#[test]
fn rapid_burst_collapses_into_one_run() {
    let runs = Rc::new(Cell::new(0u32));
    let slot = PendingSlot::new();
    for _ in 0..50 {
        let runs_for_timer = Rc::clone(&runs);
        slot.arm(FakeTimer::new(move || runs_for_timer.set(runs_for_timer.get() + 1)));
    }
    // Nothing ran during the burst; one handle survives it.
    assert_eq!(runs.get(), 0);
    let survivor = slot.disarm().expect("one pending run after the burst");
    assert!(!slot.is_armed());
    survivor.fire();
    assert_eq!(runs.get(), 1);
}

#[test]
fn arming_drops_the_replaced_handle() {
    let drops = Rc::new(Cell::new(0u32));
    let slot = PendingSlot::new();
    slot.arm(CountingHandle { drops: Rc::clone(&drops) });
    assert_eq!(drops.get(), 0);
    slot.arm(CountingHandle { drops: Rc::clone(&drops) });
    assert_eq!(drops.get(), 1);
}

#[test]
fn disarm_drops_the_pending_run_without_executing_it() {
    let runs = Rc::new(Cell::new(0u32));
    let slot = PendingSlot::new();
    let runs_for_timer = Rc::clone(&runs);
    slot.arm(FakeTimer::new(move || runs_for_timer.set(runs_for_timer.get() + 1)));
    drop(slot.disarm());
    assert_eq!(runs.get(), 0);
    assert!(slot.disarm().is_none());
}

#[test]
fn stub_runs_work_immediately() {
    let ran = Rc::new(Cell::new(0));
    let debouncer = Debouncer::new(10);
    let ran_for_call = Rc::clone(&ran);
    debouncer.call(move || ran_for_call.set(ran_for_call.get() + 1));
    assert_eq!(ran.get(), 1);
}

#[test]
fn cancel_is_callable_without_a_pending_run() {
    let debouncer = Debouncer::new(10);
    debouncer.cancel();
}

#[test]
fn delay_is_preserved() {
    assert_eq!(Debouncer::new(10).delay_ms(), 10);
}
