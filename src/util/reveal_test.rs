#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn observer_does_not_start_without_a_browser() {
    assert!(RevealObserver::start().is_none());
}

#[test]
fn fill_width_appends_percent() {
    assert_eq!(fill_width("90"), "90%");
    assert_eq!(fill_width("0"), "0%");
}

#[test]
fn trigger_tuning_matches_the_documented_bias() {
    assert!((REVEAL_THRESHOLD - 0.1).abs() < f64::EPSILON);
    assert_eq!(REVEAL_ROOT_MARGIN, "0px 0px -50px 0px");
    assert_eq!(FILL_DELAY_MS, 200);
}
