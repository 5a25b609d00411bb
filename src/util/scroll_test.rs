#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn anchor_target_compensates_for_the_fixed_header() {
    assert!((anchor_target(500.0) - 420.0).abs() < f64::EPSILON);
    assert!((anchor_target(0.0) + 80.0).abs() < f64::EPSILON);
}

#[test]
fn offset_defaults_to_zero_without_a_browser() {
    assert!((page_y_offset() - 0.0).abs() < f64::EPSILON);
}

#[test]
fn measurement_is_empty_without_a_browser() {
    assert!(measure_sections(&["home", "about"]).is_empty());
}

#[test]
fn watcher_does_not_attach_without_a_browser() {
    assert!(ScrollWatcher::attach(|| {}).is_none());
}

#[test]
fn scroll_helpers_are_noops_but_callable() {
    scroll_to_section("contact");
    lock_body_scroll(true);
    lock_body_scroll(false);
}
