use super::*;

fn span(id: &str, top: f64, height: f64) -> SectionSpan {
    SectionSpan { id: id.to_owned(), top, height }
}

// =============================================================
// NavState transitions
// =============================================================

#[test]
fn default_state_is_closed_and_unscrolled() {
    let state = NavState::default();
    assert!(!state.menu_open);
    assert!(!state.scrolled);
    assert_eq!(state.active_section, None);
}

#[test]
fn toggle_menu_flips_open_state() {
    let mut state = NavState::default();
    state.toggle_menu();
    assert!(state.menu_open);
    state.toggle_menu();
    assert!(!state.menu_open);
}

#[test]
fn close_menu_is_unconditional() {
    let mut state = NavState::default();
    state.close_menu();
    assert!(!state.menu_open);
    state.toggle_menu();
    state.close_menu();
    assert!(!state.menu_open);
}

// =============================================================
// active_section
// =============================================================

#[test]
fn offset_inside_exactly_one_section_matches_it() {
    let spans = [span("home", 0.0, 600.0), span("about", 600.0, 400.0)];
    // 650 is inside about's biased range [500, 900).
    assert_eq!(active_section(650.0, &spans), Some("about"));
}

#[test]
fn bias_makes_section_active_100px_early() {
    let spans = [span("about", 600.0, 400.0)];
    assert_eq!(active_section(500.0, &spans), Some("about"));
    assert_eq!(active_section(499.9, &spans), None);
}

#[test]
fn range_end_is_exclusive() {
    let spans = [span("about", 600.0, 400.0)];
    // Biased range is [500, 900).
    assert_eq!(active_section(899.9, &spans), Some("about"));
    assert_eq!(active_section(900.0, &spans), None);
}

#[test]
fn no_match_yields_none() {
    let spans = [span("contact", 3000.0, 500.0)];
    assert_eq!(active_section(0.0, &spans), None);
    assert_eq!(active_section(10_000.0, &spans), None);
}

#[test]
fn empty_span_list_yields_none() {
    assert_eq!(active_section(100.0, &[]), None);
}

#[test]
fn overlapping_ranges_tie_break_in_document_order() {
    let spans = [span("first", 100.0, 500.0), span("second", 100.0, 500.0)];
    assert_eq!(active_section(200.0, &spans), Some("first"));
}

// =============================================================
// is_scrolled
// =============================================================

#[test]
fn scrolled_flips_strictly_past_threshold() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(SCROLLED_THRESHOLD_PX));
    assert!(is_scrolled(SCROLLED_THRESHOLD_PX + 0.1));
}

#[test]
fn sections_are_in_document_order() {
    let ids: Vec<&str> = SECTIONS.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, ["home", "about", "skills", "projects", "contact"]);
}
