use super::*;

#[test]
fn default_notification_is_hidden() {
    let state = NotificationState::default();
    assert!(!state.visible);
    assert_eq!(state.seq, 0);
}

#[test]
fn show_sets_message_kind_and_visibility() {
    let mut state = NotificationState::default();
    state.show("Message sent successfully!", NotificationKind::Success);
    assert!(state.visible);
    assert_eq!(state.message, "Message sent successfully!");
    assert_eq!(state.kind, NotificationKind::Success);
    assert_eq!(state.seq, 1);
}

#[test]
fn a_new_show_replaces_text_and_kind_instantly() {
    let mut state = NotificationState::default();
    state.show("first", NotificationKind::Success);
    state.show("second", NotificationKind::Error);
    assert_eq!(state.message, "second");
    assert_eq!(state.kind, NotificationKind::Error);
    assert!(state.visible);
}

#[test]
fn hide_with_current_seq_hides() {
    let mut state = NotificationState::default();
    state.show("bye", NotificationKind::Success);
    let seq = state.seq;
    state.hide_if_current(seq);
    assert!(!state.visible);
}

#[test]
fn stale_hide_timer_does_not_cut_a_newer_toast_short() {
    let mut state = NotificationState::default();
    state.show("first", NotificationKind::Success);
    let stale = state.seq;
    state.show("second", NotificationKind::Error);
    state.hide_if_current(stale);
    assert!(state.visible, "older timer must not hide the newer toast");
    state.hide_if_current(state.seq);
    assert!(!state.visible);
}

#[test]
fn kind_maps_to_modifier_class() {
    assert_eq!(NotificationKind::Success.class(), "notification notification--success");
    assert_eq!(NotificationKind::Error.class(), "notification notification--error");
}

#[test]
fn dismiss_delay_is_four_seconds() {
    assert_eq!(DISMISS_MS, 4000);
}
