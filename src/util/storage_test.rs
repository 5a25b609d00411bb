#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_theme_defaults_to_light_without_a_browser() {
    assert_eq!(load_theme(), Theme::Light);
}

#[test]
fn store_and_apply_are_noops_but_callable() {
    store_theme(Theme::Dark);
    apply_theme(Theme::Dark);
    assert_eq!(load_theme(), Theme::Light);
}
