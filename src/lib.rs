//! # portfolio-client
//!
//! Leptos + WASM client for a single-page personal portfolio: theme
//! toggling with a persisted preference, a mobile nav menu with scroll-spy
//! highlighting, visibility-triggered reveal animations, a looping
//! typed-text effect, and a contact form that delivers through a hosted
//! mail relay.
//!
//! Browser-only code is gated behind the `hydrate` feature; without it
//! every DOM/timer/network helper is a no-op stub, which keeps the state
//! machines and validators testable with a plain `cargo test`.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// Browser entry point: mounts the app into `<body>`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(crate::app::App);
}
