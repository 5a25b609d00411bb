//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic. Every function degrades to a no-op outside the
//! `hydrate` feature so the crate tests natively.

pub mod debounce;
pub mod reveal;
pub mod scroll;
pub mod shapes;
pub mod storage;
