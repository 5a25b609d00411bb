//! Pure, natively-testable UI state for the portfolio page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every controller keeps its decision logic here as plain types and
//! transition functions so behavior is testable without a browser. The
//! components layer owns the timers and DOM wiring around these types.

pub mod form;
pub mod nav;
pub mod notification;
pub mod theme;
pub mod typing;
