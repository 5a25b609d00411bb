//! Page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page chrome and sections while reading/writing
//! shared state from Leptos context providers. Timer- and DOM-owning
//! behavior (typing loop, shape drift) lives with the component whose
//! markup it animates, so handles are cancelled when the owner unmounts.

pub mod about;
pub mod contact;
pub mod hero;
pub mod loading;
pub mod navbar;
pub mod projects;
pub mod skills;
pub mod toast;
