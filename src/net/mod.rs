//! Network collaborators.
//!
//! The only remote dependency is the hosted mail relay that delivers
//! contact-form submissions as email.

pub mod mail;
