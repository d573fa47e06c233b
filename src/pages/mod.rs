//! Routed pages.

pub mod access_denied;
pub mod admin;
pub mod login;
pub mod notes;
pub mod profile;
