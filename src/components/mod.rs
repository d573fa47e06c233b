//! UI components.

pub mod guard;
pub mod layout;
