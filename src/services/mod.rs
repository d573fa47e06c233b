//! Shared application services.

pub mod context;
