//! Helpers shared across services.

pub mod time;
