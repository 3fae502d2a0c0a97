//! Server-side state shared by every request handler.

pub mod app;
