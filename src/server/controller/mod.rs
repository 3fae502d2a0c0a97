//! HTTP controller endpoints for the odoo-bridge API.
//!
//! Each handler builds the service it needs from the shared [`AppState`], calls it once and
//! wraps the result in a response. Failures are returned as [`Error`] and turned into HTTP
//! responses by its `IntoResponse` implementation.
//!
//! [`AppState`]: crate::server::model::app::AppState
//! [`Error`]: crate::server::error::Error

pub mod accounting;
pub mod customer;
pub mod delivery;
pub mod purchase_order;
pub mod sale_order;
pub mod status;
pub mod util;
