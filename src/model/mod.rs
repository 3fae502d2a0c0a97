//! Request and response shapes of the REST API.
//!
//! These are the explicit record shapes the translation layer promises to its clients.
//! Odoo itself is schema-less from our point of view; services deserialize remote
//! records into these types so that a field missing upstream is caught at the boundary.

pub mod api;
pub mod customer;
pub mod delivery;
pub mod field;
pub mod invoice;
pub mod sale_order;
pub mod status;
