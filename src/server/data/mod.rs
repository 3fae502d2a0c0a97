//! Remote data access layer.
//!
//! Repositories wrap [`RemoteModel`] for one Odoo model each and own the field lists that
//! are part of every route's contract. They return the explicit record shapes from
//! [`crate::model`] or local record types; they never decide how a failure is reported.

pub mod invoice;
pub mod partner;
pub mod remote;
pub mod sale_order;

pub use remote::RemoteModel;
