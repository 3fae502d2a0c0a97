//! Service layer for the REST routes.
//!
//! Each service drives the repositories for one group of routes, following the same
//! steps: resolve human-readable keys to ids (short-circuiting with
//! [`Error::NotFound`](crate::server::error::Error::NotFound) when nothing matches), read
//! or mutate with the route's field list, expand nested child ids, and shape the result.

pub mod customer;
pub mod delivery;
pub mod invoice;
pub mod report;
pub mod sale_order;
pub mod status;
