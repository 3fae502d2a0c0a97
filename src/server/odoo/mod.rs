//! Odoo session client.
//!
//! Everything this service knows about Odoo's wire protocols lives here: the XML-RPC
//! codec, the dynamically typed [`Value`], fault classification, and the [`OdooClient`]
//! exposing authentication, generic object calls and report downloads. Services never
//! build requests themselves.

pub mod client;
pub mod domain;
pub mod fault;
pub mod session;
pub mod value;
pub mod xmlrpc;

pub use client::{OdooClient, ServerVersion};
pub use domain::Domain;
pub use fault::{Fault, FaultKind};
pub use session::{DocumentSession, OdooConfig, Session};
pub use value::Value;
