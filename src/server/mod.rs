//! Server application core modules.
//!
//! This module contains the HTTP side of odoo-bridge: routing, controllers, services and
//! repositories translating REST calls into Odoo remote-object calls, plus the Odoo client
//! itself.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod odoo;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
