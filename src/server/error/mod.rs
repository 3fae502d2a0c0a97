//! Error types for the odoo-bridge server.
//!
//! Each route handler is a failure boundary: handlers return `Result<_, Error>` and the
//! `IntoResponse` implementations below decide what reaches the client. Odoo failures and
//! missing records keep a 200 status with a structured body, report download failures
//! forward the upstream status, and only genuine server faults become a 500.

pub mod config;
pub mod odoo;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, FailureDto},
    server::error::{config::ConfigError, odoo::OdooError},
};

/// Main error type for the odoo-bridge server.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Odoo rejected a call or could not be reached.
    #[error(transparent)]
    OdooError(#[from] OdooError),
    /// A lookup by name or id matched no record.
    #[error("{0}")]
    NotFound(String),
    /// The request is well-formed but its content is not acceptable.
    #[error("{0}")]
    Validation(String),
    /// The invoice wizard failed for a reason other than the known serialization quirk.
    #[error("Invoice creation failed: {0}")]
    InvoiceCreation(OdooError),
    /// Binding or serving the HTTP listener failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::OdooError(err) => err.into_response(),
            Self::NotFound(message) => {
                tracing::debug!("{}", message);

                (
                    StatusCode::OK,
                    Json(FailureDto {
                        message,
                        error: "not found".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: message })).into_response()
            }
            err @ (Self::InvoiceCreation(_) | Self::Io(_)) => {
                InternalServerError(err).into_response()
            }
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The error is logged and the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
