//! Odoo client error types.
//!
//! Every failure raised while talking to Odoo, over either the XML-RPC object channel or
//! the cookie-based web session, is an [`OdooError`]. Apart from report downloads, these
//! errors are reported to API consumers as a 200 response carrying a [`FailureDto`] so that
//! client integrations only need to inspect the body.

use axum::{
    body::Bytes,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::FailureDto, server::odoo::fault::Fault};

#[derive(Error, Debug)]
pub enum OdooError {
    /// Credentials were rejected by either authentication channel.
    #[error("Authentication failed: {0}")]
    Authentication(String),
    /// Odoo raised an exception while executing a remote call.
    #[error("{0}")]
    Fault(Fault),
    /// The HTTP request to Odoo could not be completed.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    /// Odoo answered with something that is not the expected payload.
    #[error("Unexpected response from Odoo: {0}")]
    Protocol(String),
    /// The report endpoint answered with a non-success status.
    ///
    /// # Fields
    /// - `status` - HTTP status returned by Odoo
    /// - `content_type` - `Content-Type` returned by Odoo, if any
    /// - `body` - Raw response body returned by Odoo, passed through unchanged
    #[error("Report download failed with status {status}")]
    Report {
        status: u16,
        content_type: Option<String>,
        body: Bytes,
    },
}

impl IntoResponse for OdooError {
    fn into_response(self) -> Response {
        match self {
            Self::Report {
                status,
                content_type,
                body,
            } => {
                tracing::warn!(status, "Odoo report download failed");

                let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                let mut response = (status, body).into_response();
                if let Some(content_type) =
                    content_type.and_then(|value| HeaderValue::from_str(&value).ok())
                {
                    response.headers_mut().insert(header::CONTENT_TYPE, content_type);
                }

                response
            }
            Self::Authentication(_) => {
                tracing::warn!("{}", self);

                (
                    StatusCode::OK,
                    Json(FailureDto {
                        message: "Odoo authentication failed".to_string(),
                        error: self.to_string(),
                    }),
                )
                    .into_response()
            }
            err => {
                tracing::debug!("Odoo call failed: {}", err);

                (
                    StatusCode::OK,
                    Json(FailureDto {
                        message: "Odoo error".to_string(),
                        error: err.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
