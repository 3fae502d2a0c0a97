use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response when Odoo rejects a call or a record cannot be found
///
/// Returned with a 200 status so that clients only need to inspect the body.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FailureDto {
    /// Short summary, e.g. `Odoo error`
    pub message: String,
    /// Diagnostic text as reported by Odoo
    pub error: String,
}
