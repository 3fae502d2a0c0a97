use serde::{Deserialize, Serialize};

/// Connection status of the Odoo backend
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StatusDto {
    #[serde(rename = "Message")]
    pub message: String,
    /// Set when Odoo could not be reached or rejected the credentials
    #[serde(rename = "Error", skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}
