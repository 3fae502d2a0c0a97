use serde::{Deserialize, Serialize};

/// Scheduled delivery date of a sale order, in the display timezone
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeliveryDateDto {
    pub order_id: i64,
    pub order_name: String,
    /// RFC 3339 timestamp with offset, `null` when no commitment date is set
    pub scheduled_delivery_date: Option<String>,
}

/// Customer answer to a proposed delivery date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Accept,
    Reject,
}

/// Body of a delivery date decision
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeliveryDecisionDto {
    pub decision: Decision,
    /// Replacement date, required on reject
    ///
    /// Either RFC 3339 with offset or a civil time (`2025-04-01T14:00:00`) in the display
    /// timezone.
    #[serde(default)]
    pub new_date: Option<String>,
}

/// Outcome of a delivery date decision
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeliveryDecisionResultDto {
    /// `accepted` or `rejected`
    pub status: String,
    pub order_id: i64,
    pub message: String,
    /// New commitment date in the display timezone, only set on reject
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_delivery_date: Option<String>,
}
