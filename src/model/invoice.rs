use serde::{Deserialize, Serialize};

use crate::model::field::falsy;

/// Customer invoice (`account.move`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct InvoiceDto {
    pub id: i64,
    /// Invoice number, absent while the invoice is a draft
    #[serde(deserialize_with = "falsy", default)]
    pub name: Option<String>,
    /// `draft`, `posted` or `cancel`
    pub state: String,
    #[serde(deserialize_with = "falsy", default)]
    pub payment_state: Option<String>,
    #[serde(deserialize_with = "falsy", default)]
    pub invoice_date: Option<String>,
    pub amount_total: f64,
    #[serde(default)]
    pub amount_residual: f64,
}

/// Invoice created from a sale order
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct InvoiceCreatedDto {
    pub message: String,
    pub sale_order_id: i64,
    /// The newest invoice linked to the order
    pub invoice: InvoiceDto,
}

/// Latest invoice of a sale order
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct InvoiceSummaryDto {
    pub sale_order_id: i64,
    pub invoice: InvoiceDto,
}
