use serde::{Deserialize, Serialize};

use crate::model::field::falsy;

/// Sale order with its order lines expanded
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SaleOrderDto {
    pub id: i64,
    /// Order reference, e.g. `S00042`
    pub name: String,
    /// `draft`, `sent`, `sale` or `cancel`
    pub state: String,
    /// Creation timestamp as stored by Odoo (UTC)
    #[serde(deserialize_with = "falsy", default)]
    pub create_date: Option<String>,
    pub amount_total: f64,
    pub order_line: Vec<OrderLineDto>,
}

/// Sale order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct OrderLineDto {
    pub id: i64,
    /// Line description
    #[serde(deserialize_with = "falsy", default)]
    pub name: Option<String>,
    pub product_uom_qty: f64,
    pub price_unit: f64,
    pub price_total: f64,
}

/// Result of a state transition applied to every order matching a name
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct OrderActionDto {
    pub message: String,
    pub order_name: String,
    /// Ids of the orders the action was applied to
    pub ids: Vec<i64>,
}
