use serde::{Deserialize, Serialize};

use crate::model::field::{falsy, Many2One};

/// Entry of a customer combo/list: `id` relabeled `value`, `name` relabeled `label`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CustomerOptionDto {
    /// Partner id
    pub value: i64,
    /// Partner display name, `null` when the partner has none
    pub label: Option<String>,
}

/// Customer detail
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CustomerDto {
    pub id: i64,
    #[serde(deserialize_with = "falsy", default)]
    pub name: Option<String>,
    #[serde(deserialize_with = "falsy", default)]
    pub email: Option<String>,
    #[serde(deserialize_with = "falsy", default)]
    pub city: Option<String>,
    /// `[id, name]` of the partner's country
    #[serde(deserialize_with = "falsy", default)]
    pub country_id: Option<Many2One>,
    /// Internal notes, HTML
    #[serde(deserialize_with = "falsy", default)]
    pub comment: Option<String>,
}
