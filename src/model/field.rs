//! Serde helpers for Odoo field values.

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

/// Deserializes an optional Odoo field.
///
/// Odoo reports an empty field as `false` regardless of its type, so `false` and `null`
/// both map to `None`.
pub fn falsy<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null | serde_json::Value::Bool(false) => Ok(None),
        value => T::deserialize(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// A many2one reference as Odoo reads it: `[id, display_name]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Many2One(pub i64, pub String);
