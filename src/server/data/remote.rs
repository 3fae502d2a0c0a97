use serde::de::DeserializeOwned;
use serde_json::json;

use crate::server::{
    error::odoo::OdooError,
    odoo::{Domain, OdooClient, Session, Value},
};

/// Generic access to one Odoo model through `execute_kw`.
pub struct RemoteModel<'a> {
    odoo: &'a OdooClient,
    session: &'a Session,
    name: &'static str,
}

impl<'a> RemoteModel<'a> {
    pub fn new(odoo: &'a OdooClient, session: &'a Session, name: &'static str) -> Self {
        Self {
            odoo,
            session,
            name,
        }
    }

    /// Returns the ids of records matching `domain`.
    pub async fn search(&self, domain: Domain) -> Result<Vec<i64>, OdooError> {
        let ids = self
            .odoo
            .invoke(self.session, self.name, "search", Value::Array(vec![domain.into()]), None)
            .await?;

        Ok(ids.ids())
    }

    /// Reads `fields` of the records `ids`.
    ///
    /// An empty id list returns without calling Odoo.
    pub async fn read<T: DeserializeOwned>(
        &self,
        ids: &[i64],
        fields: &[&str],
    ) -> Result<Vec<T>, OdooError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        self.odoo
            .invoke(
                self.session,
                self.name,
                "read",
                Value::Array(vec![ids.to_vec().into()]),
                Some(json!({ "fields": fields }).into()),
            )
            .await?
            .into_typed()
    }

    /// Searches and reads in one round trip.
    pub async fn search_read<T: DeserializeOwned>(
        &self,
        domain: Domain,
        fields: &[&str],
    ) -> Result<Vec<T>, OdooError> {
        self.odoo
            .invoke(
                self.session,
                self.name,
                "search_read",
                Value::Array(vec![domain.into(), fields.to_vec().into()]),
                None,
            )
            .await?
            .into_typed()
    }

    /// Writes `values` on the records `ids`.
    pub async fn write(&self, ids: &[i64], values: Value) -> Result<bool, OdooError> {
        let written = self
            .odoo
            .invoke(
                self.session,
                self.name,
                "write",
                Value::Array(vec![ids.to_vec().into(), values]),
                None,
            )
            .await?;

        Ok(written.is_truthy())
    }

    /// Creates one record and returns its id.
    pub async fn create(&self, values: Value, context: Option<Value>) -> Result<i64, OdooError> {
        let kwargs = context.map(|context| {
            Value::Struct([("context".to_string(), context)].into_iter().collect())
        });

        let created = self
            .odoo
            .invoke(self.session, self.name, "create", Value::Array(vec![values]), kwargs)
            .await?;

        // Odoo answers a list of ids when the create method is batched.
        created
            .as_i64()
            .or_else(|| created.ids().first().copied())
            .ok_or_else(|| {
                OdooError::Protocol(format!("{}.create returned no id: {:?}", self.name, created))
            })
    }

    /// Calls a business method such as `action_confirm` on the records `ids`.
    pub async fn call(
        &self,
        method: &str,
        ids: &[i64],
        context: Option<Value>,
    ) -> Result<Value, OdooError> {
        let kwargs = context.map(|context| {
            Value::Struct([("context".to_string(), context)].into_iter().collect())
        });

        self.odoo
            .invoke(
                self.session,
                self.name,
                method,
                Value::Array(vec![ids.to_vec().into()]),
                kwargs,
            )
            .await
    }
}
