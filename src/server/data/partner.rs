use serde::Deserialize;

use crate::{
    model::{
        customer::{CustomerDto, CustomerOptionDto},
        field::falsy,
    },
    server::{
        data::RemoteModel,
        error::odoo::OdooError,
        odoo::{Domain, OdooClient, Session},
    },
};

pub const PARTNER_MODEL: &str = "res.partner";

const OPTION_FIELDS: [&str; 2] = ["name", "customer_rank"];
const DETAIL_FIELDS: [&str; 5] = ["name", "email", "city", "country_id", "comment"];

#[derive(Deserialize)]
struct PartnerOptionRecord {
    id: i64,
    #[serde(deserialize_with = "falsy", default)]
    name: Option<String>,
}

pub struct PartnerRepository<'a> {
    model: RemoteModel<'a>,
}

impl<'a> PartnerRepository<'a> {
    pub fn new(odoo: &'a OdooClient, session: &'a Session) -> Self {
        Self {
            model: RemoteModel::new(odoo, session, PARTNER_MODEL),
        }
    }

    /// Lists partners matching `domain` as `{value, label}` pairs.
    pub async fn find_options(&self, domain: Domain) -> Result<Vec<CustomerOptionDto>, OdooError> {
        let partners: Vec<PartnerOptionRecord> =
            self.model.search_read(domain, &OPTION_FIELDS).await?;

        Ok(partners
            .into_iter()
            .map(|p| CustomerOptionDto {
                value: p.id,
                label: p.name,
            })
            .collect())
    }

    pub async fn get(&self, partner_id: i64) -> Result<Option<CustomerDto>, OdooError> {
        let partners: Vec<CustomerDto> = self.model.read(&[partner_id], &DETAIL_FIELDS).await?;

        Ok(partners.into_iter().next())
    }

    /// Ids of the partners whose name is exactly `name`.
    pub async fn find_ids_by_name(&self, name: &str) -> Result<Vec<i64>, OdooError> {
        self.model
            .search(Domain::new().filter("name", "=", name))
            .await
    }
}
