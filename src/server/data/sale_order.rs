use serde::Deserialize;

use crate::{
    model::{
        field::falsy,
        sale_order::{OrderLineDto, SaleOrderDto},
    },
    server::{
        data::RemoteModel,
        error::odoo::OdooError,
        odoo::{Domain, OdooClient, Session, Value},
    },
};

pub const SALE_ORDER_MODEL: &str = "sale.order";
pub const ORDER_LINE_MODEL: &str = "sale.order.line";

const ORDER_FIELDS: [&str; 5] = ["name", "state", "create_date", "amount_total", "order_line"];
const LINE_FIELDS: [&str; 4] = ["name", "product_uom_qty", "price_unit", "price_total"];
const COMMITMENT_FIELDS: [&str; 2] = ["name", "commitment_date"];
const INVOICE_LINK_FIELDS: [&str; 1] = ["invoice_ids"];

/// A sale order as read from Odoo, order lines still as ids.
#[derive(Debug, Deserialize)]
pub struct SaleOrderRecord {
    pub id: i64,
    pub name: String,
    pub state: String,
    #[serde(deserialize_with = "falsy", default)]
    pub create_date: Option<String>,
    pub amount_total: f64,
    #[serde(default)]
    pub order_line: Vec<i64>,
}

impl SaleOrderRecord {
    /// Substitutes the expanded lines for the line ids.
    pub fn with_lines(self, order_line: Vec<OrderLineDto>) -> SaleOrderDto {
        SaleOrderDto {
            id: self.id,
            name: self.name,
            state: self.state,
            create_date: self.create_date,
            amount_total: self.amount_total,
            order_line,
        }
    }
}

/// The scheduled delivery of a sale order, `commitment_date` in naive UTC.
#[derive(Debug, Deserialize)]
pub struct CommitmentRecord {
    pub id: i64,
    pub name: String,
    #[serde(deserialize_with = "falsy", default)]
    pub commitment_date: Option<String>,
}

#[derive(Deserialize)]
struct InvoiceLinkRecord {
    #[serde(default)]
    invoice_ids: Vec<i64>,
}

pub struct SaleOrderRepository<'a> {
    orders: RemoteModel<'a>,
    lines: RemoteModel<'a>,
}

impl<'a> SaleOrderRepository<'a> {
    pub fn new(odoo: &'a OdooClient, session: &'a Session) -> Self {
        Self {
            orders: RemoteModel::new(odoo, session, SALE_ORDER_MODEL),
            lines: RemoteModel::new(odoo, session, ORDER_LINE_MODEL),
        }
    }

    /// Ids of the orders whose reference is exactly `name`.
    pub async fn find_ids_by_name(&self, name: &str) -> Result<Vec<i64>, OdooError> {
        self.orders
            .search(Domain::new().filter("name", "=", name))
            .await
    }

    pub async fn exists(&self, order_id: i64) -> Result<bool, OdooError> {
        let ids = self
            .orders
            .search(Domain::new().filter("id", "=", order_id))
            .await?;

        Ok(!ids.is_empty())
    }

    /// Orders of the given partners, lines not expanded.
    pub async fn find_by_partners(
        &self,
        partner_ids: &[i64],
    ) -> Result<Vec<SaleOrderRecord>, OdooError> {
        self.orders
            .search_read(
                Domain::new().filter("partner_id", "in", partner_ids.to_vec()),
                &ORDER_FIELDS,
            )
            .await
    }

    pub async fn get_lines(&self, line_ids: &[i64]) -> Result<Vec<OrderLineDto>, OdooError> {
        self.lines.read(line_ids, &LINE_FIELDS).await
    }

    pub async fn confirm(&self, order_ids: &[i64]) -> Result<Value, OdooError> {
        self.orders.call("action_confirm", order_ids, None).await
    }

    pub async fn cancel(&self, order_ids: &[i64]) -> Result<Value, OdooError> {
        self.orders.call("action_cancel", order_ids, None).await
    }

    pub async fn get_commitment(
        &self,
        order_id: i64,
    ) -> Result<Option<CommitmentRecord>, OdooError> {
        let orders: Vec<CommitmentRecord> = self
            .orders
            .search_read(Domain::new().filter("id", "=", order_id), &COMMITMENT_FIELDS)
            .await?;

        Ok(orders.into_iter().next())
    }

    /// Writes `commitment_date`, given in Odoo's stored format.
    pub async fn set_commitment_date(
        &self,
        order_id: i64,
        commitment_date: String,
    ) -> Result<bool, OdooError> {
        let values = Value::Struct(
            [("commitment_date".to_string(), Value::from(commitment_date))]
                .into_iter()
                .collect(),
        );

        self.orders.write(&[order_id], values).await
    }

    /// Ids of every invoice linked to the given orders.
    pub async fn invoice_ids(&self, order_ids: &[i64]) -> Result<Vec<i64>, OdooError> {
        let orders: Vec<InvoiceLinkRecord> =
            self.orders.read(order_ids, &INVOICE_LINK_FIELDS).await?;

        Ok(orders
            .into_iter()
            .flat_map(|order| order.invoice_ids)
            .collect())
    }
}
