use serde_json::json;

use crate::{
    model::invoice::InvoiceDto,
    server::{
        data::{sale_order::SALE_ORDER_MODEL, RemoteModel},
        error::odoo::OdooError,
        odoo::{OdooClient, Session, Value},
    },
};

pub const INVOICE_MODEL: &str = "account.move";
pub const ADVANCE_PAYMENT_WIZARD_MODEL: &str = "sale.advance.payment.inv";

const INVOICE_FIELDS: [&str; 6] = [
    "name",
    "state",
    "payment_state",
    "invoice_date",
    "amount_total",
    "amount_residual",
];

pub struct InvoiceRepository<'a> {
    model: RemoteModel<'a>,
}

impl<'a> InvoiceRepository<'a> {
    pub fn new(odoo: &'a OdooClient, session: &'a Session) -> Self {
        Self {
            model: RemoteModel::new(odoo, session, INVOICE_MODEL),
        }
    }

    pub async fn get(&self, invoice_id: i64) -> Result<Option<InvoiceDto>, OdooError> {
        let invoices: Vec<InvoiceDto> = self.model.read(&[invoice_id], &INVOICE_FIELDS).await?;

        Ok(invoices.into_iter().next())
    }
}

/// The "Create invoices" wizard of sale orders.
pub struct AdvancePaymentWizard<'a> {
    model: RemoteModel<'a>,
}

impl<'a> AdvancePaymentWizard<'a> {
    pub fn new(odoo: &'a OdooClient, session: &'a Session) -> Self {
        Self {
            model: RemoteModel::new(odoo, session, ADVANCE_PAYMENT_WIZARD_MODEL),
        }
    }

    fn context(order_ids: &[i64]) -> Value {
        json!({
            "active_model": SALE_ORDER_MODEL,
            "active_ids": order_ids,
            "active_id": order_ids.first(),
        })
        .into()
    }

    /// Creates a wizard invoicing the delivered quantities of `order_ids`.
    pub async fn create(&self, order_ids: &[i64]) -> Result<i64, OdooError> {
        let values = json!({
            "advance_payment_method": "delivered",
            // (6, 0, ids) replaces the many2many with exactly these records
            "sale_order_ids": [[6, 0, order_ids]],
        });

        self.model
            .create(values.into(), Some(Self::context(order_ids)))
            .await
    }

    /// Runs the wizard; on success Odoo answers the action displaying the new invoices.
    pub async fn create_invoices(
        &self,
        wizard_id: i64,
        order_ids: &[i64],
    ) -> Result<Value, OdooError> {
        self.model
            .call("create_invoices", &[wizard_id], Some(Self::context(order_ids)))
            .await
    }
}
