use crate::{
    model::invoice::{InvoiceCreatedDto, InvoiceDto, InvoiceSummaryDto},
    server::{
        data::{
            invoice::{AdvancePaymentWizard, InvoiceRepository},
            sale_order::SaleOrderRepository,
        },
        error::{odoo::OdooError, Error},
        odoo::{FaultKind, OdooClient, Session, Value},
        service::sale_order::resolve_order_ids,
    },
};

/// Outcome of running the invoice wizard
#[derive(Debug, PartialEq)]
pub enum WizardOutcome {
    /// Odoo returned the action displaying the new invoices
    Completed,
    /// The invoices were created but Odoo could not serialize its answer
    ResultUnknown,
}

/// Classifies the result of `create_invoices`.
///
/// # Returns
/// - `Ok(WizardOutcome::Completed)` - The call succeeded
/// - `Ok(WizardOutcome::ResultUnknown)` - The call failed with the serialization quirk
/// - `Err(Error::InvoiceCreation)` - Any other failure
pub fn classify_wizard_result(result: Result<Value, OdooError>) -> Result<WizardOutcome, Error> {
    match result {
        Ok(_) => Ok(WizardOutcome::Completed),
        Err(OdooError::Fault(fault)) if fault.kind() == FaultKind::SerializationQuirk => {
            tracing::debug!("ignoring invoice wizard serialization fault: {}", fault);

            Ok(WizardOutcome::ResultUnknown)
        }
        Err(err) => Err(Error::InvoiceCreation(err)),
    }
}

/// The newest invoice among `invoice_ids`.
///
/// Odoo ids increase monotonically, so the highest id is the last invoice created.
pub fn latest_invoice_id(invoice_ids: &[i64]) -> Option<i64> {
    invoice_ids.iter().copied().max()
}

pub struct InvoiceService<'a> {
    orders: SaleOrderRepository<'a>,
    invoices: InvoiceRepository<'a>,
    wizard: AdvancePaymentWizard<'a>,
}

impl<'a> InvoiceService<'a> {
    /// Creates a new instance of [`InvoiceService`]
    pub fn new(odoo: &'a OdooClient, session: &'a Session) -> Self {
        Self {
            orders: SaleOrderRepository::new(odoo, session),
            invoices: InvoiceRepository::new(odoo, session),
            wizard: AdvancePaymentWizard::new(odoo, session),
        }
    }

    /// Invoices the delivered quantities of the sale order named `order_name`
    ///
    /// Runs Odoo's advance payment wizard in two steps (create, then `create_invoices`)
    /// and reports the newest invoice linked to the order afterwards.
    ///
    /// # Arguments
    /// - `order_name` - Reference of the sale order, e.g. `S00042`
    ///
    /// # Returns
    /// - `Ok(InvoiceCreatedDto)` - The wizard ran, serialization quirk included
    /// - `Err(Error::NotFound)` - Unknown reference, or no invoice linked afterwards
    /// - `Err(Error::InvoiceCreation)` - Either wizard step failed otherwise
    pub async fn create_from_order(&self, order_name: &str) -> Result<InvoiceCreatedDto, Error> {
        let order_ids = resolve_order_ids(&self.orders, order_name).await?;

        let wizard_id = self
            .wizard
            .create(&order_ids)
            .await
            .map_err(Error::InvoiceCreation)?;
        let outcome =
            classify_wizard_result(self.wizard.create_invoices(wizard_id, &order_ids).await)?;
        tracing::info!(order_name = %order_name, wizard_id, ?outcome, "ran invoice wizard");

        let (sale_order_id, invoice) = self.latest_invoice(order_name, &order_ids).await?;

        Ok(InvoiceCreatedDto {
            message: format!("Invoice created for sale order {}", order_name),
            sale_order_id,
            invoice,
        })
    }

    /// The newest invoice of the sale order named `order_name`
    pub async fn invoice_for_order(&self, order_name: &str) -> Result<InvoiceSummaryDto, Error> {
        let order_ids = resolve_order_ids(&self.orders, order_name).await?;

        let (sale_order_id, invoice) = self.latest_invoice(order_name, &order_ids).await?;

        Ok(InvoiceSummaryDto {
            sale_order_id,
            invoice,
        })
    }

    async fn latest_invoice(
        &self,
        order_name: &str,
        order_ids: &[i64],
    ) -> Result<(i64, InvoiceDto), Error> {
        // order_ids is never empty once resolved
        let sale_order_id = order_ids.first().copied().unwrap_or_default();

        let invoice_ids = self.orders.invoice_ids(order_ids).await?;
        let not_found = || Error::NotFound(format!("No invoice for sale order '{}'", order_name));

        let invoice_id = latest_invoice_id(&invoice_ids).ok_or_else(not_found)?;
        let invoice = self.invoices.get(invoice_id).await?.ok_or_else(not_found)?;

        Ok((sale_order_id, invoice))
    }
}
