use crate::server::{error::Error, odoo::OdooClient};

/// Printable documents exposed by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Invoice,
    PurchaseOrder,
}

impl ReportKind {
    /// Odoo report template rendering this document
    pub fn template(self) -> &'static str {
        match self {
            Self::Invoice => "account.report_invoice",
            Self::PurchaseOrder => "purchase.report_purchaseorder",
        }
    }

    /// Attachment filename for the record `record_id`
    pub fn filename(self, record_id: i64) -> String {
        match self {
            Self::Invoice => format!("invoice_{}.pdf", record_id),
            Self::PurchaseOrder => format!("purchase_orders_{}.pdf", record_id),
        }
    }
}

/// A rendered PDF ready to be sent as an attachment
pub struct PdfDocument {
    pub filename: String,
    pub content: Vec<u8>,
}

pub struct ReportService<'a> {
    odoo: &'a OdooClient,
}

impl<'a> ReportService<'a> {
    /// Creates a new instance of [`ReportService`]
    pub fn new(odoo: &'a OdooClient) -> Self {
        Self { odoo }
    }

    /// Renders a report through a fresh web session
    ///
    /// Reports are not reachable over XML-RPC; this always logs into the web client first.
    ///
    /// # Arguments
    /// - `kind` - Document to render, which selects the template and filename
    /// - `record_id` - Odoo id of the record to print
    ///
    /// # Returns
    /// - `Ok(PdfDocument)` - The rendered PDF
    /// - `Err(Error::OdooError)` - Web login refused, or Odoo answered the report request
    ///   with a non-success status
    pub async fn render(&self, kind: ReportKind, record_id: i64) -> Result<PdfDocument, Error> {
        let session = self.odoo.login_document_session().await?;
        let content = self
            .odoo
            .fetch_report(&session, kind.template(), record_id)
            .await?;

        Ok(PdfDocument {
            filename: kind.filename(record_id),
            content,
        })
    }
}
