use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::server::service::report::PdfDocument;

/// Wraps a rendered report into a downloadable `application/pdf` response
///
/// # Example
/// ```ignore
/// let document = ReportService::new(&state.odoo).render(ReportKind::Invoice, 40).await?;
/// // Content-Disposition: attachment; filename="invoice_40.pdf"
/// let response = pdf_attachment(document);
/// ```
pub fn pdf_attachment(document: PdfDocument) -> Response {
    let disposition = format!("attachment; filename=\"{}\"", document.filename);

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document.content,
    )
        .into_response()
}
