use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::invoice::InvoiceSummaryDto,
    server::{
        controller::{accounting::ACCOUNTING_TAG, util::pdf_attachment},
        error::Error,
        model::app::AppState,
        service::{
            invoice::InvoiceService,
            report::{ReportKind, ReportService},
        },
    },
};

/// Get the newest invoice of a sale order
#[utoipa::path(
    get,
    path = "/accounting/invoice/by_saleorder/{name}",
    tag = ACCOUNTING_TAG,
    params(
        ("name" = String, Path, description = "Reference of the sale order, e.g. S00042"),
    ),
    responses(
        (status = 200, description = "Newest invoice of the sale order", body = InvoiceSummaryDto),
    ),
)]
pub async fn get_invoice_by_sale_order(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let invoice_service = InvoiceService::new(&state.odoo, &state.session);

    let summary = invoice_service.invoice_for_order(&name).await?;

    Ok((StatusCode::OK, Json(summary)))
}

/// Download an invoice as PDF
///
/// # Arguments
/// - `id` - Odoo id of the invoice (`account.move`)
///
/// # Returns
/// - `200 OK` - `invoice_{id}.pdf` as an attachment
/// - Any other status - Odoo's status, `Content-Type` and body when it refuses to render
#[utoipa::path(
    get,
    path = "/accounting/invoice/get/pdf/{id}",
    tag = ACCOUNTING_TAG,
    params(
        ("id" = i64, Path, description = "Odoo id of the invoice"),
    ),
    responses(
        (status = 200, description = "Rendered invoice", content_type = "application/pdf", body = Vec<u8>),
        (status = "default", description = "Status and body forwarded from Odoo"),
    ),
)]
pub async fn get_invoice_pdf(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    let report_service = ReportService::new(&state.odoo);

    let document = report_service.render(ReportKind::Invoice, id).await?;

    Ok(pdf_attachment(document))
}
