use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::server::{
    controller::util::pdf_attachment,
    error::Error,
    model::app::AppState,
    service::report::{ReportKind, ReportService},
};

pub static PURCHASE_ORDER_TAG: &str = "purchase order";

/// Download a purchase order as PDF
#[utoipa::path(
    get,
    path = "/purchaseorders/get/pdf/{id}",
    tag = PURCHASE_ORDER_TAG,
    params(
        ("id" = i64, Path, description = "Odoo id of the purchase order"),
    ),
    responses(
        (status = 200, description = "Rendered purchase order", content_type = "application/pdf", body = Vec<u8>),
        (status = "default", description = "Status and body forwarded from Odoo"),
    ),
)]
pub async fn get_purchase_order_pdf(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    let report_service = ReportService::new(&state.odoo);

    let document = report_service.render(ReportKind::PurchaseOrder, id).await?;

    Ok(pdf_attachment(document))
}
