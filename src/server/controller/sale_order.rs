use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        invoice::InvoiceCreatedDto,
        sale_order::{OrderActionDto, SaleOrderDto},
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{invoice::InvoiceService, sale_order::SaleOrderService},
    },
};

pub static SALE_ORDER_TAG: &str = "sale order";

/// Get the sale orders of a customer by partner id
#[utoipa::path(
    get,
    path = "/saleorders/by_id/{id}",
    tag = SALE_ORDER_TAG,
    params(
        ("id" = i64, Path, description = "Odoo id of the customer"),
    ),
    responses(
        (status = 200, description = "Sale orders with their lines", body = Vec<SaleOrderDto>),
    ),
)]
pub async fn get_orders_by_customer_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    let sale_order_service = SaleOrderService::new(&state.odoo, &state.session);

    let orders = sale_order_service.orders_by_customer_id(id).await?;

    Ok((StatusCode::OK, Json(orders)))
}

/// Get the sale orders of every customer with the given name
#[utoipa::path(
    get,
    path = "/saleorders/by_name/{name}",
    tag = SALE_ORDER_TAG,
    params(
        ("name" = String, Path, description = "Exact name of the customer"),
    ),
    responses(
        (status = 200, description = "Sale orders with their lines", body = Vec<SaleOrderDto>),
    ),
)]
pub async fn get_orders_by_customer_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let sale_order_service = SaleOrderService::new(&state.odoo, &state.session);

    let orders = sale_order_service.orders_by_customer_name(&name).await?;

    Ok((StatusCode::OK, Json(orders)))
}

/// Confirm a quotation
///
/// Every order carrying the reference `name` is confirmed.
///
/// # Arguments
/// - `state` - Application state holding the Odoo client and session
/// - `name` - Order reference, e.g. `S00042`
///
/// # Returns
/// - `200 OK` - [`OrderActionDto`] listing the confirmed ids
/// - `200 OK` - `{message, error}` when the reference is unknown or Odoo refuses
#[utoipa::path(
    put,
    path = "/saleorders/quotations/confirm/{name}",
    tag = SALE_ORDER_TAG,
    params(
        ("name" = String, Path, description = "Reference of the quotation, e.g. S00042"),
    ),
    responses(
        (status = 200, description = "Quotation confirmed, or `{message, error}` when unknown or refused by Odoo", body = OrderActionDto),
    ),
)]
pub async fn confirm_quotation(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let sale_order_service = SaleOrderService::new(&state.odoo, &state.session);

    let result = sale_order_service.confirm_quotation(&name).await?;

    Ok((StatusCode::OK, Json(result)))
}

/// Cancel a quotation or sale order
///
/// # Arguments
/// - `name` - Order reference, e.g. `S00042`
///
/// # Returns
/// - `200 OK` - [`OrderActionDto`] listing the cancelled ids
/// - `200 OK` - `{message, error}` when the reference is unknown or Odoo refuses
#[utoipa::path(
    put,
    path = "/saleorders/quotations/cancel/{name}",
    tag = SALE_ORDER_TAG,
    params(
        ("name" = String, Path, description = "Reference of the order, e.g. S00042"),
    ),
    responses(
        (status = 200, description = "Order cancelled, or `{message, error}` when unknown or refused by Odoo", body = OrderActionDto),
    ),
)]
pub async fn cancel_quotation(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let sale_order_service = SaleOrderService::new(&state.odoo, &state.session);

    let result = sale_order_service.cancel_quotation(&name).await?;

    Ok((StatusCode::OK, Json(result)))
}

/// Invoice the delivered quantities of a sale order
///
/// # Returns
/// - `200 OK` - [`InvoiceCreatedDto`] with the newest invoice of the order
/// - `500 Internal Server Error` - The wizard failed for a reason other than Odoo's
///   serialization quirk
#[utoipa::path(
    post,
    path = "/saleorders/invoice/create/{name}",
    tag = SALE_ORDER_TAG,
    params(
        ("name" = String, Path, description = "Reference of the sale order, e.g. S00042"),
    ),
    responses(
        (status = 200, description = "Invoice created", body = InvoiceCreatedDto),
        (status = 500, description = "The invoice wizard failed", body = ErrorDto),
    ),
)]
pub async fn create_invoice(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let invoice_service = InvoiceService::new(&state.odoo, &state.session);

    let created = invoice_service.create_from_order(&name).await?;

    Ok((StatusCode::OK, Json(created)))
}
