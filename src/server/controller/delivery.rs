use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        delivery::{DeliveryDateDto, DeliveryDecisionDto, DeliveryDecisionResultDto},
    },
    server::{error::Error, model::app::AppState, service::delivery::DeliveryService},
};

pub static DELIVERY_TAG: &str = "delivery";

/// Get the scheduled delivery date of a sale order
// The misspelled path segment is what existing clients call.
#[utoipa::path(
    get,
    path = "/saleorders/delivery_date/querry/{id}",
    tag = DELIVERY_TAG,
    params(
        ("id" = i64, Path, description = "Odoo id of the sale order"),
    ),
    responses(
        (status = 200, description = "Scheduled delivery date in the display timezone, or `{message, error}`", body = DeliveryDateDto),
    ),
)]
pub async fn get_delivery_date(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    let delivery_service = DeliveryService::new(&state.odoo, &state.session, state.timezone);

    let delivery_date = delivery_service.delivery_date(id).await?;

    Ok((StatusCode::OK, Json(delivery_date)))
}

/// Accept or reject the scheduled delivery date of a sale order
///
/// # Arguments
/// - `state` - Application state; its timezone interprets `new_date`
/// - `id` - Odoo id of the sale order
/// - `decision` - `accept`, or `reject` with the `new_date` proposed by the customer
///
/// # Returns
/// - `200 OK` - [`DeliveryDecisionResultDto`]
/// - `400 Bad Request` - `reject` without a valid `new_date`, checked before calling Odoo
#[utoipa::path(
    patch,
    path = "/saleorders/delivery_date/confirm/{id}",
    tag = DELIVERY_TAG,
    params(
        ("id" = i64, Path, description = "Odoo id of the sale order"),
    ),
    request_body = DeliveryDecisionDto,
    responses(
        (status = 200, description = "Decision applied", body = DeliveryDecisionResultDto),
        (status = 400, description = "Missing or invalid new_date on reject", body = ErrorDto),
    ),
)]
pub async fn decide_delivery_date(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(decision): Json<DeliveryDecisionDto>,
) -> Result<impl IntoResponse, Error> {
    let delivery_service = DeliveryService::new(&state.odoo, &state.session, state.timezone);

    let result = delivery_service.decide(id, decision).await?;

    Ok((StatusCode::OK, Json(result)))
}
