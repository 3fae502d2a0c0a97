use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::customer::{CustomerDto, CustomerOptionDto},
    server::{error::Error, model::app::AppState, service::customer::CustomerService},
};

pub static CUSTOMER_TAG: &str = "customer";

/// List every customer as a select option
#[utoipa::path(
    get,
    path = "/customers/all",
    tag = CUSTOMER_TAG,
    responses(
        (status = 200, description = "Partners with a positive customer rank", body = Vec<CustomerOptionDto>),
    ),
)]
pub async fn get_all_customers(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let customer_service = CustomerService::new(&state.odoo, &state.session);

    let customers = customer_service.list_customers().await?;

    Ok((StatusCode::OK, Json(customers)))
}

/// List customers that are companies as select options
#[utoipa::path(
    get,
    path = "/customers/companies",
    tag = CUSTOMER_TAG,
    responses(
        (status = 200, description = "Company partners with a positive customer rank", body = Vec<CustomerOptionDto>),
    ),
)]
pub async fn get_company_customers(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let customer_service = CustomerService::new(&state.odoo, &state.session);

    let companies = customer_service.list_companies().await?;

    Ok((StatusCode::OK, Json(companies)))
}

/// Historic path of [`get_company_customers`]
#[utoipa::path(
    get,
    path = "/customers/list",
    tag = CUSTOMER_TAG,
    responses(
        (status = 200, description = "Company partners with a positive customer rank", body = Vec<CustomerOptionDto>),
    ),
)]
pub async fn list_customers(state: State<AppState>) -> Result<impl IntoResponse, Error> {
    get_company_customers(state).await
}

/// Get the details of a customer
///
/// # Arguments
/// - `state` - Application state holding the Odoo client and session
/// - `id` - Odoo id of the partner
///
/// # Returns
/// - `200 OK` - [`CustomerDto`], Odoo's `false` fields as `null`
/// - `200 OK` - `{message, error: "not found"}` when no partner has that id
#[utoipa::path(
    get,
    path = "/customers/{id}",
    tag = CUSTOMER_TAG,
    params(
        ("id" = i64, Path, description = "Odoo id of the partner"),
    ),
    responses(
        (status = 200, description = "Customer details, or `{message, error}` when the partner does not exist", body = CustomerDto),
    ),
)]
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    let customer_service = CustomerService::new(&state.odoo, &state.session);

    let customer = customer_service.get_customer(id).await?;

    Ok((StatusCode::OK, Json(customer)))
}
