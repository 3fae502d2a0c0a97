use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::status::StatusDto,
    server::{model::app::AppState, service::status::StatusService},
};

pub static STATUS_TAG: &str = "status";

/// Check the connection to Odoo
///
/// Authenticates again on every call; a failed check is reported in the body, never as an
/// HTTP error.
#[utoipa::path(
    get,
    path = "/get-status",
    tag = STATUS_TAG,
    responses(
        (status = 200, description = "Connection status, with `Error` set when Odoo is unreachable", body = StatusDto),
    ),
)]
pub async fn get_status(State(state): State<AppState>) -> impl IntoResponse {
    let status = StatusService::new(&state.odoo).status().await;

    (StatusCode::OK, Json(status))
}
