//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered here together with its OpenAPI specification, and Swagger UI
//! is served at `/api/docs` for interactive exploration of the API.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /get-status` - Check the connection to Odoo
/// - `GET /customers/all` - Customers as select options
/// - `GET /customers/companies` - Company customers as select options
/// - `GET /customers/list` - Historic path of `/customers/companies`
/// - `GET /customers/{id}` - Customer details
/// - `GET /saleorders/by_id/{id}` - Sale orders of a customer
/// - `GET /saleorders/by_name/{name}` - Sale orders of customers with a given name
/// - `PUT /saleorders/quotations/confirm/{name}` - Confirm a quotation
/// - `PUT /saleorders/quotations/cancel/{name}` - Cancel a quotation
/// - `POST /saleorders/invoice/create/{name}` - Invoice a sale order
/// - `GET /saleorders/delivery_date/querry/{id}` - Scheduled delivery date
/// - `PATCH /saleorders/delivery_date/confirm/{id}` - Accept or reject the delivery date
/// - `GET /accounting/invoice/by_saleorder/{name}` - Newest invoice of a sale order
/// - `GET /accounting/invoice/get/pdf/{id}` - Invoice PDF
/// - `GET /purchaseorders/get/pdf/{id}` - Purchase order PDF
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Returns
/// A `Router<AppState>` serving every endpoint above plus the Swagger UI at `/api/docs`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { odoo, session, timezone });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "odoo-bridge", description = "REST API over Odoo"), tags(
        (name = controller::status::STATUS_TAG, description = "Odoo connection status"),
        (name = controller::customer::CUSTOMER_TAG, description = "Customer lookup"),
        (name = controller::sale_order::SALE_ORDER_TAG, description = "Sale order workflow"),
        (name = controller::delivery::DELIVERY_TAG, description = "Delivery date negotiation"),
        (name = controller::accounting::ACCOUNTING_TAG, description = "Invoices"),
        (name = controller::purchase_order::PURCHASE_ORDER_TAG, description = "Purchase orders"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::status::get_status))
        .routes(routes!(controller::customer::get_all_customers))
        .routes(routes!(controller::customer::get_company_customers))
        .routes(routes!(controller::customer::list_customers))
        .routes(routes!(controller::customer::get_customer))
        .routes(routes!(controller::sale_order::get_orders_by_customer_id))
        .routes(routes!(controller::sale_order::get_orders_by_customer_name))
        .routes(routes!(controller::sale_order::confirm_quotation))
        .routes(routes!(controller::sale_order::cancel_quotation))
        .routes(routes!(controller::sale_order::create_invoice))
        .routes(routes!(controller::delivery::get_delivery_date))
        .routes(routes!(controller::delivery::decide_delivery_date))
        .routes(routes!(controller::accounting::invoice::get_invoice_by_sale_order))
        .routes(routes!(controller::accounting::invoice::get_invoice_pdf))
        .routes(routes!(controller::purchase_order::get_purchase_order_pdf))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
