//! Tests for invoice creation, lookup and PDF download.

use axum::http::header;
use odoo_bridge::server::controller::{
    accounting::invoice::{get_invoice_by_sale_order, get_invoice_pdf},
    sale_order::create_invoice,
};

use super::*;

const QUIRK_TRACEBACK: &str = "Traceback (most recent call last):\n  File \"/usr/lib/python3/dist-packages/odoo/addons/base/controllers/rpc.py\", line 154, in xmlrpc_2\n    response = self._xmlrpc(service)\nTypeError: cannot marshal None unless allow_none is enabled\n";

fn invoice(id: i64) -> serde_json::Value {
    json!([{
        "id": id,
        "name": "INV/2025/00040",
        "state": "draft",
        "payment_state": "not_paid",
        "invoice_date": false,
        "amount_total": 1250.5,
        "amount_residual": 1250.5,
    }])
}

/// Registers the lookups run after the wizard: order name, invoice links, newest invoice.
fn with_invoice_lookup(fixtures: OdooFixtures<'_>, invoice_ids: serde_json::Value) -> OdooFixtures<'_> {
    fixtures
        .with_execute_kw_matching(
            "sale.order",
            "search",
            &["<string>S00042</string>"],
            json!([42]),
            1,
        )
        .with_execute_kw_matching(
            "sale.order",
            "read",
            &["<string>invoice_ids</string>"],
            json!([{ "id": 42, "invoice_ids": invoice_ids }]),
            1,
        )
        .with_execute_kw_matching("account.move", "read", &["<int>40</int>"], invoice(40), 1)
}

/// Tests invoice creation when Odoo cannot serialize the wizard's answer.
///
/// The invoices exist at that point, so the fault is ignored and the newest invoice is
/// looked up.
///
/// Expected: 200 OK with the invoice of highest id
#[tokio::test]
async fn serialization_quirk_is_ignored() {
    let mut setup = TestSetup::new().await;
    let fixtures = setup
        .odoo()
        .with_execute_kw_matching(
            "sale.advance.payment.inv",
            "create",
            &[
                "<string>delivered</string>",
                "<name>active_model</name><value><string>sale.order</string>",
            ],
            json!(77),
            1,
        )
        .with_execute_kw_fault("sale.advance.payment.inv", "create_invoices", QUIRK_TRACEBACK, 1);
    with_invoice_lookup(fixtures, json!([12, 40, 7]));

    let response = create_invoice(State(setup.app_state()), Path("S00042".to_string()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Invoice created for sale order S00042");
    assert_eq!(body["sale_order_id"], 42);
    assert_eq!(body["invoice"]["id"], 40);
    assert_eq!(body["invoice"]["invoice_date"], serde_json::Value::Null);
    setup.assert_mocks();
}

/// Tests invoice creation when the wizard answers normally.
///
/// Expected: 200 OK with the invoice of highest id
#[tokio::test]
async fn successful_wizard_returns_newest_invoice() {
    let mut setup = TestSetup::new().await;
    let fixtures = setup
        .odoo()
        .with_execute_kw("sale.advance.payment.inv", "create", json!(77), 1)
        .with_execute_kw(
            "sale.advance.payment.inv",
            "create_invoices",
            json!({ "type": "ir.actions.act_window", "res_model": "account.move", "res_id": 40 }),
            1,
        );
    with_invoice_lookup(fixtures, json!([40, 12]));

    let response = create_invoice(State(setup.app_state()), Path("S00042".to_string()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["invoice"]["name"], "INV/2025/00040");
    setup.assert_mocks();
}

/// Tests invoice creation when the wizard fails for another reason.
///
/// Expected: 500 Internal Server Error and no invoice lookup
#[tokio::test]
async fn other_wizard_fault_is_an_internal_error() {
    let mut setup = TestSetup::new().await;
    setup
        .odoo()
        .with_execute_kw("sale.order", "search", json!([42]), 1)
        .with_execute_kw("sale.advance.payment.inv", "create", json!(77), 1)
        .with_execute_kw_fault(
            "sale.advance.payment.inv",
            "create_invoices",
            "There is no invoiceable line. If a product has a Delivered quantities invoicing policy, please make sure that a quantity has been delivered.",
            1,
        )
        .with_execute_kw("sale.order", "read", json!([]), 0);

    let response = create_invoice(State(setup.app_state()), Path("S00042".to_string()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["error"], "Internal server error");
    setup.assert_mocks();
}

/// Tests invoice creation for an unknown sale order.
///
/// Expected: 200 OK with a not found failure body and no wizard
#[tokio::test]
async fn unknown_order_is_not_invoiced() {
    let mut setup = TestSetup::new().await;
    setup
        .odoo()
        .with_execute_kw("sale.order", "search", json!([]), 1)
        .with_execute_kw("sale.advance.payment.inv", "create", json!(77), 0);

    let response = create_invoice(State(setup.app_state()), Path("S99999".to_string()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["error"], "not found");
    setup.assert_mocks();
}

/// Tests looking up the invoice of a sale order.
///
/// Odoo does not sort `invoice_ids` by age; the highest id is the newest invoice.
///
/// Expected: 200 OK with invoice 40 out of `[12, 40, 7]`
#[tokio::test]
async fn lookup_picks_highest_invoice_id() {
    let mut setup = TestSetup::new().await;
    with_invoice_lookup(setup.odoo(), json!([12, 40, 7]));

    let response =
        get_invoice_by_sale_order(State(setup.app_state()), Path("S00042".to_string()))
            .await
            .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["sale_order_id"], 42);
    assert_eq!(body["invoice"]["id"], 40);
    setup.assert_mocks();
}

/// Tests looking up the invoice of a sale order that has none.
///
/// Expected: 200 OK with a not found failure body
#[tokio::test]
async fn lookup_without_invoice_is_not_found() {
    let mut setup = TestSetup::new().await;
    setup
        .odoo()
        .with_execute_kw("sale.order", "search", json!([42]), 1)
        .with_execute_kw("sale.order", "read", json!([{ "id": 42, "invoice_ids": [] }]), 1)
        .with_execute_kw("account.move", "read", invoice(40), 0);

    let response =
        get_invoice_by_sale_order(State(setup.app_state()), Path("S00042".to_string()))
            .await
            .into_response();

    assert_eq!(
        body_json(response).await,
        json!({ "message": "No invoice for sale order 'S00042'", "error": "not found" })
    );
    setup.assert_mocks();
}

/// Tests downloading an invoice PDF.
///
/// Expected: 200 OK, `application/pdf`, attachment named after the invoice id
#[tokio::test]
async fn downloads_invoice_pdf() {
    let pdf = b"%PDF-1.7\n%mock invoice\n%%EOF\n";
    let mut setup = TestSetup::new().await;
    setup
        .odoo()
        .with_web_session(1)
        .with_report("account.report_invoice", 40, pdf, 1);

    let response = get_invoice_pdf(State(setup.app_state()), Path(40))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"invoice_40.pdf\""
    );
    assert_eq!(body_bytes(response).await, pdf.to_vec());
    setup.assert_mocks();
}

/// Tests downloading a PDF Odoo refuses to render.
///
/// Expected: Odoo's status and body passed through unchanged
#[tokio::test]
async fn report_failure_is_forwarded() {
    let mut setup = TestSetup::new().await;
    setup
        .odoo()
        .with_web_session(1)
        .with_report_error(
            "account.report_invoice",
            999,
            404,
            b"<html><body>Record does not exist or has been deleted.</body></html>",
            1,
        );

    let response = get_invoice_pdf(State(setup.app_state()), Path(999))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/html");
    assert_eq!(
        body_bytes(response).await,
        b"<html><body>Record does not exist or has been deleted.</body></html>".to_vec()
    );
    setup.assert_mocks();
}

/// Tests a report failure whose body is not valid UTF-8.
///
/// Expected: the body forwarded byte for byte
#[tokio::test]
async fn report_failure_body_is_forwarded_as_bytes() {
    let body: &[u8] = b"\xff\xfe<html><body>Erreur interne</body></html>";
    let mut setup = TestSetup::new().await;
    setup
        .odoo()
        .with_web_session(1)
        .with_report_error("account.report_invoice", 40, 500, body, 1);

    let response = get_invoice_pdf(State(setup.app_state()), Path(40))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/html");
    assert_eq!(body_bytes(response).await, body.to_vec());
    setup.assert_mocks();
}

/// Tests downloading a PDF when the web login is refused.
///
/// Expected: 200 OK with an authentication failure body and no report request
#[tokio::test]
async fn rejected_web_login_is_an_authentication_failure() {
    let mut setup = TestSetup::new().await;
    setup
        .odoo()
        .with_web_session_rejected(1)
        .with_report("account.report_invoice", 40, b"%PDF", 0);

    let response = get_invoice_pdf(State(setup.app_state()), Path(40))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Odoo authentication failed");
    assert!(body["error"].as_str().unwrap().contains("Access Denied"));
    setup.assert_mocks();
}
