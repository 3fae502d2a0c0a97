//! Tests for the sale order endpoints.

use odoo_bridge::server::controller::sale_order::{
    cancel_quotation, confirm_quotation, get_orders_by_customer_id, get_orders_by_customer_name,
};

use super::*;

fn orders() -> serde_json::Value {
    json!([
        {
            "id": 31,
            "name": "S00031",
            "state": "sale",
            "create_date": "2025-03-01 09:12:44",
            "amount_total": 1250.5,
            "order_line": [101, 102],
        },
        {
            "id": 35,
            "name": "S00035",
            "state": "draft",
            "create_date": "2025-03-04 16:40:02",
            "amount_total": 0.0,
            "order_line": [],
        },
    ])
}

fn lines() -> serde_json::Value {
    json!([
        { "id": 101, "name": "[FURN_8888] Office Lamp", "product_uom_qty": 2.0, "price_unit": 40.25, "price_total": 80.5 },
        { "id": 102, "name": "[FURN_7800] Desk Combination", "product_uom_qty": 1.0, "price_unit": 1170.0, "price_total": 1170.0 },
    ])
}

/// Tests listing the orders of a customer by id.
///
/// Verifies that line ids are replaced by the lines themselves, and that an order without
/// lines does not trigger a read.
///
/// Expected: 200 OK with expanded order lines
#[tokio::test]
async fn expands_order_lines_of_customer_orders() {
    let mut setup = TestSetup::new().await;
    setup
        .odoo()
        .with_execute_kw_matching(
            "sale.order",
            "search_read",
            &["<string>partner_id</string>", "<string>in</string>"],
            orders(),
            1,
        )
        .with_execute_kw("sale.order.line", "read", lines(), 1);

    let response = get_orders_by_customer_id(State(setup.app_state()), Path(14))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body[0]["name"], "S00031");
    assert_eq!(body[0]["order_line"][1]["name"], "[FURN_7800] Desk Combination");
    assert_eq!(body[0]["order_line"][0]["price_total"], 80.5);
    assert_eq!(body[1]["order_line"], json!([]));
    setup.assert_mocks();
}

/// Tests an order line whose description is empty in Odoo.
///
/// Expected: 200 OK with `name: null` on that line
#[tokio::test]
async fn order_line_without_description_is_null() {
    let mut setup = TestSetup::new().await;
    setup
        .odoo()
        .with_execute_kw("sale.order", "search_read", orders(), 1)
        .with_execute_kw(
            "sale.order.line",
            "read",
            json!([
                { "id": 101, "name": false, "product_uom_qty": 2.0, "price_unit": 40.25, "price_total": 80.5 },
                { "id": 102, "name": "[FURN_7800] Desk Combination", "product_uom_qty": 1.0, "price_unit": 1170.0, "price_total": 1170.0 },
            ]),
            1,
        );

    let response = get_orders_by_customer_id(State(setup.app_state()), Path(14))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body[0]["order_line"][0]["name"], json!(null));
    assert_eq!(body[0]["order_line"][1]["name"], "[FURN_7800] Desk Combination");
    setup.assert_mocks();
}

/// Tests listing the orders of customers found by name.
///
/// Expected: 200 OK with the orders of the matching partner
#[tokio::test]
async fn lists_orders_of_customer_found_by_name() {
    let mut setup = TestSetup::new().await;
    setup
        .odoo()
        .with_execute_kw_matching(
            "res.partner",
            "search",
            &["<string>Azure Interior</string>"],
            json!([14]),
            1,
        )
        .with_execute_kw("sale.order", "search_read", orders(), 1)
        .with_execute_kw("sale.order.line", "read", lines(), 1);

    let response =
        get_orders_by_customer_name(State(setup.app_state()), Path("Azure Interior".to_string()))
            .await
            .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);
    setup.assert_mocks();
}

/// Tests listing orders for a customer name nobody has.
///
/// Expected: 200 OK with a not found failure body and no order lookup
#[tokio::test]
async fn unknown_customer_name_is_not_found_without_reading_orders() {
    let mut setup = TestSetup::new().await;
    setup
        .odoo()
        .with_execute_kw("res.partner", "search", json!([]), 1)
        .with_execute_kw("sale.order", "search_read", orders(), 0);

    let response =
        get_orders_by_customer_name(State(setup.app_state()), Path("Nobody".to_string()))
            .await
            .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["error"], "not found");
    setup.assert_mocks();
}

/// Tests confirming a quotation by reference.
///
/// Expected: 200 OK with the confirmed ids
#[tokio::test]
async fn confirms_quotation() {
    let mut setup = TestSetup::new().await;
    setup
        .odoo()
        .with_execute_kw_matching(
            "sale.order",
            "search",
            &["<string>S00042</string>"],
            json!([42]),
            1,
        )
        .with_execute_kw("sale.order", "action_confirm", json!(true), 1);

    let response = confirm_quotation(State(setup.app_state()), Path("S00042".to_string()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Sale order S00042 confirmed", "order_name": "S00042", "ids": [42] })
    );
    setup.assert_mocks();
}

/// Tests cancelling an order by reference.
///
/// Expected: 200 OK with the cancelled ids
#[tokio::test]
async fn cancels_quotation() {
    let mut setup = TestSetup::new().await;
    setup
        .odoo()
        .with_execute_kw_matching(
            "sale.order",
            "search",
            &["<string>S00042</string>"],
            json!([42]),
            1,
        )
        .with_execute_kw_matching("sale.order", "action_cancel", &["<int>42</int>"], json!(true), 1)
        .with_execute_kw("sale.order", "action_confirm", json!(true), 0);

    let response = cancel_quotation(State(setup.app_state()), Path("S00042".to_string()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Sale order S00042 cancelled", "order_name": "S00042", "ids": [42] })
    );
    setup.assert_mocks();
}

/// Tests confirming a quotation that does not exist.
///
/// Expected: 200 OK with a not found failure body and no confirmation call
#[tokio::test]
async fn unknown_quotation_is_not_confirmed() {
    let mut setup = TestSetup::new().await;
    setup
        .odoo()
        .with_execute_kw("sale.order", "search", json!([]), 1)
        .with_execute_kw("sale.order", "action_confirm", json!(true), 0);

    let response = confirm_quotation(State(setup.app_state()), Path("S99999".to_string()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Sale order 'S99999' not found", "error": "not found" })
    );
    setup.assert_mocks();
}

/// Tests cancelling a quotation that does not exist.
///
/// Expected: 200 OK with a not found failure body and no cancellation call
#[tokio::test]
async fn unknown_quotation_is_not_cancelled() {
    let mut setup = TestSetup::new().await;
    setup
        .odoo()
        .with_execute_kw("sale.order", "search", json!([]), 1)
        .with_execute_kw("sale.order", "action_cancel", json!(true), 0);

    let response = cancel_quotation(State(setup.app_state()), Path("S99999".to_string()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["error"], "not found");
    setup.assert_mocks();
}

/// Tests cancelling a locked order.
///
/// Verifies that Odoo's refusal is passed on as an Odoo error rather than an HTTP error.
///
/// Expected: 200 OK with `message: "Odoo error"` and Odoo's reason
#[tokio::test]
async fn cancelling_locked_order_reports_odoo_error() {
    let mut setup = TestSetup::new().await;
    setup
        .odoo()
        .with_execute_kw("sale.order", "search", json!([42]), 1)
        .with_execute_kw_fault(
            "sale.order",
            "action_cancel",
            "You cannot cancel a locked order. Please unlock it first.",
            1,
        );

    let response = cancel_quotation(State(setup.app_state()), Path("S00042".to_string()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Odoo error");
    assert!(body["error"].as_str().unwrap().contains("locked order"));
    setup.assert_mocks();
}
