//! Tests for the customer endpoints.

use std::collections::HashSet;

use odoo_bridge::server::controller::customer::{
    get_all_customers, get_company_customers, get_customer, list_customers,
};

use super::*;

/// First filter of a `search_read` domain starting with `customer_rank`
const ALL_CUSTOMERS_DOMAIN: &str = "<param><value><array><data><value><array><data><value><array><data><value><string>customer_rank</string>";
const COMPANY_FILTER: &str = "<string>is_company</string>";

fn partners() -> serde_json::Value {
    json!([
        { "id": 14, "name": "Azure Interior", "customer_rank": 3 },
        { "id": 26, "name": "Brandon Freeman", "customer_rank": 1 },
        { "id": 10, "name": "Deco Addict", "customer_rank": 5 },
    ])
}

fn companies() -> serde_json::Value {
    json!([
        { "id": 14, "name": "Azure Interior", "customer_rank": 3 },
        { "id": 10, "name": "Deco Addict", "customer_rank": 5 },
    ])
}

fn values(body: &serde_json::Value) -> HashSet<i64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|option| option["value"].as_i64().unwrap())
        .collect()
}

/// Tests listing all customers as select options.
///
/// Expected: 200 OK with `{value, label}` per partner
#[tokio::test]
async fn lists_all_customers_as_options() {
    let mut setup = TestSetup::new().await;
    setup.odoo().with_execute_kw_matching(
        "res.partner",
        "search_read",
        &[ALL_CUSTOMERS_DOMAIN],
        partners(),
        1,
    );

    let response = get_all_customers(State(setup.app_state()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body[0], json!({ "value": 14, "label": "Azure Interior" }));
    assert_eq!(body.as_array().unwrap().len(), 3);
    setup.assert_mocks();
}

/// Tests listing a partner that has no name.
///
/// Verifies that Odoo's `false` name becomes a `null` label instead of failing the request.
///
/// Expected: 200 OK with both partners, the second labeled `null`
#[tokio::test]
async fn nameless_partner_has_null_label() {
    let mut setup = TestSetup::new().await;
    setup.odoo().with_execute_kw(
        "res.partner",
        "search_read",
        json!([
            { "id": 14, "name": "Azure Interior" },
            { "id": 15, "name": false },
        ]),
        1,
    );

    let response = get_all_customers(State(setup.app_state()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!([
            { "value": 14, "label": "Azure Interior" },
            { "value": 15, "label": null },
        ])
    );
    setup.assert_mocks();
}

/// Tests that every company customer is also listed among all customers.
///
/// Expected: the ids of `/customers/companies` are a subset of `/customers/all`
#[tokio::test]
async fn all_customers_include_every_company() {
    let mut setup = TestSetup::new().await;
    setup
        .odoo()
        .with_execute_kw_matching("res.partner", "search_read", &[COMPANY_FILTER], companies(), 1)
        .with_execute_kw_matching(
            "res.partner",
            "search_read",
            &[ALL_CUSTOMERS_DOMAIN],
            partners(),
            1,
        );
    let state = setup.app_state();

    let all = body_json(
        get_all_customers(State(state.clone()))
            .await
            .into_response(),
    )
    .await;
    let companies = body_json(get_company_customers(State(state)).await.into_response()).await;

    assert!(values(&companies).is_subset(&values(&all)));
    setup.assert_mocks();
}

/// Tests the historic `/customers/list` path.
///
/// Expected: the same company query as `/customers/companies`
#[tokio::test]
async fn list_is_an_alias_of_companies() {
    let mut setup = TestSetup::new().await;
    setup
        .odoo()
        .with_execute_kw_matching("res.partner", "search_read", &[COMPANY_FILTER], companies(), 1);

    let response = list_customers(State(setup.app_state())).await.into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(values(&body_json(response).await), HashSet::from([14, 10]));
    setup.assert_mocks();
}

/// Tests reading a customer with empty fields.
///
/// Verifies that Odoo's `false` for empty fields is returned as `null`.
///
/// Expected: 200 OK with the detail fields
#[tokio::test]
async fn returns_customer_details() {
    let mut setup = TestSetup::new().await;
    setup.odoo().with_execute_kw(
        "res.partner",
        "read",
        json!([{
            "id": 14,
            "name": "Azure Interior",
            "email": "azure.Interior24@example.com",
            "city": "Fremont",
            "country_id": [233, "United States"],
            "comment": false,
        }]),
        1,
    );

    let response = get_customer(State(setup.app_state()), Path(14))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "id": 14,
            "name": "Azure Interior",
            "email": "azure.Interior24@example.com",
            "city": "Fremont",
            "country_id": [233, "United States"],
            "comment": null,
        })
    );
    setup.assert_mocks();
}

/// Tests reading a customer that does not exist.
///
/// Expected: 200 OK with a not found failure body
#[tokio::test]
async fn unknown_customer_is_not_found() {
    let mut setup = TestSetup::new().await;
    setup.odoo().with_execute_kw("res.partner", "read", json!([]), 1);

    let response = get_customer(State(setup.app_state()), Path(999))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Customer 999 not found", "error": "not found" })
    );
    setup.assert_mocks();
}

/// Tests that a remote exception is reported as an Odoo error.
///
/// Expected: 200 OK with `message: "Odoo error"`
#[tokio::test]
async fn remote_fault_is_reported_as_odoo_error() {
    let mut setup = TestSetup::new().await;
    setup.odoo().with_execute_kw_fault(
        "res.partner",
        "search_read",
        "Invalid field 'customer_rank' on model 'res.partner'",
        1,
    );

    let response = get_all_customers(State(setup.app_state()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Odoo error");
    assert!(body["error"].as_str().unwrap().contains("Invalid field"));
    setup.assert_mocks();
}
