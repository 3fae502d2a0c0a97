//! Tests for the get_status endpoint.

use odoo_bridge::server::controller::status::get_status;

use super::*;

/// Tests the status message of a reachable Odoo.
///
/// Verifies that the endpoint authenticates again and reports uid, version and database.
///
/// Expected: 200 OK with `Message` and no `Error`
#[tokio::test]
async fn reports_uid_and_version_when_connected() {
    let mut setup = TestSetup::new().await;
    setup.odoo().with_authenticate(TEST_UID, 1).with_version(1);

    let response = get_status(State(setup.app_state())).await.into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body["Message"],
        "user 2 connected: Odoo version 17.0 is waiting for requests on bridge_test."
    );
    assert!(body.get("Error").is_none());
    setup.assert_mocks();
}

/// Tests the status message when Odoo rejects the credentials.
///
/// Verifies that the version is not requested after a failed authentication and that the
/// failure is described in the body instead of an HTTP error.
///
/// Expected: 200 OK with `Message` naming the connection settings and `Error` set
#[tokio::test]
async fn reports_connection_problem_when_authentication_fails() {
    let mut setup = TestSetup::new().await;
    setup.odoo().with_authenticate_rejected(1).with_version(0);

    let response = get_status(State(setup.app_state())).await.into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body["Message"],
        format!(
            "Connection problem with server {}, database: {}, user: {}",
            setup.url(),
            TEST_DB,
            TEST_LOGIN
        )
    );
    assert!(body["Error"]
        .as_str()
        .unwrap()
        .contains("bad username or password"));
    setup.assert_mocks();
}
