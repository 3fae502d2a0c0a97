//! Test utilities for building AppState against the mock Odoo server

use std::sync::Arc;

use axum::{body::Body, response::Response};
use odoo_bridge::server::{
    model::app::AppState,
    odoo::{OdooClient, OdooConfig, Session},
};
use odoo_bridge_test_utils::{
    constant::{TEST_DB, TEST_LOGIN, TEST_PASSWORD, TEST_UID},
    TestSetup,
};

/// Extension trait for TestSetup to create clients and AppState pointing at the mock server
pub trait TestSetupExt {
    fn odoo_client(&self) -> OdooClient;
    fn app_state(&self) -> AppState;
}

impl TestSetupExt for TestSetup {
    fn odoo_client(&self) -> OdooClient {
        let config = OdooConfig::new(self.url(), TEST_DB, TEST_LOGIN, TEST_PASSWORD);

        OdooClient::new(config).unwrap()
    }

    fn app_state(&self) -> AppState {
        let odoo = self.odoo_client();
        let session = Session::new(TEST_UID, Arc::new(odoo.config().clone()));

        AppState {
            odoo,
            session,
            timezone: chrono_tz::Europe::Zurich,
        }
    }
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
