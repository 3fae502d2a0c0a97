//! Mock endpoints standing in for an Odoo instance.
//!
//! Each `with_*` method registers one mock on the [`TestSetup`] server and keeps it in
//! [`TestSetup::mocks`], so that [`TestSetup::assert_mocks`] verifies it was called exactly
//! `expected_requests` times. Methods consume and return the fixture handle for chaining.

use mockito::Matcher;
use serde_json::{json, Value};

use crate::{
    constant::{TEST_DB, TEST_LOGIN, TEST_PASSWORD, TEST_SERVER_VERSION, TEST_SESSION_ID, TEST_UID},
    xmlrpc, TestSetup,
};

const COMMON_PATH: &str = "/xmlrpc/2/common";
const OBJECT_PATH: &str = "/xmlrpc/2/object";
const WEB_SESSION_PATH: &str = "/web/session/authenticate";

pub struct OdooFixtures<'a> {
    pub(crate) setup: &'a mut TestSetup,
}

/// Matches the leading `execute_kw` params: credentials, model and method.
fn execute_kw_matcher(model: &str, method: &str) -> Matcher {
    let prefix = format!(
        "<methodName>execute_kw</methodName><params>\
         <param><value><string>{}</string></value></param>\
         <param><value><int>{}</int></value></param>\
         <param><value><string>{}</string></value></param>\
         <param><value><string>{}</string></value></param>\
         <param><value><string>{}</string></value></param>",
        TEST_DB, TEST_UID, TEST_PASSWORD, model, method
    );

    Matcher::Regex(regex::escape(&prefix))
}

impl<'a> OdooFixtures<'a> {
    fn keep(self, mock: mockito::Mock) -> Self {
        self.setup.mocks.push(mock);
        self
    }

    /// `common.authenticate` answering `uid`
    pub fn with_authenticate(self, uid: i64, expected_requests: usize) -> Self {
        let mock = self
            .setup
            .server
            .mock("POST", COMMON_PATH)
            .match_body(Matcher::Regex(
                "<methodName>authenticate</methodName>".to_string(),
            ))
            .with_status(200)
            .with_header("content-type", "text/xml")
            .with_body(xmlrpc::response(&json!(uid)))
            .expect(expected_requests)
            .create();

        self.keep(mock)
    }

    /// `common.authenticate` answering `false`, as Odoo does for bad credentials
    pub fn with_authenticate_rejected(self, expected_requests: usize) -> Self {
        let mock = self
            .setup
            .server
            .mock("POST", COMMON_PATH)
            .match_body(Matcher::Regex(
                "<methodName>authenticate</methodName>".to_string(),
            ))
            .with_status(200)
            .with_header("content-type", "text/xml")
            .with_body(xmlrpc::response(&json!(false)))
            .expect(expected_requests)
            .create();

        self.keep(mock)
    }

    /// `common.version` answering [`TEST_SERVER_VERSION`]
    pub fn with_version(self, expected_requests: usize) -> Self {
        let mock = self
            .setup
            .server
            .mock("POST", COMMON_PATH)
            .match_body(Matcher::Regex("<methodName>version</methodName>".to_string()))
            .with_status(200)
            .with_header("content-type", "text/xml")
            .with_body(xmlrpc::response(&json!({
                "server_version": TEST_SERVER_VERSION,
                "server_serie": TEST_SERVER_VERSION,
                "protocol_version": 1,
            })))
            .expect(expected_requests)
            .create();

        self.keep(mock)
    }

    /// `execute_kw` of `method` on `model` answering `result`
    pub fn with_execute_kw(
        self,
        model: &str,
        method: &str,
        result: Value,
        expected_requests: usize,
    ) -> Self {
        self.with_execute_kw_matching(model, method, &[], result, expected_requests)
    }

    /// Like [`OdooFixtures::with_execute_kw`], only matching calls whose body also contains
    /// every fragment of `body_fragments` verbatim
    ///
    /// Used to tell apart calls to the same method with different arguments, e.g.
    /// `&["<string>S00042</string>"]`.
    pub fn with_execute_kw_matching(
        self,
        model: &str,
        method: &str,
        body_fragments: &[&str],
        result: Value,
        expected_requests: usize,
    ) -> Self {
        let mut matchers = vec![execute_kw_matcher(model, method)];
        matchers.extend(
            body_fragments
                .iter()
                .map(|fragment| Matcher::Regex(regex::escape(fragment))),
        );

        let mock = self
            .setup
            .server
            .mock("POST", OBJECT_PATH)
            .match_body(Matcher::AllOf(matchers))
            .with_status(200)
            .with_header("content-type", "text/xml")
            .with_body(xmlrpc::response(&result))
            .expect(expected_requests)
            .create();

        self.keep(mock)
    }

    /// `execute_kw` of `method` on `model` raising an Odoo exception
    pub fn with_execute_kw_fault(
        self,
        model: &str,
        method: &str,
        message: &str,
        expected_requests: usize,
    ) -> Self {
        let mock = self
            .setup
            .server
            .mock("POST", OBJECT_PATH)
            .match_body(execute_kw_matcher(model, method))
            .with_status(200)
            .with_header("content-type", "text/xml")
            .with_body(xmlrpc::fault(1, message))
            .expect(expected_requests)
            .create();

        self.keep(mock)
    }

    /// Web client login setting the [`TEST_SESSION_ID`] cookie
    pub fn with_web_session(self, expected_requests: usize) -> Self {
        let mock = self
            .setup
            .server
            .mock("POST", WEB_SESSION_PATH)
            .match_body(Matcher::PartialJson(json!({
                "params": { "db": TEST_DB, "login": TEST_LOGIN, "password": TEST_PASSWORD }
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_header(
                "set-cookie",
                &format!("session_id={}; Expires=Sat, 01 Jan 2000 00:00:00 GMT; HttpOnly; Path=/", TEST_SESSION_ID),
            )
            .with_body(
                json!({
                    "jsonrpc": "2.0",
                    "id": null,
                    "result": { "uid": TEST_UID, "db": TEST_DB, "username": TEST_LOGIN }
                })
                .to_string(),
            )
            .expect(expected_requests)
            .create();

        self.keep(mock)
    }

    /// Web client login answering a JSON-RPC error
    pub fn with_web_session_rejected(self, expected_requests: usize) -> Self {
        let mock = self
            .setup
            .server
            .mock("POST", WEB_SESSION_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "jsonrpc": "2.0",
                    "id": null,
                    "error": {
                        "code": 200,
                        "message": "Odoo Server Error",
                        "data": { "name": "odoo.exceptions.AccessDenied", "message": "Access Denied" }
                    }
                })
                .to_string(),
            )
            .expect(expected_requests)
            .create();

        self.keep(mock)
    }

    /// Report download of `record_id` with `template`, requiring the session cookie
    pub fn with_report(
        self,
        template: &str,
        record_id: i64,
        pdf: &[u8],
        expected_requests: usize,
    ) -> Self {
        let path = format!("/report/pdf/{}/{}", template, record_id);
        let cookie = format!("session_id={}", TEST_SESSION_ID);

        let mock = self
            .setup
            .server
            .mock("GET", path.as_str())
            .match_header("cookie", cookie.as_str())
            .with_status(200)
            .with_header("content-type", "application/pdf")
            .with_body(pdf)
            .expect(expected_requests)
            .create();

        self.keep(mock)
    }

    /// Report download of `record_id` with `template` failing with `status`
    pub fn with_report_error(
        self,
        template: &str,
        record_id: i64,
        status: usize,
        body: &[u8],
        expected_requests: usize,
    ) -> Self {
        let path = format!("/report/pdf/{}/{}", template, record_id);

        let mock = self
            .setup
            .server
            .mock("GET", path.as_str())
            .with_status(status)
            .with_header("content-type", "text/html")
            .with_body(body)
            .expect(expected_requests)
            .create();

        self.keep(mock)
    }
}
