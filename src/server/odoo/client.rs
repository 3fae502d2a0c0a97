use std::{collections::BTreeMap, sync::Arc, time::Duration};

use reqwest::{
    header::{CONTENT_TYPE, COOKIE},
    redirect, Response,
};
use serde::Deserialize;
use serde_json::json;

use crate::server::error::odoo::OdooError;

use super::{
    session::{DocumentSession, OdooConfig, Session},
    value::Value,
    xmlrpc::{self, MethodResponse},
};

const COMMON_ENDPOINT: &str = "/xmlrpc/2/common";
const OBJECT_ENDPOINT: &str = "/xmlrpc/2/object";
const WEB_SESSION_ENDPOINT: &str = "/web/session/authenticate";
const SESSION_COOKIE: &str = "session_id";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for a single Odoo database.
///
/// Wraps both of Odoo's authentication channels:
/// - XML-RPC (`/xmlrpc/2/common` + `/xmlrpc/2/object`) yielding a numeric uid, used for
///   every object call through [`OdooClient::invoke`]
/// - the JSON-RPC web session (`/web/session/authenticate`) yielding a `session_id`
///   cookie, used only by [`OdooClient::fetch_report`]
///
/// No call is ever retried; a rejected credential is not a transient condition.
#[derive(Clone)]
pub struct OdooClient {
    http: reqwest::Client,
    config: Arc<OdooConfig>,
}

/// Builder for [`OdooClient`].
pub struct OdooClientBuilder {
    config: OdooConfig,
    timeout: Duration,
    accept_invalid_certs: bool,
}

impl OdooClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Skip TLS certificate verification, for instances behind self-signed certificates.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    pub fn build(self) -> Result<OdooClient, OdooError> {
        // Report URLs redirect to the login page once the web session expires; surface
        // that as a failed download instead of returning the login page as a PDF.
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .redirect(redirect::Policy::none())
            .build()?;

        Ok(OdooClient {
            http,
            config: Arc::new(self.config),
        })
    }
}

/// Response of `common.version()`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerVersion {
    pub server_version: String,
    #[serde(default)]
    pub protocol_version: Option<i64>,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    #[serde(default)]
    result: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<JsonRpcError>,
}

#[derive(Deserialize)]
struct JsonRpcError {
    message: String,
    #[serde(default)]
    data: Option<JsonRpcErrorData>,
}

#[derive(Deserialize)]
struct JsonRpcErrorData {
    message: String,
}

impl OdooClient {
    pub fn builder(config: OdooConfig) -> OdooClientBuilder {
        OdooClientBuilder {
            config,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            accept_invalid_certs: false,
        }
    }

    /// Creates a client with default timeout and TLS verification.
    pub fn new(config: OdooConfig) -> Result<Self, OdooError> {
        Self::builder(config).build()
    }

    pub fn config(&self) -> &OdooConfig {
        &self.config
    }

    async fn call(&self, path: &str, method: &str, params: &[Value]) -> Result<Value, OdooError> {
        let response = self
            .http
            .post(self.config.endpoint(path))
            .header(CONTENT_TYPE, "text/xml")
            .body(xmlrpc::encode_call(method, params))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(OdooError::Protocol(format!(
                "{} answered {} to {}: {}",
                path, status, method, body
            )));
        }

        match xmlrpc::decode_response(&body)? {
            MethodResponse::Success(value) => Ok(value),
            MethodResponse::Fault(fault) => Err(OdooError::Fault(fault)),
        }
    }

    /// Authenticates over XML-RPC and returns the session used for object calls.
    ///
    /// # Returns
    /// - `Ok(Session)` - Odoo returned a uid
    /// - `Err(OdooError::Authentication)` - Odoo returned `false` or rejected the database
    /// - `Err(OdooError::Transport)` - Odoo could not be reached
    pub async fn authenticate(&self) -> Result<Session, OdooError> {
        let params = [
            Value::from(self.config.database.as_str()),
            Value::from(self.config.login.as_str()),
            Value::from(self.config.password.as_str()),
            Value::Struct(BTreeMap::new()),
        ];

        let uid = match self.call(COMMON_ENDPOINT, "authenticate", &params).await {
            Ok(uid) => uid,
            Err(OdooError::Fault(fault)) => return Err(OdooError::Authentication(fault.message)),
            Err(err) => return Err(err),
        };

        match uid {
            Value::Int(uid) if uid > 0 => {
                tracing::debug!(uid, database = %self.config.database, "authenticated with Odoo");

                Ok(Session::new(uid, self.config.clone()))
            }
            _ => Err(OdooError::Authentication(
                "bad username or password".to_string(),
            )),
        }
    }

    /// Fetches the server version information.
    pub async fn version(&self) -> Result<ServerVersion, OdooError> {
        self.call(COMMON_ENDPOINT, "version", &[])
            .await?
            .into_typed()
    }

    /// Calls `method` on `model` through `execute_kw`.
    ///
    /// This is the single path every business operation takes; it does not know about
    /// any particular model.
    ///
    /// # Arguments
    /// - `session` - Session returned by [`OdooClient::authenticate`]
    /// - `model` - Model name, e.g. `sale.order`
    /// - `method` - Method name, e.g. `search_read` or `action_confirm`
    /// - `args` - Positional arguments, must be an array
    /// - `kwargs` - Keyword arguments, a struct, if any
    pub async fn invoke(
        &self,
        session: &Session,
        model: &str,
        method: &str,
        args: Value,
        kwargs: Option<Value>,
    ) -> Result<Value, OdooError> {
        let credentials = session.config();

        let mut params = vec![
            Value::from(credentials.database.as_str()),
            Value::Int(session.uid()),
            Value::from(credentials.password.as_str()),
            Value::from(model),
            Value::from(method),
            args,
        ];
        if let Some(kwargs) = kwargs {
            params.push(kwargs);
        }

        tracing::debug!(model, method, "calling Odoo");

        self.call(OBJECT_ENDPOINT, "execute_kw", &params).await
    }

    /// Logs into the web client and returns the cookie session used for report downloads.
    pub async fn login_document_session(&self) -> Result<DocumentSession, OdooError> {
        let payload = json!({
            "jsonrpc": "2.0",
            "method": "call",
            "params": {
                "db": self.config.database,
                "login": self.config.login,
                "password": self.config.password,
            },
        });

        let response = self
            .http
            .post(self.config.endpoint(WEB_SESSION_ENDPOINT))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OdooError::Authentication(format!(
                "web session login answered {}",
                status
            )));
        }

        let session_id = session_cookie(&response);
        let body: JsonRpcResponse = response.json().await?;

        if let Some(error) = body.error {
            let reason = error.data.map(|data| data.message).unwrap_or(error.message);
            return Err(OdooError::Authentication(reason));
        }

        let uid = body
            .result
            .as_ref()
            .and_then(|result| result.get("uid"))
            .and_then(serde_json::Value::as_i64);
        if uid.is_none() {
            return Err(OdooError::Authentication(
                "bad username or password".to_string(),
            ));
        }

        let session_id = session_id.ok_or_else(|| {
            OdooError::Authentication("web session login returned no session cookie".to_string())
        })?;

        Ok(DocumentSession::new(session_id))
    }

    /// Downloads a rendered PDF report.
    ///
    /// # Arguments
    /// - `session` - Session returned by [`OdooClient::login_document_session`]
    /// - `template` - Report template name, e.g. `account.report_invoice`
    /// - `record_id` - Id of the record to render
    ///
    /// # Returns
    /// - `Ok(Vec<u8>)` - The PDF document
    /// - `Err(OdooError::Report)` - Odoo answered a non-success status, raw body and
    ///   content type included
    pub async fn fetch_report(
        &self,
        session: &DocumentSession,
        template: &str,
        record_id: i64,
    ) -> Result<Vec<u8>, OdooError> {
        let url = self
            .config
            .endpoint(&format!("/report/pdf/{}/{}", template, record_id));

        let response = self
            .http
            .get(url)
            .header(COOKIE, session.cookie_header())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string);
            let body = response.bytes().await.unwrap_or_default();

            return Err(OdooError::Report {
                status: status.as_u16(),
                content_type,
                body,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

/// The `session_id` cookie set by a web login, if any.
fn session_cookie(response: &Response) -> Option<String> {
    response
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE && !cookie.value().is_empty())
        .map(|cookie| cookie.value().to_string())
}
