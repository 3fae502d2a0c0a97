use std::sync::Arc;

/// Connection settings for one Odoo database.
///
/// Built once at startup and shared read-only by every request.
#[derive(Clone, PartialEq, Eq)]
pub struct OdooConfig {
    /// Base URL of the Odoo instance, without trailing slash.
    pub url: String,
    pub database: String,
    pub login: String,
    pub password: String,
}

impl OdooConfig {
    pub fn new(
        url: impl Into<String>,
        database: impl Into<String>,
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into().trim_end_matches('/').to_string(),
            database: database.into(),
            login: login.into(),
            password: password.into(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.url, path)
    }
}

// The password stays out of logs.
impl std::fmt::Debug for OdooConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OdooConfig")
            .field("url", &self.url)
            .field("database", &self.database)
            .field("login", &self.login)
            .finish_non_exhaustive()
    }
}

/// An authenticated XML-RPC identity used for object calls.
#[derive(Debug, Clone)]
pub struct Session {
    uid: i64,
    config: Arc<OdooConfig>,
}

impl Session {
    pub fn new(uid: i64, config: Arc<OdooConfig>) -> Self {
        Self { uid, config }
    }

    pub fn uid(&self) -> i64 {
        self.uid
    }

    pub fn config(&self) -> &OdooConfig {
        &self.config
    }
}

/// A cookie-bearing web session, only used to download rendered reports.
#[derive(Clone)]
pub struct DocumentSession {
    session_id: String,
}

impl DocumentSession {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
        }
    }

    /// Value for the `Cookie` request header.
    pub fn cookie_header(&self) -> String {
        format!("session_id={}", self.session_id)
    }
}

impl std::fmt::Debug for DocumentSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DocumentSession { .. }")
    }
}
