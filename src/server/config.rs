use std::{net::SocketAddr, time::Duration};

use chrono_tz::Tz;

use crate::server::{error::config::ConfigError, odoo::OdooConfig};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Zurich;

pub struct Config {
    pub odoo: OdooConfig,
    pub accept_invalid_certs: bool,
    pub timeout: Duration,
    pub bind_address: SocketAddr,
    pub timezone: Tz,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable source
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());
        let required =
            |var: &str| optional(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()));
        let invalid = |var: &str, reason: String| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason,
        };

        let odoo = OdooConfig::new(
            required("ODOO_URL")?,
            required("ODOO_DB")?,
            required("ODOO_USER")?,
            required("ODOO_PASSWORD")?,
        );

        let accept_invalid_certs = match optional("ODOO_ACCEPT_INVALID_CERTS") {
            Some(value) => value
                .trim()
                .parse::<bool>()
                .map_err(|e| invalid("ODOO_ACCEPT_INVALID_CERTS", e.to_string()))?,
            None => false,
        };

        let timeout_secs = match optional("ODOO_TIMEOUT_SECS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|e| invalid("ODOO_TIMEOUT_SECS", e.to_string()))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let bind_address = optional("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| invalid("BIND_ADDRESS", e.to_string()))?;

        let timezone = match optional("DELIVERY_TIMEZONE") {
            Some(value) => value
                .trim()
                .parse::<Tz>()
                .map_err(|e| invalid("DELIVERY_TIMEZONE", e.to_string()))?,
            None => DEFAULT_TIMEZONE,
        };

        Ok(Self {
            odoo,
            accept_invalid_certs,
            timeout: Duration::from_secs(timeout_secs),
            bind_address,
            timezone,
        })
    }
}
