use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::Error,
    odoo::{OdooClient, Session},
};

/// Install the global tracing subscriber, `info` unless `RUST_LOG` says otherwise
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Build the Odoo client with the configured connection settings
pub fn build_odoo_client(config: &Config) -> Result<OdooClient, Error> {
    let odoo = OdooClient::builder(config.odoo.clone())
        .timeout(config.timeout)
        .accept_invalid_certs(config.accept_invalid_certs)
        .build()?;

    if config.accept_invalid_certs {
        tracing::warn!("TLS certificate verification is disabled for {}", config.odoo.url);
    }

    Ok(odoo)
}

/// Authenticate against Odoo, yielding the session shared by all requests
pub async fn connect_to_odoo(odoo: &OdooClient) -> Result<Session, Error> {
    let session = odoo.authenticate().await?;

    tracing::info!(
        uid = session.uid(),
        database = %odoo.config().database,
        "Authenticated against Odoo"
    );

    Ok(session)
}
