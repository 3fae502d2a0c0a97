use crate::{
    model::status::StatusDto,
    server::{error::odoo::OdooError, odoo::OdooClient},
};

pub struct StatusService<'a> {
    odoo: &'a OdooClient,
}

impl<'a> StatusService<'a> {
    /// Creates a new instance of [`StatusService`]
    pub fn new(odoo: &'a OdooClient) -> Self {
        Self { odoo }
    }

    /// Re-authenticates against Odoo and reports the server version
    ///
    /// Never fails: a connection problem is described in the returned status.
    ///
    /// # Returns
    /// - `StatusDto` with `error: None` - The uid, server version and database
    /// - `StatusDto` with `error: Some(_)` - The server, database and login that failed
    pub async fn status(&self) -> StatusDto {
        let config = self.odoo.config();

        match self.check().await {
            Ok((uid, version)) => StatusDto {
                message: format!(
                    "user {} connected: Odoo version {} is waiting for requests on {}.",
                    uid, version, config.database
                ),
                error: None,
            },
            Err(err) => {
                tracing::warn!("Odoo status check failed: {}", err);

                StatusDto {
                    message: format!(
                        "Connection problem with server {}, database: {}, user: {}",
                        config.url, config.database, config.login
                    ),
                    error: Some(err.to_string()),
                }
            }
        }
    }

    async fn check(&self) -> Result<(i64, String), OdooError> {
        let session = self.odoo.authenticate().await?;
        let version = self.odoo.version().await?;

        Ok((session.uid(), version.server_version))
    }
}
