use chrono_tz::Tz;

use crate::server::odoo::{OdooClient, Session};

#[derive(Clone)]
pub struct AppState {
    pub odoo: OdooClient,
    /// Session opened at startup, shared by every XML-RPC call
    pub session: Session,
    /// Timezone delivery dates are shown and entered in
    pub timezone: Tz,
}
