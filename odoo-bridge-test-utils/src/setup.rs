use mockito::{Mock, Server, ServerGuard};

use crate::fixtures::OdooFixtures;

/// A mock Odoo server plus the mocks registered on it.
pub struct TestSetup {
    pub server: ServerGuard,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub async fn new() -> Self {
        TestSetup {
            server: Server::new_async().await,
            mocks: Vec::new(),
        }
    }

    /// Base URL to configure the Odoo client with
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Access the Odoo endpoint fixtures of this setup
    pub fn odoo(&mut self) -> OdooFixtures<'_> {
        OdooFixtures { setup: self }
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
