pub mod constant;
pub mod fixtures;
pub mod setup;
pub mod xmlrpc;

pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{constant::*, fixtures::OdooFixtures, TestSetup};
}
