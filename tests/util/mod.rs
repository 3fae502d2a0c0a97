mod test_utils;

pub use test_utils::{body_bytes, body_json, TestSetupExt};
