pub static TEST_DB: &str = "bridge_test";
pub static TEST_LOGIN: &str = "api@example.com";
pub static TEST_PASSWORD: &str = "correct horse battery staple";
/// Deliberately distinct from every record id used in fixtures
pub static TEST_UID: i64 = 2;
pub static TEST_SESSION_ID: &str = "9f2c4d1e7a6b";
pub static TEST_SERVER_VERSION: &str = "17.0";
