//! Constant values used across tests.

/// Base URL used to build confirmation links in tests.
pub static TEST_APP_URL: &str = "http://localhost:8080";

/// Plain text password of every user inserted by the fixtures.
pub static TEST_PASSWORD: &str = "correct horse battery staple";
