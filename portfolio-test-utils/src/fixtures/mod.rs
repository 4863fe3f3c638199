//! Fixtures inserted into the test database while a test runs.

pub mod task;
pub mod user;
