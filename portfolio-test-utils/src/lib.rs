//! Shared test setup for the portfolio crates.
//!
//! Tests are written in two phases: a [`TestBuilder`] declares the tables and fixtures a test
//! needs, and the [`TestContext`] it builds exposes the in-memory database, an in-memory session
//! and fixture helpers for anything inserted while the test runs.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_APP_URL, TEST_PASSWORD},
        fixtures::user::factory,
        TestBuilder, TestContext, TestError,
    };
    pub use entity::portfolio_user::UserStatus;
}
