//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with an in-memory database and session, verifying status codes,
//! response bodies and the session record they leave behind.

mod admin;
mod auth;
mod task;

use portfolio_test_utils::prelude::*;

use crate::util::TestContextExt;
