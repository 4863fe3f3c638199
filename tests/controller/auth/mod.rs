//! Tests for account and session endpoints.

mod confirm;
mod login;
mod logout;
mod register;
mod user;

use super::*;
