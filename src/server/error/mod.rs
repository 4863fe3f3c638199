//! Error types for the portfolio server.
//!
//! Domain errors (authentication, configuration, tasks) live in their own submodules and are
//! aggregated into [`Error`]. Every error converts into an HTTP response, anything without a
//! dedicated mapping becomes a logged 500 with a generic body.

pub mod auth;
pub mod config;
pub mod task;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, task::TaskError},
};

/// Main error type for the portfolio server.
///
/// Uses `#[from]` conversions so handlers, services and repositories can propagate any of the
/// underlying errors with `?`.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session, credentials, registration, confirmation).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Task list error (unknown task, invalid title).
    #[error(transparent)]
    TaskError(#[from] TaskError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::TaskError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Converts any displayable error into a 500 response.
///
/// The full error is logged, the client only receives a generic message so implementation
/// details never leak.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

/// JSON [`ErrorDto`] response with the given status.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}
