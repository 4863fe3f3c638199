use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Startup configuration errors, each names the offending environment variable
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
    #[error("SESSION_SECRETS must list at least one secret")]
    NoSessionSecrets,
    #[error("SESSION_SECRETS entry #{position} is shorter than {min_len} bytes")]
    SessionSecretTooShort { position: usize, min_len: usize },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
