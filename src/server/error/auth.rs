use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("User ID {0:?} has not confirmed their account")]
    UserNotConfirmed(i32),
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("An account with this email already exists")]
    EmailTaken,
    #[error("Invalid registration: {0}")]
    InvalidRegistration(String),
    #[error("Confirmation token is invalid or has already been used")]
    InvalidConfirmationToken,
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),
}

impl AuthError {
    fn user_not_found() -> Response {
        error_response(StatusCode::NOT_FOUND, "User not found")
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", self);

                Self::user_not_found()
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                Self::user_not_found()
            }
            Self::UserNotConfirmed(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                error_response(
                    StatusCode::FORBIDDEN,
                    "Please confirm your account before continuing.",
                )
            }
            Self::InvalidCredentials => {
                tracing::debug!("{}", self);

                error_response(StatusCode::UNAUTHORIZED, self.to_string())
            }
            Self::EmailTaken => error_response(StatusCode::CONFLICT, self.to_string()),
            Self::InvalidRegistration(reason) => error_response(StatusCode::BAD_REQUEST, reason),
            Self::InvalidConfirmationToken => {
                error_response(StatusCode::BAD_REQUEST, self.to_string())
            }
            Self::PasswordHash(_) => InternalServerError(self).into_response(),
        }
    }
}
