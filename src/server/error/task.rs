use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("Task {0:?} not found for the current user")]
    NotFound(i32),
    #[error("Task title must be between 1 and {max} characters")]
    InvalidTitle { max: usize },
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotFound(_) => error_response(StatusCode::NOT_FOUND, "Task not found"),
            Self::InvalidTitle { .. } => error_response(StatusCode::BAD_REQUEST, self.to_string()),
        }
    }
}
