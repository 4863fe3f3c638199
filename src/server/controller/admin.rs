use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{error::Error, model::app::AppState, service::user::UserService},
};

pub static ADMIN_TAG: &str = "admin";

/// List every account
///
/// Only reachable through the admin middleware, which answers 403 for anyone but admins.
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All accounts", body = Vec<UserDto>),
        (status = 403, description = "Not an admin", body = String),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let users = UserService::new(&state.db, &state.app_url)
        .list_users()
        .await?;

    Ok((StatusCode::OK, Json(users)))
}
