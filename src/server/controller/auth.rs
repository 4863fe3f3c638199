use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{ConfirmDto, LoginDto, RegisterDto, UserDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::{app::AppState, session::user::SessionUserId},
        service::user::UserService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Register a new account
///
/// Creates an unconfirmed account and logs the new user in. The account must be confirmed
/// through the confirmation link before protected pages can be used.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created and user logged in", body = UserDto),
        (status = 400, description = "Invalid email, name or password", body = ErrorDto),
        (status = 409, description = "Email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(registration): Json<RegisterDto>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db, &state.app_url)
        .register(registration)
        .await?;

    start_user_session(&session, user.id).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(credentials): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db, &state.app_url)
        .login(credentials)
        .await?;

    start_user_session(&session, user.id).await?;

    tracing::debug!(user_id = %user.id, "User logged in");

    Ok((StatusCode::OK, Json(user)))
}

/// Logs the user out by clearing their session
///
/// # Responses
/// - 307 (Temporary Redirect): Successfully logged out, redirect to the login page
/// - 500 (Internal Server Error): There was an issue reading the session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Logged out, redirect to the login page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Sessions that were never stored have nothing to delete
    if maybe_user_id.is_some() {
        session.flush().await?;
    }

    Ok(Redirect::temporary("/login"))
}

/// Confirm an account with the token from its confirmation link
#[utoipa::path(
    post,
    path = "/api/auth/confirm",
    tag = AUTH_TAG,
    request_body = ConfirmDto,
    responses(
        (status = 200, description = "Account confirmed", body = UserDto),
        (status = 400, description = "Token invalid or already used", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm(
    State(state): State<AppState>,
    Json(confirmation): Json<ConfirmDto>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db, &state.app_url)
        .confirm(&confirmation.token)
        .await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Get the logged in user
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The logged in user", body = UserDto),
        (status = 404, description = "No user in session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Stores the user in session under a fresh session ID
async fn start_user_session(session: &Session, user_id: i32) -> Result<(), Error> {
    session.cycle_id().await?;
    SessionUserId::insert(session, user_id).await?;

    Ok(())
}
