use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::user::UserDto,
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::user::SessionUserId},
        service::user::UserService,
    },
};

/// Retrieves user information from session and then from database
///
/// # Arguments
/// - `state`: Application state with database connection
/// - `session`: The user's session
///
/// # Returns
/// - `Ok(UserDto)`: User found
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: User ID not present in session
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))`: User ID exists in session but not
///   found in database (user is removed from the session)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_user_from_session(state: &AppState, session: &Session) -> Result<UserDto, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    let Some(user) = UserService::new(&state.db, &state.app_url)
        .get_user(user_id)
        .await?
    else {
        SessionUserId::remove(session).await?;

        tracing::warn!(
            user_id = %user_id,
            "Removed user from session, the user no longer exists in the database"
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    Ok(user)
}

/// Like [`get_user_from_session`] but additionally requires a confirmed account
///
/// # Returns
/// - `Err(Error::AuthError(AuthError::UserNotConfirmed))`: The account is unconfirmed or disabled
pub async fn get_confirmed_user_from_session(
    state: &AppState,
    session: &Session,
) -> Result<UserDto, Error> {
    let user = get_user_from_session(state, session).await?;

    if !user.status.is_confirmed() {
        return Err(Error::AuthError(AuthError::UserNotConfirmed(user.id)));
    }

    Ok(user)
}
