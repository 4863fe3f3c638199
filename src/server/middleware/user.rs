use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_sessions::Session;

use crate::{
    model::user::UserDto,
    server::{
        controller::util::get_user::get_user_from_session,
        error::{auth::AuthError, Error},
        model::app::AppState,
    },
};

/// The logged in user, inserted into request extensions by [`load_user`].
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserDto);

/// Resolves the session user and stores it as [`CurrentUser`] for downstream handlers
///
/// Requests without a user continue without the extension, deciding what that means is left
/// to the routes behind this middleware. Only failures to read the session or database abort
/// the request.
pub async fn load_user(
    State(state): State<AppState>,
    session: Session,
    mut request: Request,
    next: Next,
) -> Response {
    match get_user_from_session(&state, &session).await {
        Ok(user) => {
            request.extensions_mut().insert(CurrentUser(user));
        }
        Err(Error::AuthError(AuthError::UserNotInSession | AuthError::UserNotInDatabase(_))) => {}
        Err(err) => return err.into_response(),
    }

    next.run(request).await
}
