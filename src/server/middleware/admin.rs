use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;

use crate::server::middleware::user::CurrentUser;

/// Lets the request through only for admins
///
/// Must run after [`load_user`](crate::server::middleware::user::load_user). Anonymous users
/// and non-admins alike receive a plain text `403 Forbidden`.
pub async fn require_admin(request: Request, next: Next) -> Response {
    let maybe_user = request.extensions().get::<CurrentUser>();

    if maybe_user.is_some_and(|CurrentUser(user)| user.is_admin) {
        return next.run(request).await;
    }

    tracing::debug!(
        user_id = ?maybe_user.map(|CurrentUser(user)| user.id),
        "Rejected non-admin request to {}",
        request.uri().path()
    );

    (StatusCode::FORBIDDEN, "Forbidden").into_response()
}
