//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger UI is
//! served at `/api/docs`. The session layer is applied by the caller so tests can swap in an
//! in-memory store.

use axum::{
    middleware::{from_fn, from_fn_with_state},
    Router,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller,
    middleware::{admin::require_admin, user::load_user},
    model::app::AppState,
};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/auth/register` - Create an unconfirmed account and log in
/// - `POST /api/auth/login` - Log in with email and password
/// - `GET /api/auth/logout` - Logout current user
/// - `POST /api/auth/confirm` - Confirm an account with its confirmation token
/// - `GET /api/auth/user` - Get current user information
/// - `GET /api/tasks`, `POST /api/tasks` - List and create tasks of a confirmed user
/// - `PUT /api/tasks/{task_id}`, `DELETE /api/tasks/{task_id}` - Update and delete a task
/// - `GET /api/admin/users` - List all accounts, admins only
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes(AppState { db, app_url }).layer(session_layer);
/// ```
pub fn routes(state: AppState) -> Router {
    #[derive(OpenApi)]
    #[openapi(info(title = "Portfolio", description = "Portfolio API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Account and session routes"),
        (name = controller::task::TASK_TAG, description = "Task list routes"),
        (name = controller::admin::ADMIN_TAG, description = "Admin routes"),
    ))]
    struct ApiDoc;

    // `route_layer` only wraps the routes registered before it; the last layer added runs first.
    let admin_routes = OpenApiRouter::new()
        .routes(routes!(controller::admin::list_users))
        .route_layer(from_fn(require_admin))
        .route_layer(from_fn_with_state(state.clone(), load_user));

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::confirm))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(
            controller::task::list_tasks,
            controller::task::create_task
        ))
        .routes(routes!(
            controller::task::update_task,
            controller::task::delete_task
        ))
        .merge(admin_routes)
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .with_state(state)
}
