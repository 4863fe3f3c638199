//! Helpers shared by the integration tests.

use axum::{
    body::{to_bytes, Body},
    http::{header::SET_COOKIE, HeaderMap, Request, StatusCode},
    middleware::from_fn_with_state,
    Router,
};
use portfolio::server::{
    config::SessionSecrets,
    middleware::session::rotate_session_cookie,
    model::{
        app::AppState,
        session::{keys::SessionKeys, SESSION_COOKIE_NAME},
    },
    router::routes,
};
use portfolio_test_utils::TestContext;
use tower::ServiceExt;
use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, SessionManagerLayer};

pub static TEST_SECRET: &str = "integration-test-secret-long-enough-0";
pub static TEST_RETIRED_SECRET: &str = "integration-test-retired-secret-000";

/// Extension trait for [`TestContext`] to build the application's state and router
pub trait TestContextExt {
    fn state(&self) -> AppState;

    /// Full API router behind an in-memory session layer configured like production
    fn router(&self, store: MemoryStore, secrets: &str) -> Router;
}

impl TestContextExt for TestContext {
    fn state(&self) -> AppState {
        self.to_app_state()
    }

    fn router(&self, store: MemoryStore, secrets: &str) -> Router {
        let secrets = SessionSecrets::parse(secrets).unwrap();
        let keys = SessionKeys::from_secrets(&secrets);

        let session = SessionManagerLayer::new(store)
            .with_name(SESSION_COOKIE_NAME)
            .with_secure(false)
            .with_same_site(SameSite::Lax)
            .with_http_only(true)
            .with_expiry(Expiry::OnInactivity(Duration::days(7)))
            // Re-set the cookie on every response so it is re-signed with the current secret
            .with_always_save(true)
            .with_signed(keys.primary().clone());

        routes(self.state())
            .layer(session)
            .layer(from_fn_with_state(keys, rotate_session_cookie))
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// The `pcs_session=...` pair from `Set-Cookie`, ready for a `Cookie` header
    pub fn session_cookie(&self) -> Option<String> {
        self.headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find(|value| value.starts_with(&format!("{}=", SESSION_COOKIE_NAME)))
            .and_then(|value| value.split(';').next())
            .map(str::to_string)
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_str(&self.body).unwrap()
    }
}

pub async fn send(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(body.to_vec()).unwrap(),
    }
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }

    builder.body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, cookie: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }

    builder.body(Body::from(body.to_string())).unwrap()
}
