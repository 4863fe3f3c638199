//! Requests through the full API router, session layer and middleware included.

use axum::http::{header::LOCATION, StatusCode};
use portfolio::model::user::UserDto;
use portfolio_test_utils::prelude::*;
use serde_json::json;
use tower_sessions::MemoryStore;

use crate::util::{
    get, post_json, send, TestContextExt, TestResponse, TEST_RETIRED_SECRET, TEST_SECRET,
};

async fn login(router: &axum::Router, email: &str) -> TestResponse {
    send(
        router,
        post_json(
            "/api/auth/login",
            None,
            json!({ "email": email, "password": TEST_PASSWORD }),
        ),
    )
    .await
}

#[tokio::test]
/// Login sets an http-only, same-site session cookie which authenticates later requests
async fn login_sets_session_cookie() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("user@example.com", UserStatus::Confirmed)
        .build()
        .await?;
    let router = test.router(MemoryStore::default(), TEST_SECRET);

    let resp = login(&router, "user@example.com").await;
    assert_eq!(resp.status, StatusCode::OK);

    let set_cookie = resp.headers["set-cookie"].to_str().unwrap();
    assert!(set_cookie.starts_with("pcs_session="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));

    let cookie = resp.session_cookie().unwrap();
    let user = send(&router, get("/api/auth/user", Some(&cookie))).await;
    assert_eq!(user.status, StatusCode::OK);
    assert_eq!(user.json::<UserDto>().email, "user@example.com");

    Ok(())
}

#[tokio::test]
/// Logout redirects to the login page and the old cookie no longer resolves a user
async fn logout_ends_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("user@example.com", UserStatus::Confirmed)
        .build()
        .await?;
    let router = test.router(MemoryStore::default(), TEST_SECRET);
    let cookie = login(&router, "user@example.com")
        .await
        .session_cookie()
        .unwrap();

    let resp = send(&router, get("/api/auth/logout", Some(&cookie))).await;
    assert_eq!(resp.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers[LOCATION], "/login");

    let user = send(&router, get("/api/auth/user", Some(&cookie))).await;
    assert_eq!(user.status, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Admin routes answer 403 for anonymous visitors and non-admins, 200 for admins
async fn admin_routes_require_admin() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("user@example.com", UserStatus::Confirmed)
        .with_admin("admin@example.com")
        .build()
        .await?;
    let router = test.router(MemoryStore::default(), TEST_SECRET);

    let anonymous = send(&router, get("/api/admin/users", None)).await;
    assert_eq!(anonymous.status, StatusCode::FORBIDDEN);
    assert_eq!(anonymous.body, "Forbidden");

    let user_cookie = login(&router, "user@example.com")
        .await
        .session_cookie()
        .unwrap();
    let user = send(&router, get("/api/admin/users", Some(&user_cookie))).await;
    assert_eq!(user.status, StatusCode::FORBIDDEN);

    let admin_cookie = login(&router, "admin@example.com")
        .await
        .session_cookie()
        .unwrap();
    let admin = send(&router, get("/api/admin/users", Some(&admin_cookie))).await;
    assert_eq!(admin.status, StatusCode::OK);
    assert_eq!(admin.json::<Vec<UserDto>>().len(), 2);

    Ok(())
}

#[tokio::test]
/// Tasks are hidden from visitors without a session and from unconfirmed accounts
async fn tasks_require_confirmed_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("new@example.com", UserStatus::Unconfirmed)
        .build()
        .await?;
    let router = test.router(MemoryStore::default(), TEST_SECRET);

    let anonymous = send(&router, get("/api/tasks", None)).await;
    assert_eq!(anonymous.status, StatusCode::NOT_FOUND);

    let cookie = login(&router, "new@example.com")
        .await
        .session_cookie()
        .unwrap();
    let unconfirmed = send(&router, get("/api/tasks", Some(&cookie))).await;
    assert_eq!(unconfirmed.status, StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// A confirmed user can add a task and see it listed
async fn confirmed_user_manages_tasks() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("user@example.com", UserStatus::Confirmed)
        .build()
        .await?;
    let router = test.router(MemoryStore::default(), TEST_SECRET);
    let cookie = login(&router, "user@example.com")
        .await
        .session_cookie()
        .unwrap();

    let created = send(
        &router,
        post_json(
            "/api/tasks",
            Some(&cookie),
            json!({ "title": "Water plants" }),
        ),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);

    let listed = send(&router, get("/api/tasks", Some(&cookie))).await;
    assert_eq!(listed.status, StatusCode::OK);
    let tasks = listed.json::<Vec<portfolio::model::task::TaskDto>>();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "Water plants");
    assert!(!tasks[0].completed);

    Ok(())
}

#[tokio::test]
/// Cookies signed with a retired secret stay valid while it is listed, and stop working once removed
async fn retired_secret_is_honored_until_removed() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("user@example.com", UserStatus::Confirmed)
        .build()
        .await?;
    let store = MemoryStore::default();

    let before_rotation = test.router(store.clone(), TEST_RETIRED_SECRET);
    let cookie = login(&before_rotation, "user@example.com")
        .await
        .session_cookie()
        .unwrap();

    let rotated = test.router(
        store.clone(),
        &format!("{},{}", TEST_SECRET, TEST_RETIRED_SECRET),
    );
    let resp = send(&rotated, get("/api/auth/user", Some(&cookie))).await;
    assert_eq!(resp.status, StatusCode::OK);

    // Response carries the session re-signed with the current secret
    let resigned = resp.session_cookie().unwrap();
    assert_ne!(resigned, cookie);

    let after_removal = test.router(store, TEST_SECRET);
    let stale = send(&after_removal, get("/api/auth/user", Some(&cookie))).await;
    assert_eq!(stale.status, StatusCode::NOT_FOUND);

    let fresh = send(&after_removal, get("/api/auth/user", Some(&resigned))).await;
    assert_eq!(fresh.status, StatusCode::OK);

    Ok(())
}
