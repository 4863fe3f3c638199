use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use portfolio::{
    model::user::RegisterDto,
    server::{controller::auth::register, model::session::user::SessionUserId},
};

use super::*;

fn registration(email: &str, password: &str) -> RegisterDto {
    RegisterDto {
        email: email.to_string(),
        name: "New User".to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
/// Expect 201 created with the new user stored in session
async fn creates_account_and_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = register(
        State(test.state()),
        test.session.clone(),
        Json(registration("new@example.com", "a long enough password")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let maybe_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(maybe_user_id.is_some());

    Ok(())
}

#[tokio::test]
/// Expect 409 conflict for an email that is already registered
async fn fails_for_taken_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("taken@example.com", UserStatus::Confirmed)
        .build()
        .await?;

    let result = register(
        State(test.state()),
        test.session.clone(),
        Json(registration("taken@example.com", "a long enough password")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request and no session for an invalid registration
async fn fails_for_short_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = register(
        State(test.state()),
        test.session.clone(),
        Json(registration("new@example.com", "short")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let maybe_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(maybe_user_id.is_none());

    Ok(())
}
