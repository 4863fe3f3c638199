use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use portfolio::{
    model::user::LoginDto,
    server::{controller::auth::login, model::session::user::SessionUserId},
};

use super::*;

fn credentials(email: &str, password: &str) -> LoginDto {
    LoginDto {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
/// Expect 200 success with the user stored in session
async fn logs_in_with_correct_password() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("user@example.com", UserStatus::Confirmed)
        .build()
        .await?;

    let result = login(
        State(test.state()),
        test.session.clone(),
        Json(credentials("user@example.com", TEST_PASSWORD)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let maybe_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert_eq!(maybe_user_id, Some(test.users[0].id));

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized for a wrong password, leaving the session empty
async fn fails_for_wrong_password() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("user@example.com", UserStatus::Confirmed)
        .build()
        .await?;

    let result = login(
        State(test.state()),
        test.session.clone(),
        Json(credentials("user@example.com", "not the password")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let maybe_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(maybe_user_id.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 500 internal server error when required database tables dont exist
async fn error_when_required_tables_dont_exist() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = login(
        State(test.state()),
        test.session.clone(),
        Json(credentials("user@example.com", TEST_PASSWORD)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
