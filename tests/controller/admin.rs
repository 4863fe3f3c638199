use axum::{body::to_bytes, extract::State, http::StatusCode, response::IntoResponse};
use portfolio::{model::user::UserDto, server::controller::admin::list_users};

use super::*;

#[tokio::test]
/// Expect 200 success listing every account
async fn lists_all_users() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_admin("admin@example.com")
        .with_user("user@example.com", UserStatus::Unconfirmed)
        .build()
        .await?;

    let result = list_users(State(test.state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let users: Vec<UserDto> = serde_json::from_slice(&body).unwrap();
    assert_eq!(users.len(), 2);

    Ok(())
}

#[tokio::test]
/// Expect 500 internal server error when required database tables dont exist
async fn error_when_required_tables_dont_exist() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = list_users(State(test.state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
