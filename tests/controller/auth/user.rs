use axum::{extract::State, http::StatusCode, response::IntoResponse};
use portfolio::server::{controller::auth::get_user, model::session::user::SessionUserId};

use super::*;

#[tokio::test]
/// Expect 200 success with user information for a user in session
async fn returns_success_for_user_in_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("user@example.com", UserStatus::Unconfirmed)
        .build()
        .await?;
    SessionUserId::insert(&test.session, test.users[0].id)
        .await
        .unwrap();

    let result = get_user(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found without a user in session
async fn returns_not_found_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = get_user(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found and a cleared session for a user that no longer exists
async fn returns_not_found_for_deleted_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = get_user(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let maybe_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(maybe_user_id.is_none());

    Ok(())
}
