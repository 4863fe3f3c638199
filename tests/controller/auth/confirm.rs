use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use portfolio::{model::user::ConfirmDto, server::controller::auth::confirm};

use super::*;

fn confirmation(token: &str) -> Json<ConfirmDto> {
    Json(ConfirmDto {
        token: token.to_string(),
    })
}

#[tokio::test]
/// Expect 200 success for a valid token and 400 bad request when it is reused
async fn confirms_once() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    test.user()
        .insert_unconfirmed_user_with_token("new@example.com", "valid-token")
        .await?;

    let first = confirm(State(test.state()), confirmation("valid-token")).await;
    let second = confirm(State(test.state()), confirmation("valid-token")).await;

    assert!(first.is_ok());
    assert_eq!(first.unwrap().into_response().status(), StatusCode::OK);

    assert!(second.is_err());
    assert_eq!(
        second.err().unwrap().into_response().status(),
        StatusCode::BAD_REQUEST
    );

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request for a token that was never issued
async fn fails_for_unknown_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = confirm(State(test.state()), confirmation("unknown")).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
