use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use portfolio::{
    model::task::{CreateTaskDto, UpdateTaskDto},
    server::{
        controller::task::{create_task, delete_task, list_tasks, update_task},
        model::session::user::SessionUserId,
    },
};

use super::*;

#[tokio::test]
/// Expect 404 not found when there is no user in session
async fn list_returns_not_found_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = list_tasks(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 403 forbidden for a user that has not confirmed their account
async fn list_returns_forbidden_for_unconfirmed_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("user@example.com", UserStatus::Unconfirmed)
        .build()
        .await?;
    SessionUserId::insert(&test.session, test.users[0].id)
        .await
        .unwrap();

    let result = list_tasks(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect 200 success for a confirmed user
async fn list_returns_success_for_confirmed_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("user@example.com", UserStatus::Confirmed)
        .build()
        .await?;
    let user_id = test.users[0].id;
    test.task().insert_task(user_id, "Water plants", false).await?;
    SessionUserId::insert(&test.session, user_id).await.unwrap();

    let result = list_tasks(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 201 created for a valid title and 400 bad request for a blank one
async fn create_validates_title() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("user@example.com", UserStatus::Confirmed)
        .build()
        .await?;
    SessionUserId::insert(&test.session, test.users[0].id)
        .await
        .unwrap();

    let created = create_task(
        State(test.state()),
        test.session.clone(),
        Json(CreateTaskDto {
            title: "Water plants".to_string(),
        }),
    )
    .await;
    let blank = create_task(
        State(test.state()),
        test.session.clone(),
        Json(CreateTaskDto {
            title: "   ".to_string(),
        }),
    )
    .await;

    assert!(created.is_ok());
    assert_eq!(
        created.unwrap().into_response().status(),
        StatusCode::CREATED
    );

    assert!(blank.is_err());
    assert_eq!(
        blank.err().unwrap().into_response().status(),
        StatusCode::BAD_REQUEST
    );

    Ok(())
}

#[tokio::test]
/// Expect 200 success when updating an owned task
async fn update_returns_success_for_owned_task() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("user@example.com", UserStatus::Confirmed)
        .build()
        .await?;
    let user_id = test.users[0].id;
    let task = test.task().insert_task(user_id, "Water plants", false).await?;
    SessionUserId::insert(&test.session, user_id).await.unwrap();

    let result = update_task(
        State(test.state()),
        test.session.clone(),
        Path(task.id),
        Json(UpdateTaskDto {
            title: None,
            completed: Some(true),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found when updating another user's task
async fn update_returns_not_found_for_foreign_task() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("owner@example.com", UserStatus::Confirmed)
        .with_user("other@example.com", UserStatus::Confirmed)
        .build()
        .await?;
    let task = test
        .task()
        .insert_task(test.users[0].id, "Water plants", false)
        .await?;
    SessionUserId::insert(&test.session, test.users[1].id)
        .await
        .unwrap();

    let result = update_task(
        State(test.state()),
        test.session.clone(),
        Path(task.id),
        Json(UpdateTaskDto {
            title: Some("Mine now".to_string()),
            completed: None,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 204 no content on delete and 404 not found when deleting the same task again
async fn delete_removes_task_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("user@example.com", UserStatus::Confirmed)
        .build()
        .await?;
    let user_id = test.users[0].id;
    let task = test.task().insert_task(user_id, "Water plants", true).await?;
    SessionUserId::insert(&test.session, user_id).await.unwrap();

    let first = delete_task(State(test.state()), test.session.clone(), Path(task.id)).await;
    let second = delete_task(State(test.state()), test.session.clone(), Path(task.id)).await;

    assert!(first.is_ok());
    assert_eq!(
        first.unwrap().into_response().status(),
        StatusCode::NO_CONTENT
    );

    assert!(second.is_err());
    assert_eq!(
        second.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}
