use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        task::{CreateTaskDto, TaskDto, UpdateTaskDto},
    },
    server::{
        controller::util::get_user::get_confirmed_user_from_session, error::Error,
        model::app::AppState, service::task::TaskService,
    },
};

pub static TASK_TAG: &str = "task";

/// List the logged in user's tasks
#[utoipa::path(
    get,
    path = "/api/tasks",
    tag = TASK_TAG,
    responses(
        (status = 200, description = "Tasks of the logged in user", body = Vec<TaskDto>),
        (status = 403, description = "Account not confirmed", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_tasks(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_confirmed_user_from_session(&state, &session).await?;

    let tasks = TaskService::new(&state.db).list(user.id).await?;

    Ok((StatusCode::OK, Json(tasks)))
}

/// Add a task to the logged in user's list
#[utoipa::path(
    post,
    path = "/api/tasks",
    tag = TASK_TAG,
    request_body = CreateTaskDto,
    responses(
        (status = 201, description = "Task created", body = TaskDto),
        (status = 400, description = "Invalid title", body = ErrorDto),
        (status = 403, description = "Account not confirmed", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_task(
    State(state): State<AppState>,
    session: Session,
    Json(task): Json<CreateTaskDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_confirmed_user_from_session(&state, &session).await?;

    let task = TaskService::new(&state.db).create(user.id, task).await?;

    Ok((StatusCode::CREATED, Json(task)))
}

/// Rename a task or change its completion
#[utoipa::path(
    put,
    path = "/api/tasks/{task_id}",
    tag = TASK_TAG,
    params(("task_id" = i32, Path, description = "ID of the task")),
    request_body = UpdateTaskDto,
    responses(
        (status = 200, description = "Task updated", body = TaskDto),
        (status = 400, description = "Invalid title", body = ErrorDto),
        (status = 403, description = "Account not confirmed", body = ErrorDto),
        (status = 404, description = "User or task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_task(
    State(state): State<AppState>,
    session: Session,
    Path(task_id): Path<i32>,
    Json(update): Json<UpdateTaskDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_confirmed_user_from_session(&state, &session).await?;

    let task = TaskService::new(&state.db)
        .update(user.id, task_id, update)
        .await?;

    Ok((StatusCode::OK, Json(task)))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/api/tasks/{task_id}",
    tag = TASK_TAG,
    params(("task_id" = i32, Path, description = "ID of the task")),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 403, description = "Account not confirmed", body = ErrorDto),
        (status = 404, description = "User or task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_task(
    State(state): State<AppState>,
    session: Session,
    Path(task_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_confirmed_user_from_session(&state, &session).await?;

    TaskService::new(&state.db).delete(user.id, task_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
