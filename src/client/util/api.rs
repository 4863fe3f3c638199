//! Requests to the portfolio API from the browser.

use reqwasm::http::{Request, RequestCredentials, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::model::{
    api::ErrorDto,
    task::{CreateTaskDto, TaskDto, UpdateTaskDto},
    user::{ConfirmDto, LoginDto, RegisterDto, UserDto},
};

/// Retrieve the logged in user, `Ok(None)` when there is no session
pub async fn get_user() -> Result<Option<UserDto>, String> {
    let response = Request::get("/api/auth/user")
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => parse_json(response).await.map(Some),
        404 => Ok(None),
        _ => Err(error_message(response).await),
    }
}

pub async fn login(credentials: &LoginDto) -> Result<UserDto, String> {
    send_json(Request::post("/api/auth/login"), credentials).await
}

pub async fn register(registration: &RegisterDto) -> Result<UserDto, String> {
    send_json(Request::post("/api/auth/register"), registration).await
}

pub async fn confirm(token: &str) -> Result<UserDto, String> {
    let confirmation = ConfirmDto {
        token: token.to_string(),
    };

    send_json(Request::post("/api/auth/confirm"), &confirmation).await
}

pub async fn get_tasks() -> Result<Vec<TaskDto>, String> {
    let response = Request::get("/api/tasks")
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => parse_json(response).await,
        _ => Err(error_message(response).await),
    }
}

pub async fn create_task(task: &CreateTaskDto) -> Result<TaskDto, String> {
    send_json(Request::post("/api/tasks"), task).await
}

pub async fn update_task(task_id: i32, update: &UpdateTaskDto) -> Result<TaskDto, String> {
    send_json(Request::put(&format!("/api/tasks/{}", task_id)), update).await
}

pub async fn delete_task(task_id: i32) -> Result<(), String> {
    let response = Request::delete(&format!("/api/tasks/{}", task_id))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if response.ok() {
        return Ok(());
    }

    Err(error_message(response).await)
}

async fn send_json<B: Serialize, T: DeserializeOwned>(
    request: Request,
    body: &B,
) -> Result<T, String> {
    let body =
        serde_json::to_string(body).map_err(|e| format!("Failed to serialize request: {}", e))?;

    let response = request
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if response.ok() {
        return parse_json(response).await;
    }

    Err(error_message(response).await)
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

// Error responses carry an `ErrorDto`, except the admin middleware's plain text 403.
async fn error_message(response: Response) -> String {
    let status = response.status();

    match response.text().await {
        Ok(text) => match serde_json::from_str::<ErrorDto>(&text) {
            Ok(error_dto) => error_dto.error,
            Err(_) if !text.is_empty() => text,
            Err(_) => format!("Request failed with status {}", status),
        },
        Err(_) => format!("Request failed with status {}", status),
    }
}
