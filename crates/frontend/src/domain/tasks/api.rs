use contracts::domain::tasks::{validate_title, CreateTaskRequest, Task, TaskStatus, UpdateTaskRequest};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch the task list of the given user
pub async fn fetch_tasks(user_id: i64) -> Result<Vec<Task>, String> {
    let response = Request::get(&api_url(&format!("/api/tasks?user_id={}", user_id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch tasks: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create a task. An empty title is rejected before any request goes out.
pub async fn create_task(request: CreateTaskRequest) -> Result<(), String> {
    validate_title(&request.title)?;

    let response = Request::post(&api_url("/api/tasks"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create task: {}", response.status()));
    }

    Ok(())
}

/// Set the status of a task
pub async fn update_task_status(id: i64, status: TaskStatus) -> Result<(), String> {
    let response = Request::put(&api_url(&format!("/api/tasks/{}", id)))
        .json(&UpdateTaskRequest { status })
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update task: {}", response.status()));
    }

    Ok(())
}

/// Delete a task
pub async fn delete_task(id: i64) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/tasks/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete task: {}", response.status()));
    }

    Ok(())
}
