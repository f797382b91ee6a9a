use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::{
    domain::entities::{CreateTaskRequest, DeleteTaskRequest, Task, UpdateTaskRequest},
    infrastructure::http::middleware::{ApiResult, AppState},
};

// GET /api/tasks - All tasks in list order
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<Task>>> {
    let tasks = state.task_service.list_tasks().await?;
    Ok(Json(tasks))
}

// POST /api/tasks - Append a task
pub async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<Json<Task>> {
    let task = state.task_service.create_task(&req.text).await?;
    Ok(Json(task))
}

// PUT /api/tasks - Update text, completion or position
pub async fn update_task(
    State(state): State<AppState>,
    Json(req): Json<UpdateTaskRequest>,
) -> ApiResult<Json<Task>> {
    let task = state.task_service.update_task(req).await?;
    Ok(Json(task))
}

// DELETE /api/tasks - Remove a task
pub async fn delete_task(
    State(state): State<AppState>,
    Json(req): Json<DeleteTaskRequest>,
) -> ApiResult<Json<Value>> {
    state.task_service.delete_task(&req.id).await?;
    Ok(Json(json!({ "success": true })))
}
