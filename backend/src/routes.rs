use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde_json::json;
use shared::{CreateTaskRequest, Task, UpdateTaskRequest};
use tower_http::cors::CorsLayer;

use crate::error::TaskError;
use crate::store::TaskStore;

/// Build the full application router around a connected store.
pub fn app(store: TaskStore) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/:id",
            get(get_task)
                .put(update_task)
                .patch(update_task)
                .delete(delete_task),
        )
        .layer(CorsLayer::permissive())
        .with_state(store)
}

async fn root() -> &'static str {
    "Welcome to TaskMate"
}

async fn list_tasks(State(store): State<TaskStore>) -> Result<Json<Vec<Task>>, TaskError> {
    let tasks = store.list().await?;
    Ok(Json(tasks))
}

async fn create_task(
    State(store): State<TaskStore>,
    Json(payload): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), TaskError> {
    let task = store.create(payload).await?;
    tracing::info!(id = %task.id, "task created");
    Ok((StatusCode::CREATED, Json(task)))
}

async fn get_task(
    State(store): State<TaskStore>,
    Path(id): Path<String>,
) -> Result<Json<Task>, TaskError> {
    let task = store.get(&id).await?;
    Ok(Json(task))
}

async fn update_task(
    State(store): State<TaskStore>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateTaskRequest>,
) -> Result<Json<Task>, TaskError> {
    let task = store.update(&id, payload).await?;
    Ok(Json(task))
}

async fn delete_task(
    State(store): State<TaskStore>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, TaskError> {
    store.delete(&id).await?;
    tracing::info!(%id, "task deleted");
    Ok(Json(json!({ "message": "Task deleted successfully" })))
}
