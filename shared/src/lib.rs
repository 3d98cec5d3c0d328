use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unit of work. `id` and `created_at` are assigned by the store at
/// insert time and never change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /tasks`. `title` is serde-defaulted so a missing field
/// reaches validation (and a 400) instead of failing JSON extraction.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
}

/// Body of `PUT`/`PATCH /tasks/:id`. Any subset of fields is a valid
/// partial update; omitted fields keep their stored value.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}
