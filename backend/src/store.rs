use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use redis::{AsyncCommands, Client};
use shared::{CreateTaskRequest, Task, UpdateTaskRequest};
use uuid::Uuid;

use crate::error::TaskError;

/// The redis hash holding all task documents, keyed by task id.
const TASKS_KEY: &str = "tasks";

/// Raw document operations underneath the store. Production uses redis;
/// tests can swap in an in-memory map.
#[async_trait]
pub trait Documents: Send + Sync {
    async fn ping(&self) -> Result<(), TaskError>;
    async fn put(&self, id: &str, document: String) -> Result<(), TaskError>;
    async fn get(&self, id: &str) -> Result<Option<String>, TaskError>;
    async fn values(&self) -> Result<Vec<String>, TaskError>;
    /// Returns false when no document with that id existed.
    async fn remove(&self, id: &str) -> Result<bool, TaskError>;
}

struct RedisDocuments {
    client: Arc<Client>,
}

#[async_trait]
impl Documents for RedisDocuments {
    async fn ping(&self) -> Result<(), TaskError> {
        let mut conn = self.client.get_async_connection().await?;
        redis::cmd("PING").query_async::<_, String>(&mut conn).await?;
        Ok(())
    }

    async fn put(&self, id: &str, document: String) -> Result<(), TaskError> {
        let mut conn = self.client.get_async_connection().await?;
        let _: () = conn.hset(TASKS_KEY, id, document).await?;
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<String>, TaskError> {
        let mut conn = self.client.get_async_connection().await?;
        Ok(conn.hget(TASKS_KEY, id).await?)
    }

    async fn values(&self) -> Result<Vec<String>, TaskError> {
        let mut conn = self.client.get_async_connection().await?;
        Ok(conn.hvals(TASKS_KEY).await?)
    }

    async fn remove(&self, id: &str) -> Result<bool, TaskError> {
        let mut conn = self.client.get_async_connection().await?;
        let removed: usize = conn.hdel(TASKS_KEY, id).await?;
        Ok(removed > 0)
    }
}

/// Persistence layer for tasks. Clones share the same backend.
#[derive(Clone)]
pub struct TaskStore {
    docs: Arc<dyn Documents>,
}

impl TaskStore {
    pub fn new(client: Arc<Client>) -> Self {
        Self {
            docs: Arc::new(RedisDocuments { client }),
        }
    }

    pub fn with_documents(docs: Arc<dyn Documents>) -> Self {
        Self { docs }
    }

    pub async fn ping(&self) -> Result<(), TaskError> {
        self.docs.ping().await
    }

    /// Persist a new task. The store assigns `id` and `created_at`;
    /// nothing is written when validation fails.
    pub async fn create(&self, payload: CreateTaskRequest) -> Result<Task, TaskError> {
        validate_title(&payload.title)?;

        let task = Task {
            id: Uuid::new_v4(),
            title: payload.title,
            description: payload.description,
            completed: false,
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&task)?;
        self.docs.put(&task.id.to_string(), json).await?;

        Ok(task)
    }

    /// All tasks, in whatever order the backend returns them.
    pub async fn list(&self) -> Result<Vec<Task>, TaskError> {
        let values = self.docs.values().await?;

        let mut tasks = Vec::with_capacity(values.len());
        for value in values {
            match serde_json::from_str::<Task>(&value) {
                Ok(task) => tasks.push(task),
                Err(err) => tracing::warn!(%err, "skipping unreadable task document"),
            }
        }
        Ok(tasks)
    }

    pub async fn get(&self, id: &str) -> Result<Task, TaskError> {
        let id = parse_id(id)?;
        match self.docs.get(&id.to_string()).await? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Err(TaskError::NotFound),
        }
    }

    /// Partial update: only the fields present in the payload change;
    /// `id` and `created_at` are immutable. Last-write-wins.
    pub async fn update(&self, id: &str, payload: UpdateTaskRequest) -> Result<Task, TaskError> {
        if let Some(title) = &payload.title {
            validate_title(title)?;
        }
        let id = parse_id(id)?;
        let key = id.to_string();

        let mut task: Task = match self.docs.get(&key).await? {
            Some(json) => serde_json::from_str(&json)?,
            None => return Err(TaskError::NotFound),
        };

        if let Some(title) = payload.title {
            task.title = title;
        }
        if let Some(description) = payload.description {
            task.description = Some(description);
        }
        if let Some(completed) = payload.completed {
            task.completed = completed;
        }

        let json = serde_json::to_string(&task)?;
        self.docs.put(&key, json).await?;

        Ok(task)
    }

    pub async fn delete(&self, id: &str) -> Result<(), TaskError> {
        let id = parse_id(id)?;
        if self.docs.remove(&id.to_string()).await? {
            Ok(())
        } else {
            Err(TaskError::NotFound)
        }
    }
}

fn parse_id(id: &str) -> Result<Uuid, TaskError> {
    Uuid::parse_str(id).map_err(|_| TaskError::InvalidId)
}

fn validate_title(title: &str) -> Result<(), TaskError> {
    if title.trim().is_empty() {
        Err(TaskError::Validation("title is required".to_string()))
    } else {
        Ok(())
    }
}
