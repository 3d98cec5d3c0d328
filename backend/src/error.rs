use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the task store and mapped onto HTTP statuses by the
/// router.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("{0}")]
    Validation(String),
    #[error("task not found")]
    NotFound,
    #[error("invalid task id")]
    InvalidId,
    #[error("task store unavailable: {0}")]
    Unavailable(#[from] redis::RedisError),
    #[error("stored task is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

impl TaskError {
    pub fn status(&self) -> StatusCode {
        match self {
            TaskError::Validation(_) | TaskError::InvalidId => StatusCode::BAD_REQUEST,
            TaskError::NotFound => StatusCode::NOT_FOUND,
            TaskError::Unavailable(_) | TaskError::Corrupt(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        let status = self.status();
        // 5xx details go to the log, not the client.
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "internal server error".to_string()
        } else {
            self.to_string()
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_map_to_expected_statuses() {
        assert_eq!(
            TaskError::Validation("title is required".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(TaskError::InvalidId.status(), StatusCode::BAD_REQUEST);
        assert_eq!(TaskError::NotFound.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn client_errors_keep_their_message() {
        assert_eq!(
            TaskError::Validation("title is required".into()).to_string(),
            "title is required"
        );
        assert_eq!(TaskError::InvalidId.to_string(), "invalid task id");
    }
}
