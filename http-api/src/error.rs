//! Error handling for the HTTP surface
//!
//! Maps domain errors and absence into HTTP responses with a
//! `{"detail": ...}` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use todo_core::TaskError;

/// HTTP API errors
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Task not found")]
    NotFound,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// The status code this error responds with
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The body detail exposed to the caller
    ///
    /// Internal failures keep their detail server-side; the caller only
    /// sees a generic message.
    fn detail(&self) -> String {
        match self {
            ApiError::NotFound => "Task not found".to_string(),
            ApiError::Validation(msg) => msg.clone(),
            ApiError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(ref detail) = self {
            tracing::error!(error = %detail, "request failed");
        }
        let body = Json(json!({ "detail": self.detail() }));
        (self.status_code(), body).into_response()
    }
}

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::Validation(msg) => ApiError::Validation(msg),
            TaskError::Database(msg) => ApiError::Internal(msg),
            TaskError::Configuration(msg) => ApiError::Internal(msg),
            TaskError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Validation("bad".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_detail_is_not_leaked() {
        let error = ApiError::Internal("connection string with secrets".into());
        assert_eq!(error.detail(), "Internal server error");
    }

    #[test]
    fn test_from_task_error() {
        let api: ApiError = TaskError::invalid_priority(0).into();
        assert!(matches!(api, ApiError::Validation(_)));

        let api: ApiError = TaskError::Database("locked".into()).into();
        assert!(matches!(api, ApiError::Internal(_)));
    }
}
