//! Route handlers for the task API
//!
//! Handlers extract and validate parameters, call the repository, and
//! map outcomes to status codes. No business logic lives here.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use todo_core::{NewTask, Task, TaskFilter, TaskRepository, TaskValidator, UpdateTask};

use crate::error::ApiError;

/// Shared application state for handlers
pub struct AppState<R: TaskRepository> {
    /// Task repository for persistence
    pub repository: Arc<R>,
}

impl<R: TaskRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: TaskRepository> AppState<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

/// Raw query parameters of the list endpoint.
///
/// Values arrive as plain strings and go through
/// [`TaskFilter::from_params`], so out-of-range values surface as 422
/// rather than an extractor rejection.
#[derive(Debug, Deserialize, Default)]
pub struct ListTasksQuery {
    /// Filter by status: all, done, or undone
    pub status: Option<String>,
    /// Sort by priority: asc or desc
    pub sort_by_priority: Option<String>,
    /// Search in title and description
    pub search: Option<String>,
    /// Number of tasks to skip
    pub skip: Option<String>,
    /// Maximum number of tasks to return
    pub limit: Option<String>,
}

impl ListTasksQuery {
    fn into_filter(self) -> Result<TaskFilter, ApiError> {
        let skip = parse_int_param("skip", self.skip.as_deref())?;
        let limit = parse_int_param("limit", self.limit.as_deref())?;

        TaskFilter::from_params(
            self.status.as_deref(),
            self.sort_by_priority.as_deref(),
            self.search,
            skip,
            limit,
        )
        .map_err(ApiError::from)
    }
}

/// Parse an integer query parameter supplied as a raw string.
fn parse_int_param(field: &str, value: Option<&str>) -> Result<Option<i64>, ApiError> {
    match value {
        Some(raw) => raw.parse::<i64>().map(Some).map_err(|_| {
            ApiError::Validation(format!("{field} must be an integer (got '{raw}')"))
        }),
        None => Ok(None),
    }
}

/// GET /tasks — list tasks with optional filtering and sorting
pub async fn list_tasks<R: TaskRepository>(
    State(state): State<AppState<R>>,
    Query(query): Query<ListTasksQuery>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let filter = query.into_filter()?;
    let tasks = state.repository.list(filter).await?;
    Ok(Json(tasks))
}

/// GET /tasks/{id} — fetch a single task
pub async fn get_task<R: TaskRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
) -> Result<Json<Task>, ApiError> {
    let task = state.repository.get(id).await?;
    task.map(Json).ok_or(ApiError::NotFound)
}

/// POST /tasks — create a new task
pub async fn create_task<R: TaskRepository>(
    State(state): State<AppState<R>>,
    Json(payload): Json<NewTask>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    TaskValidator::validate_new_task(&payload)?;
    let task = state.repository.create(payload).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// PATCH /tasks/{id} — apply a partial update
pub async fn update_task<R: TaskRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTask>,
) -> Result<Json<Task>, ApiError> {
    TaskValidator::validate_update(&payload)?;
    let task = state.repository.update(id, payload).await?;
    task.map(Json).ok_or(ApiError::NotFound)
}

/// DELETE /tasks/{id} — remove a task
pub async fn delete_task<R: TaskRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let removed = state.repository.delete(id).await?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

/// PATCH /tasks/{id}/done — mark a task as done
pub async fn mark_task_done<R: TaskRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
) -> Result<Json<Task>, ApiError> {
    let task = state.repository.mark_done(id).await?;
    task.map(Json).ok_or(ApiError::NotFound)
}

/// GET /health — storage connectivity probe
pub async fn health<R: TaskRepository>(
    State(state): State<AppState<R>>,
) -> Result<Json<Value>, ApiError> {
    state.repository.health_check().await?;
    Ok(Json(json!({ "status": "ok" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_with_defaults_converts() {
        let filter = ListTasksQuery::default().into_filter().unwrap();
        assert_eq!(filter, TaskFilter::default());
    }

    #[test]
    fn test_query_rejects_unknown_status() {
        let query = ListTasksQuery {
            status: Some("finished".to_string()),
            ..Default::default()
        };
        let err = query.into_filter().unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn test_query_rejects_bad_pagination() {
        let query = ListTasksQuery {
            limit: Some("0".to_string()),
            ..Default::default()
        };
        assert!(query.into_filter().is_err());

        let query = ListTasksQuery {
            skip: Some("-5".to_string()),
            ..Default::default()
        };
        assert!(query.into_filter().is_err());
    }

    #[test]
    fn test_query_rejects_non_numeric_pagination() {
        let query = ListTasksQuery {
            skip: Some("abc".to_string()),
            ..Default::default()
        };
        let err = query.into_filter().unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));

        let query = ListTasksQuery {
            limit: Some("ten".to_string()),
            ..Default::default()
        };
        assert!(query.into_filter().is_err());
    }

    #[test]
    fn test_query_parses_numeric_pagination() {
        let query = ListTasksQuery {
            skip: Some("2".to_string()),
            limit: Some("10".to_string()),
            ..Default::default()
        };
        let filter = query.into_filter().unwrap();
        assert_eq!(filter.skip, 2);
        assert_eq!(filter.limit, 10);
    }
}
