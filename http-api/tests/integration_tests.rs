//! End-to-end tests for the HTTP API
//!
//! Drives the full axum router against a mock repository using
//! tower's oneshot service call, without binding a socket.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use todo_core::{TaskError, TaskRepository};
use tower::ServiceExt;

use http_api::TaskApiServer;
use mocks::{MockTaskRepository, NewTaskBuilder, TaskBuilder};

fn test_router() -> (Router, Arc<MockTaskRepository>) {
    let repository = Arc::new(MockTaskRepository::new());
    let router = TaskApiServer::new(repository.clone()).router();
    (router, repository)
}

fn seeded_router(tasks: Vec<todo_core::Task>) -> Router {
    let repository = Arc::new(MockTaskRepository::with_tasks(tasks));
    TaskApiServer::new(repository).router()
}

async fn send_json(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn test_create_task_returns_201_with_defaults() {
    let (router, _) = test_router();

    let (status, body) = send_json(
        &router,
        Method::POST,
        "/api/tasks",
        Some(json!({"title": "Buy milk", "priority": 3})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["title"], "Buy milk");
    assert_eq!(body["priority"], 3);
    assert_eq!(body["is_done"], false);
    assert_eq!(body["description"], Value::Null);
    assert_eq!(body["updated_at"], Value::Null);
    assert!(body["id"].is_i64());
}

#[tokio::test]
async fn test_create_task_omitted_priority_defaults_to_5() {
    let (router, _) = test_router();

    let (status, body) = send_json(
        &router,
        Method::POST,
        "/api/tasks",
        Some(json!({"title": "Walk the dog"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["priority"], 5);
}

#[tokio::test]
async fn test_create_task_rejects_invalid_priority() {
    let (router, repository) = test_router();

    let (status, body) = send_json(
        &router,
        Method::POST,
        "/api/tasks",
        Some(json!({"title": "Too urgent", "priority": 11})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("Priority"));
    assert_eq!(repository.task_count(), 0);
}

#[tokio::test]
async fn test_create_task_rejects_empty_title() {
    let (router, _) = test_router();

    let (status, _) = send_json(
        &router,
        Method::POST,
        "/api/tasks",
        Some(json!({"title": "   "})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_get_task_found_and_missing() {
    let router = seeded_router(vec![TaskBuilder::new()
        .with_id(7)
        .with_title("Read a book")
        .build()]);

    let (status, body) = send_json(&router, Method::GET, "/api/tasks/7", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 7);
    assert_eq!(body["title"], "Read a book");

    let (status, body) = send_json(&router, Method::GET, "/api/tasks/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Task not found");
}

#[tokio::test]
async fn test_partial_update_leaves_other_fields() {
    let router = seeded_router(vec![TaskBuilder::new()
        .with_id(1)
        .with_title("Original")
        .with_description("Keep me")
        .with_priority(4)
        .build()]);

    let (status, body) = send_json(
        &router,
        Method::PATCH,
        "/api/tasks/1",
        Some(json!({"priority": 9})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Original");
    assert_eq!(body["description"], "Keep me");
    assert_eq!(body["priority"], 9);
    assert!(body["updated_at"].is_string());
}

#[tokio::test]
async fn test_update_missing_task_returns_404() {
    let (router, _) = test_router();

    let (status, body) = send_json(
        &router,
        Method::PATCH,
        "/api/tasks/42",
        Some(json!({"title": "Ghost"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Task not found");
}

#[tokio::test]
async fn test_update_rejects_invalid_priority_with_422() {
    let router = seeded_router(vec![TaskBuilder::new().with_id(1).build()]);

    let (status, _) = send_json(
        &router,
        Method::PATCH,
        "/api/tasks/1",
        Some(json!({"priority": 0})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_mark_done_lifecycle() {
    let (router, repository) = test_router();
    let created = repository
        .create(NewTaskBuilder::new().with_title("Finish report").build())
        .await
        .unwrap();

    let uri = format!("/api/tasks/{}/done", created.id);
    let (status, body) = send_json(&router, Method::PATCH, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_done"], true);

    // Marking again stays done
    let (status, body) = send_json(&router, Method::PATCH, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_done"], true);

    let (status, _) = send_json(&router, Method::PATCH, "/api/tasks/999/done", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_task_then_404() {
    let router = seeded_router(vec![TaskBuilder::new().with_id(3).build()]);

    let (status, body) = send_json(&router, Method::DELETE, "/api/tasks/3", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send_json(&router, Method::GET, "/api/tasks/3", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send_json(&router, Method::DELETE, "/api/tasks/3", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_with_filters_and_pagination() {
    let tasks = vec![
        TaskBuilder::new().with_id(1).with_title("Buy milk").with_priority(2).build(),
        TaskBuilder::new()
            .with_id(2)
            .with_title("Clean kitchen")
            .with_description("Includes buying soap")
            .with_priority(8)
            .build(),
        TaskBuilder::new()
            .with_id(3)
            .with_title("File taxes")
            .with_priority(5)
            .with_done(true)
            .build(),
    ];
    let router = seeded_router(tasks);

    let (status, body) = send_json(&router, Method::GET, "/api/tasks", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);

    let (status, body) = send_json(&router, Method::GET, "/api/tasks?status=undone", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    // Search matches title or description, case-insensitive
    let (status, body) = send_json(&router, Method::GET, "/api/tasks?search=BUY", None).await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Buy milk", "Clean kitchen"]);

    let (status, body) = send_json(
        &router,
        Method::GET,
        "/api/tasks?sort_by_priority=desc&skip=1&limit=1",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let page = body.as_array().unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0]["priority"], 5);
}

#[tokio::test]
async fn test_list_rejects_invalid_query_params() {
    let (router, _) = test_router();

    for uri in [
        "/api/tasks?status=finished",
        "/api/tasks?sort_by_priority=sideways",
        "/api/tasks?limit=0",
        "/api/tasks?limit=101",
        "/api/tasks?skip=-1",
        "/api/tasks?skip=abc",
        "/api/tasks?limit=ten",
    ] {
        let (status, body) = send_json(&router, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "uri: {uri}");
        assert!(body["detail"].is_string(), "uri: {uri}");
    }
}

#[tokio::test]
async fn test_database_error_maps_to_500() {
    let (router, repository) = test_router();
    repository.inject_error(TaskError::Database("connection lost".to_string()));

    let (status, body) = send_json(&router, Method::GET, "/api/tasks", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    // The underlying failure is logged but not leaked to clients
    assert_eq!(body["detail"], "Internal server error");
}

#[tokio::test]
async fn test_health_endpoint() {
    let (router, _) = test_router();

    let (status, body) = send_json(&router, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
