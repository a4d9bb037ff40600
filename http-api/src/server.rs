//! HTTP server for the task API
//!
//! Wires the route handlers into an axum Router and serves it over a
//! TCP listener.

use axum::{
    middleware,
    routing::{get, patch},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{
    create_task, delete_task, get_task, health, list_tasks, mark_task_done, update_task, AppState,
};
use todo_core::TaskRepository;

/// Task API server over a generic repository
pub struct TaskApiServer<R> {
    repository: Arc<R>,
}

impl<R: TaskRepository + 'static> TaskApiServer<R> {
    /// Create a new server around the given repository
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Start serving on the given address
    pub async fn serve(self, addr: &str) -> anyhow::Result<()> {
        let app = self.router();

        let socket_addr: SocketAddr = addr
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid address '{addr}': {e}"))?;

        info!("Starting task API server on {}", socket_addr);

        let listener = tokio::net::TcpListener::bind(socket_addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Create the router with all endpoints
    ///
    /// Task routes are mounted under `/api`; the health probe stays at
    /// the root.
    pub fn router(self) -> Router {
        let state = AppState::new(self.repository);

        let tasks = Router::new()
            .route("/tasks", get(list_tasks::<R>).post(create_task::<R>))
            .route(
                "/tasks/:id",
                get(get_task::<R>)
                    .patch(update_task::<R>)
                    .delete(delete_task::<R>),
            )
            .route("/tasks/:id/done", patch(mark_task_done::<R>));

        Router::new()
            .nest("/api", tasks)
            .route("/health", get(health::<R>))
            .layer(middleware::from_fn(
                crate::request_logger::request_logging_middleware,
            ))
            .layer(CorsLayer::permissive())
            .with_state(state)
    }
}
