//! HTTP API crate for the todo task service
//!
//! Exposes the REST surface over any [`todo_core::TaskRepository`]:
//! axum route handlers, HTTP error mapping, request logging, and the
//! server wiring.
//!
//! # Endpoints
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET | `/api/tasks` | 200, filtered list |
//! | GET | `/api/tasks/{id}` | 200, single task |
//! | POST | `/api/tasks` | 201, created task |
//! | PATCH | `/api/tasks/{id}` | 200, updated task |
//! | DELETE | `/api/tasks/{id}` | 204 |
//! | PATCH | `/api/tasks/{id}/done` | 200, updated task |
//! | GET | `/health` | 200 |

pub mod error;
pub mod request_logger;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use routes::{AppState, ListTasksQuery};
pub use server::TaskApiServer;
