//! Database crate for the todo task service
//!
//! This crate provides the SQLite implementation of the TaskRepository
//! trait, offering task persistence with connection pooling, embedded
//! migrations, and a single error-mapping path into the domain errors.
//!
//! # Features
//!
//! - SQLite with WAL mode for better concurrency
//! - Database migrations with proper schema management
//! - Dynamic list-query composition (filter, search, sort, pagination)
//!
//! # Usage
//!
//! ```rust,no_run
//! use database::SqliteTaskRepository;
//! use todo_core::repository::TaskRepository;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = SqliteTaskRepository::new("sqlite:///tmp/tasks.db").await?;
//!     repo.migrate().await?;
//!     repo.health_check().await?;
//!     Ok(())
//! }
//! ```

mod common;
mod sqlite;

pub use sqlite::SqliteTaskRepository;

// Re-export commonly used types from todo-core for convenience
pub use todo_core::{
    error::{Result, TaskError},
    models::{NewTask, Task, TaskFilter, UpdateTask},
    repository::TaskRepository,
};
