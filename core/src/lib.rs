//! Todo Core Library
//!
//! This crate provides the foundational domain models, validation logic,
//! and trait interfaces for the todo task service. All other crates
//! depend on the types and interfaces defined here.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`models`] - Core domain models (Task, NewTask, UpdateTask, TaskFilter)
//! - [`error`] - Error types and result handling
//! - [`repository`] - Repository trait for data persistence
//! - [`validation`] - Input validation utilities
//!
//! # Example
//!
//! ```rust
//! use todo_core::{models::NewTask, validation::TaskValidator};
//!
//! let new_task = NewTask::new("Buy milk", Some("Semi-skimmed".to_string()));
//!
//! // Validate the payload before it reaches storage
//! TaskValidator::validate_new_task(&new_task).unwrap();
//! ```

pub mod error;
pub mod models;
pub mod repository;
pub mod validation;

// Re-export commonly used types at the crate root for convenience
pub use error::{Result, TaskError};
pub use models::{
    NewTask, PrioritySort, StatusFilter, Task, TaskFilter, UpdateTask, LIMIT_DEFAULT, LIMIT_MAX,
    PRIORITY_DEFAULT, PRIORITY_MAX, PRIORITY_MIN,
};
pub use repository::TaskRepository;
pub use validation::TaskValidator;

/// Current version of the core crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Current crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::const_is_empty)]
    fn test_crate_constants() {
        assert!(!VERSION.is_empty());
        assert_eq!(CRATE_NAME, "todo-core");
    }

    #[test]
    fn test_re_exports() {
        let error = TaskError::invalid_priority(0);
        assert!(error.is_validation());

        let filter = TaskFilter::default();
        assert_eq!(filter.limit, LIMIT_DEFAULT);
    }
}
