use thiserror::Error;

/// Result type alias for task operations
pub type Result<T> = std::result::Result<T, TaskError>;

/// Error types for the todo task service.
///
/// Absence of a row is deliberately *not* an error here: lookups return
/// `Option<Task>` and delete returns `bool`, and the route layer owns the
/// translation to 404. Errors cover the remaining failure modes, each
/// mapping to an HTTP status code for API responses.
///
/// # Examples
///
/// ```rust
/// use todo_core::error::TaskError;
///
/// let error = TaskError::invalid_priority(42);
/// assert!(error.is_validation());
/// assert_eq!(error.status_code(), 422);
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// Malformed or out-of-range input, detected before storage access
    #[error("Validation error: {0}")]
    Validation(String),

    /// Underlying storage engine failure
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error, startup time only
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal system error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TaskError {
    /// Create a validation error for an empty required field
    pub fn empty_field(field: &str) -> Self {
        Self::Validation(format!("Field '{field}' cannot be empty"))
    }

    /// Create a validation error for a priority outside [1,10]
    pub fn invalid_priority(priority: i32) -> Self {
        Self::Validation(format!(
            "Priority must be between 1 and 10 (got {priority})"
        ))
    }

    /// Check if this error indicates a validation problem
    pub fn is_validation(&self) -> bool {
        matches!(self, TaskError::Validation(_))
    }

    /// Check if this error indicates a database problem
    pub fn is_database(&self) -> bool {
        matches!(self, TaskError::Database(_))
    }

    /// Convert to the HTTP status code the route layer responds with
    pub fn status_code(&self) -> u16 {
        match self {
            TaskError::Validation(_) => 422,
            TaskError::Database(_) => 500,
            TaskError::Configuration(_) => 500,
            TaskError::Internal(_) => 500,
        }
    }
}
