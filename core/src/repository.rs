use async_trait::async_trait;
use crate::{
    error::Result,
    models::{NewTask, Task, TaskFilter, UpdateTask},
};

/// Repository trait for task persistence and retrieval operations
///
/// This trait defines the interface for all task data operations.
/// Implementations must be thread-safe and support concurrent access.
/// Absence of a row is a normal outcome communicated through `Option`
/// (or `bool` for delete), never through an error.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// List tasks matching the given filter criteria
    ///
    /// Clauses are applied in a fixed order: status filter, search
    /// filter, priority sort, pagination.
    ///
    /// # Arguments
    /// * `filter` - The filter criteria to apply
    ///
    /// # Returns
    /// * `Ok(Vec<Task>)` - The matching tasks (may be empty)
    /// * `Err(TaskError::Database)` - If the database operation fails
    async fn list(&self, filter: TaskFilter) -> Result<Vec<Task>>;

    /// Get a task by its numeric ID
    ///
    /// # Returns
    /// * `Ok(Some(Task))` - The task if found
    /// * `Ok(None)` - If no task exists with that ID
    /// * `Err(TaskError::Database)` - If the database operation fails
    async fn get(&self, id: i64) -> Result<Option<Task>>;

    /// Create a new task
    ///
    /// # Arguments
    /// * `task` - The new task data to insert
    ///
    /// # Returns
    /// * `Ok(Task)` - The created task with assigned ID and created_at
    /// * `Err(TaskError::Validation)` - If the task data is invalid
    /// * `Err(TaskError::Database)` - If the database operation fails
    async fn create(&self, task: NewTask) -> Result<Task>;

    /// Apply a partial update to an existing task
    ///
    /// Only supplied fields are written; `updated_at` is refreshed when
    /// at least one field is present.
    ///
    /// # Returns
    /// * `Ok(Some(Task))` - The updated task
    /// * `Ok(None)` - If no task exists with that ID
    /// * `Err(TaskError::Validation)` - If the update data is invalid
    /// * `Err(TaskError::Database)` - If the database operation fails
    async fn update(&self, id: i64, updates: UpdateTask) -> Result<Option<Task>>;

    /// Delete a task
    ///
    /// # Returns
    /// * `Ok(true)` - A row was found and removed
    /// * `Ok(false)` - No task exists with that ID
    /// * `Err(TaskError::Database)` - If the database operation fails
    async fn delete(&self, id: i64) -> Result<bool>;

    /// Mark a task as done
    ///
    /// Sets `is_done` to true and refreshes `updated_at`. Idempotent:
    /// marking an already-done task leaves it done. There is no inverse
    /// operation at this level.
    ///
    /// # Returns
    /// * `Ok(Some(Task))` - The updated task
    /// * `Ok(None)` - If no task exists with that ID
    /// * `Err(TaskError::Database)` - If the database operation fails
    async fn mark_done(&self, id: i64) -> Result<Option<Task>>;

    /// Get repository health status for monitoring
    ///
    /// # Returns
    /// * `Ok(())` - Repository is healthy and connected
    /// * `Err(TaskError::Database)` - Repository is unhealthy
    async fn health_check(&self) -> Result<()>;
}
