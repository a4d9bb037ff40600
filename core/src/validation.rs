use crate::{
    error::{Result, TaskError},
    models::{NewTask, UpdateTask, PRIORITY_MAX, PRIORITY_MIN},
};

/// Validation utilities for task inputs.
///
/// All checks run before any storage access; a payload that fails here
/// never reaches the repository.
pub struct TaskValidator;

impl TaskValidator {
    /// Validate a task title
    ///
    /// Titles must not be empty or only whitespace.
    ///
    /// # Arguments
    /// * `title` - The title to validate
    ///
    /// # Returns
    /// * `Ok(())` - If the title is valid
    /// * `Err(TaskError::Validation)` - If the title is empty
    pub fn validate_title(title: &str) -> Result<()> {
        if title.trim().is_empty() {
            return Err(TaskError::empty_field("title"));
        }
        Ok(())
    }

    /// Validate a priority value against the 1-10 scale
    pub fn validate_priority(priority: i32) -> Result<()> {
        if !(PRIORITY_MIN..=PRIORITY_MAX).contains(&priority) {
            return Err(TaskError::invalid_priority(priority));
        }
        Ok(())
    }

    /// Validate a complete create payload
    ///
    /// # Returns
    /// * `Ok(())` - If all fields are valid
    /// * `Err(TaskError::Validation)` - If the title is empty or the
    ///   priority is outside [1,10]
    pub fn validate_new_task(task: &NewTask) -> Result<()> {
        Self::validate_title(&task.title)?;
        Self::validate_priority(task.priority)?;
        Ok(())
    }

    /// Validate a partial update payload
    ///
    /// Only supplied fields are checked; an entirely empty update is
    /// valid and results in no mutation.
    pub fn validate_update(updates: &UpdateTask) -> Result<()> {
        if let Some(ref title) = updates.title {
            Self::validate_title(title)?;
        }
        if let Some(priority) = updates.priority {
            Self::validate_priority(priority)?;
        }
        Ok(())
    }
}
