//! Builder pattern implementations for easy test data construction
//!
//! Provides fluent builders for:
//! - Task construction with sensible defaults
//! - NewTask and UpdateTask variants
//! - Filter construction for query testing

use chrono::{DateTime, Utc};
use todo_core::models::{PrioritySort, StatusFilter};
use todo_core::{NewTask, Task, TaskFilter, UpdateTask, PRIORITY_DEFAULT};

/// Builder for constructing Task instances in tests
pub struct TaskBuilder {
    task: Task,
}

impl Default for TaskBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskBuilder {
    /// Create new builder with default values
    pub fn new() -> Self {
        Self {
            task: Task {
                id: 1,
                title: "Test task".to_string(),
                description: None,
                priority: PRIORITY_DEFAULT,
                is_done: false,
                created_at: Utc::now(),
                updated_at: None,
            },
        }
    }

    /// Set task ID
    pub fn with_id(mut self, id: i64) -> Self {
        self.task.id = id;
        self
    }

    /// Set task title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.task.title = title.into();
        self
    }

    /// Set task description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.task.description = Some(description.into());
        self
    }

    /// Set task priority
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.task.priority = priority;
        self
    }

    /// Set completion flag, stamping updated_at when finishing
    pub fn with_done(mut self, is_done: bool) -> Self {
        self.task.is_done = is_done;
        if is_done && self.task.updated_at.is_none() {
            self.task.updated_at = Some(Utc::now());
        }
        self
    }

    /// Set creation timestamp
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.task.created_at = created_at;
        self
    }

    /// Set last-modified timestamp
    pub fn with_updated_at(mut self, updated_at: Option<DateTime<Utc>>) -> Self {
        self.task.updated_at = updated_at;
        self
    }

    /// Build the final Task
    pub fn build(self) -> Task {
        self.task
    }
}

/// Builder for constructing NewTask instances in tests
pub struct NewTaskBuilder {
    new_task: NewTask,
}

impl Default for NewTaskBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NewTaskBuilder {
    /// Create new builder with default values
    pub fn new() -> Self {
        Self {
            new_task: NewTask::new("New test task", None),
        }
    }

    /// Set title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.new_task.title = title.into();
        self
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.new_task.description = Some(description.into());
        self
    }

    /// Set priority
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.new_task.priority = priority;
        self
    }

    /// Build the final NewTask
    pub fn build(self) -> NewTask {
        self.new_task
    }
}

/// Builder for constructing UpdateTask instances in tests
#[derive(Default)]
pub struct UpdateTaskBuilder {
    update: UpdateTask,
}

impl UpdateTaskBuilder {
    /// Create new empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set title update
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.update.title = Some(title.into());
        self
    }

    /// Set description update
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.update.description = Some(description.into());
        self
    }

    /// Set completion flag update
    pub fn with_done(mut self, is_done: bool) -> Self {
        self.update.is_done = Some(is_done);
        self
    }

    /// Set priority update
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.update.priority = Some(priority);
        self
    }

    /// Build the final UpdateTask
    pub fn build(self) -> UpdateTask {
        self.update
    }
}

/// Builder for constructing TaskFilter instances in tests
#[derive(Default)]
pub struct FilterBuilder {
    filter: TaskFilter,
}

impl FilterBuilder {
    /// Create new builder with default filter (no constraints)
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by completion status
    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.filter.status = Some(status);
        self
    }

    /// Sort by priority
    pub fn sorted(mut self, sort: PrioritySort) -> Self {
        self.filter.sort_by_priority = Some(sort);
        self
    }

    /// Filter by search term
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.filter.search = Some(term.into());
        self
    }

    /// Set pagination offset
    pub fn with_skip(mut self, skip: i64) -> Self {
        self.filter.skip = skip;
        self
    }

    /// Set page size
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.filter.limit = limit;
        self
    }

    /// Build the final TaskFilter
    pub fn build(self) -> TaskFilter {
        self.filter
    }
}
