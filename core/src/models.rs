use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TaskError};

/// Lowest priority a task may carry.
pub const PRIORITY_MIN: i32 = 1;
/// Highest priority a task may carry.
pub const PRIORITY_MAX: i32 = 10;
/// Priority assigned when the create payload omits one.
pub const PRIORITY_DEFAULT: i32 = 5;

/// Maximum number of rows a single list call may return.
pub const LIMIT_MAX: i64 = 100;
/// Default page size when the caller does not specify one.
pub const LIMIT_DEFAULT: i64 = 100;

/// A persisted todo task.
///
/// Tasks are the single entity of the system. The storage layer assigns
/// `id` and `created_at` on insert and both are immutable afterwards;
/// `updated_at` stays `None` until the first mutation.
///
/// # Examples
///
/// ```rust
/// use todo_core::models::Task;
/// use chrono::Utc;
///
/// let task = Task {
///     id: 1,
///     title: "Buy milk".to_string(),
///     description: None,
///     priority: 3,
///     is_done: false,
///     created_at: Utc::now(),
///     updated_at: None,
/// };
/// assert!(!task.is_done);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Auto-increment primary key
    pub id: i64,
    /// Short task title, never empty
    pub title: String,
    /// Optional free-form details
    pub description: Option<String>,
    /// Priority on the 1-10 scale (10 = most urgent)
    pub priority: i32,
    /// Whether the task has been completed
    pub is_done: bool,
    /// Creation timestamp, set once by storage
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last mutation, if any
    pub updated_at: Option<DateTime<Utc>>,
}

/// Data transfer object for creating new tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTask {
    /// Required task title
    pub title: String,
    /// Optional details
    pub description: Option<String>,
    /// Priority on the 1-10 scale, defaults to 5 when omitted
    #[serde(default = "default_priority")]
    pub priority: i32,
}

fn default_priority() -> i32 {
    PRIORITY_DEFAULT
}

impl NewTask {
    /// Create a NewTask with the default priority.
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            description,
            priority: PRIORITY_DEFAULT,
        }
    }
}

/// Data transfer object for partial task updates.
///
/// Every field is optional; only supplied fields are applied to the
/// target row, omitted fields stay untouched.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UpdateTask {
    /// Optional new title
    pub title: Option<String>,
    /// Optional new description
    pub description: Option<String>,
    /// Optional completion flag
    pub is_done: Option<bool>,
    /// Optional new priority
    pub priority: Option<i32>,
}

impl UpdateTask {
    /// True when no field is supplied at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.is_done.is_none()
            && self.priority.is_none()
    }

    /// Merge the supplied fields into `task`, field by field.
    ///
    /// Refreshes `updated_at` only when at least one field is present.
    /// In-memory counterpart of the dynamic UPDATE the SQLite
    /// repository builds.
    pub fn apply_to(&self, task: &mut Task, now: DateTime<Utc>) {
        if self.is_empty() {
            return;
        }
        if let Some(ref title) = self.title {
            task.title = title.clone();
        }
        if let Some(ref description) = self.description {
            task.description = Some(description.clone());
        }
        if let Some(is_done) = self.is_done {
            task.is_done = is_done;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        task.updated_at = Some(now);
    }
}

/// Completion-status filter for list queries.
#[derive(Debug, Clone, Copy, Hash, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// No completion filter (explicit form of the absent parameter)
    All,
    /// Only completed tasks
    Done,
    /// Only open tasks
    Undone,
}

impl StatusFilter {
    /// Parse the wire value of the `status` query parameter.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "all" => Ok(StatusFilter::All),
            "done" => Ok(StatusFilter::Done),
            "undone" => Ok(StatusFilter::Undone),
            other => Err(TaskError::Validation(format!(
                "Status must be one of: all, done, undone (got '{other}')"
            ))),
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusFilter::All => write!(f, "all"),
            StatusFilter::Done => write!(f, "done"),
            StatusFilter::Undone => write!(f, "undone"),
        }
    }
}

/// Priority sort direction for list queries.
#[derive(Debug, Clone, Copy, Hash, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PrioritySort {
    /// Lowest priority first
    Asc,
    /// Highest priority first
    Desc,
}

impl PrioritySort {
    /// Parse the wire value of the `sort_by_priority` query parameter.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "asc" => Ok(PrioritySort::Asc),
            "desc" => Ok(PrioritySort::Desc),
            other => Err(TaskError::Validation(format!(
                "Sort must be one of: asc, desc (got '{other}')"
            ))),
        }
    }
}

impl std::fmt::Display for PrioritySort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrioritySort::Asc => write!(f, "asc"),
            PrioritySort::Desc => write!(f, "desc"),
        }
    }
}

/// Filter criteria for list queries.
///
/// Clauses are applied in a fixed order: status, search, sort,
/// pagination. `None` for status or sort means "no clause"; an empty
/// search string is treated the same as no search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskFilter {
    /// Completion-status filter; `All` and `None` are equivalent
    pub status: Option<StatusFilter>,
    /// Sort direction by priority; `None` keeps insertion order
    pub sort_by_priority: Option<PrioritySort>,
    /// Case-insensitive substring matched against title or description
    pub search: Option<String>,
    /// Number of rows to skip, >= 0
    pub skip: i64,
    /// Maximum number of rows to return, 1-100
    pub limit: i64,
}

impl Default for TaskFilter {
    fn default() -> Self {
        Self {
            status: None,
            sort_by_priority: None,
            search: None,
            skip: 0,
            limit: LIMIT_DEFAULT,
        }
    }
}

impl TaskFilter {
    /// Build a validated filter from raw query-parameter values.
    ///
    /// Returns `TaskError::Validation` when status or sort is outside
    /// its enumerated set, when skip is negative, or when limit is
    /// outside [1,100].
    pub fn from_params(
        status: Option<&str>,
        sort_by_priority: Option<&str>,
        search: Option<String>,
        skip: Option<i64>,
        limit: Option<i64>,
    ) -> Result<Self> {
        let status = status.map(StatusFilter::parse).transpose()?;
        let sort_by_priority = sort_by_priority.map(PrioritySort::parse).transpose()?;

        let skip = skip.unwrap_or(0);
        if skip < 0 {
            return Err(TaskError::Validation(format!(
                "skip must be >= 0 (got {skip})"
            )));
        }

        let limit = limit.unwrap_or(LIMIT_DEFAULT);
        if !(1..=LIMIT_MAX).contains(&limit) {
            return Err(TaskError::Validation(format!(
                "limit must be between 1 and {LIMIT_MAX} (got {limit})"
            )));
        }

        Ok(Self {
            status,
            sort_by_priority,
            search,
            skip,
            limit,
        })
    }

    /// The effective search term, if a non-empty one was supplied.
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }

    /// Whether the status filter constrains `is_done`, and to what.
    pub fn is_done_filter(&self) -> Option<bool> {
        match self.status {
            Some(StatusFilter::Done) => Some(true),
            Some(StatusFilter::Undone) => Some(false),
            Some(StatusFilter::All) | None => None,
        }
    }
}
