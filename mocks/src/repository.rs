//! Mock implementation of the TaskRepository trait
//!
//! Provides a thread-safe in-memory repository with:
//! - Error injection capabilities
//! - Call tracking for verification
//! - The same observable list semantics as the SQLite implementation

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc,
};
use todo_core::{
    models::PrioritySort, NewTask, Result, Task, TaskError, TaskFilter, TaskRepository,
    TaskValidator, UpdateTask,
};

/// Mock implementation of TaskRepository for testing
pub struct MockTaskRepository {
    tasks: Arc<Mutex<HashMap<i64, Task>>>,
    next_id: Arc<AtomicI64>,
    error_injection: Arc<Mutex<Option<TaskError>>>,
    call_history: Arc<Mutex<Vec<String>>>,
}

impl Default for MockTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTaskRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            tasks: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
            error_injection: Arc::new(Mutex::new(None)),
            call_history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock repository with pre-populated tasks
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let mut task_map = HashMap::new();
        let mut max_id = 0;

        for task in tasks {
            if task.id > max_id {
                max_id = task.id;
            }
            task_map.insert(task.id, task);
        }

        Self {
            tasks: Arc::new(Mutex::new(task_map)),
            next_id: Arc::new(AtomicI64::new(max_id + 1)),
            error_injection: Arc::new(Mutex::new(None)),
            call_history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Inject an error for the next operation
    pub fn inject_error(&self, error: TaskError) {
        *self.error_injection.lock() = Some(error);
    }

    /// Get the recorded call history
    pub fn call_history(&self) -> Vec<String> {
        self.call_history.lock().clone()
    }

    /// Number of tasks currently stored
    pub fn task_count(&self) -> usize {
        self.tasks.lock().len()
    }

    fn record_call(&self, name: &str) -> Result<()> {
        self.call_history.lock().push(name.to_string());
        if let Some(error) = self.error_injection.lock().take() {
            return Err(error);
        }
        Ok(())
    }
}

#[async_trait]
impl TaskRepository for MockTaskRepository {
    async fn list(&self, filter: TaskFilter) -> Result<Vec<Task>> {
        self.record_call("list")?;

        let tasks = self.tasks.lock();
        let mut result: Vec<Task> = tasks.values().cloned().collect();
        // Insertion order baseline, like rowid order in SQLite
        result.sort_by_key(|t| t.id);

        if let Some(is_done) = filter.is_done_filter() {
            result.retain(|t| t.is_done == is_done);
        }

        if let Some(term) = filter.search_term() {
            let term = term.to_lowercase();
            result.retain(|t| {
                t.title.to_lowercase().contains(&term)
                    || t.description
                        .as_deref()
                        .map(|d| d.to_lowercase().contains(&term))
                        .unwrap_or(false)
            });
        }

        match filter.sort_by_priority {
            Some(PrioritySort::Asc) => result.sort_by_key(|t| t.priority),
            Some(PrioritySort::Desc) => result.sort_by_key(|t| std::cmp::Reverse(t.priority)),
            None => {}
        }

        let result = result
            .into_iter()
            .skip(filter.skip as usize)
            .take(filter.limit as usize)
            .collect();

        Ok(result)
    }

    async fn get(&self, id: i64) -> Result<Option<Task>> {
        self.record_call("get")?;
        Ok(self.tasks.lock().get(&id).cloned())
    }

    async fn create(&self, task: NewTask) -> Result<Task> {
        self.record_call("create")?;
        TaskValidator::validate_new_task(&task)?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let created = Task {
            id,
            title: task.title,
            description: task.description,
            priority: task.priority,
            is_done: false,
            created_at: Utc::now(),
            updated_at: None,
        };

        self.tasks.lock().insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, id: i64, updates: UpdateTask) -> Result<Option<Task>> {
        self.record_call("update")?;
        TaskValidator::validate_update(&updates)?;

        let mut tasks = self.tasks.lock();
        match tasks.get_mut(&id) {
            Some(task) => {
                updates.apply_to(task, Utc::now());
                Ok(Some(task.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        self.record_call("delete")?;
        Ok(self.tasks.lock().remove(&id).is_some())
    }

    async fn mark_done(&self, id: i64) -> Result<Option<Task>> {
        self.record_call("mark_done")?;

        let mut tasks = self.tasks.lock();
        match tasks.get_mut(&id) {
            Some(task) => {
                task.is_done = true;
                task.updated_at = Some(Utc::now());
                Ok(Some(task.clone()))
            }
            None => Ok(None),
        }
    }

    async fn health_check(&self) -> Result<()> {
        self.record_call("health_check")
    }
}
