use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row};
use todo_core::{
    error::{Result, TaskError},
    models::{PrioritySort, Task, TaskFilter},
};

/// Column list shared by every SELECT/RETURNING clause on the tasks table.
pub const TASK_COLUMNS: &str =
    "id, title, description, priority, is_done, created_at, updated_at";

/// Convert a SQLite row to the Task model
pub fn row_to_task(row: &SqliteRow) -> Result<Task> {
    let created_at: DateTime<Utc> = row.get("created_at");
    let updated_at: Option<DateTime<Utc>> = row.get("updated_at");

    Ok(Task {
        id: row.get("id"),
        title: row.get("title"),
        description: row.get("description"),
        priority: row.get("priority"),
        is_done: row.get("is_done"),
        created_at,
        updated_at,
    })
}

/// Convert a SQLx error to TaskError
pub fn sqlx_error_to_task_error(err: sqlx::Error) -> TaskError {
    match &err {
        sqlx::Error::Database(db_err) => {
            TaskError::Database(format!("Database constraint error: {}", db_err.message()))
        }
        sqlx::Error::RowNotFound => {
            // Absence is handled with fetch_optional at the call sites
            TaskError::Database("Unexpected RowNotFound error".to_string())
        }
        sqlx::Error::PoolTimedOut => TaskError::Database("Connection pool timeout".to_string()),
        sqlx::Error::Io(io_err) => TaskError::Database(format!("Database I/O error: {io_err}")),
        _ => TaskError::Database(format!("Database operation failed: {err}")),
    }
}

/// Build the list query for the given filter using QueryBuilder with
/// proper type binding.
///
/// Clauses are pushed in a fixed order: status filter, search filter,
/// priority sort, LIMIT/OFFSET. The search clause matches the term as a
/// case-insensitive substring of title OR description.
pub fn build_list_query(filter: &TaskFilter) -> sqlx::QueryBuilder<sqlx::Sqlite> {
    let mut query_builder: sqlx::QueryBuilder<sqlx::Sqlite> =
        sqlx::QueryBuilder::new(format!("SELECT {TASK_COLUMNS} FROM tasks"));

    let mut has_conditions = false;

    if let Some(is_done) = filter.is_done_filter() {
        query_builder.push(" WHERE is_done = ");
        query_builder.push_bind(is_done);
        has_conditions = true;
    }

    if let Some(term) = filter.search_term() {
        if has_conditions {
            query_builder.push(" AND ");
        } else {
            query_builder.push(" WHERE ");
        }
        let pattern = format!("%{}%", term.to_lowercase());
        query_builder.push("(LOWER(title) LIKE ");
        query_builder.push_bind(pattern.clone());
        query_builder.push(" OR LOWER(description) LIKE ");
        query_builder.push_bind(pattern);
        query_builder.push(")");
    }

    match filter.sort_by_priority {
        Some(PrioritySort::Asc) => {
            query_builder.push(" ORDER BY priority ASC");
        }
        Some(PrioritySort::Desc) => {
            query_builder.push(" ORDER BY priority DESC");
        }
        None => {}
    }

    query_builder.push(" LIMIT ");
    query_builder.push_bind(filter.limit);
    query_builder.push(" OFFSET ");
    query_builder.push_bind(filter.skip);

    query_builder
}
