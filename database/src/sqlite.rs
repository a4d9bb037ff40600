use crate::common::{build_list_query, row_to_task, sqlx_error_to_task_error, TASK_COLUMNS};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use todo_core::{
    error::{Result, TaskError},
    models::{NewTask, Task, TaskFilter, UpdateTask},
    repository::TaskRepository,
    validation::TaskValidator,
};

/// SQLite implementation of the TaskRepository trait
///
/// Provides task persistence over a pooled SQLite connection with WAL
/// journaling, embedded migrations, and a single error-mapping path
/// into the domain error type.
#[derive(Debug, Clone)]
pub struct SqliteTaskRepository {
    pool: SqlitePool,
}

impl SqliteTaskRepository {
    /// Create a new SQLite repository with the given database URL
    ///
    /// # Arguments
    /// * `database_url` - SQLite database URL (`sqlite://path` or a bare
    ///   file path)
    ///
    /// # Returns
    /// * `Ok(SqliteTaskRepository)` - Successfully connected repository
    /// * `Err(TaskError::Database)` - If connection fails
    ///
    /// # Examples
    /// ```rust,no_run
    /// use database::SqliteTaskRepository;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let repo = SqliteTaskRepository::new("sqlite:///tmp/tasks.db").await?;
    /// repo.migrate().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new(database_url: &str) -> Result<Self> {
        let db_url = if database_url.starts_with("sqlite://") {
            database_url.to_string()
        } else {
            format!("sqlite://{database_url}")
        };

        // Create the database file if it doesn't exist yet
        if !Sqlite::database_exists(&db_url).await.unwrap_or(false) {
            match Sqlite::create_database(&db_url).await {
                Ok(_) => tracing::info!("Database created successfully"),
                Err(error) => {
                    tracing::error!("Error creating database: {}", error);
                    return Err(TaskError::Database(format!(
                        "Failed to create database: {error}"
                    )));
                }
            }
        }

        let connect_options = sqlx::sqlite::SqliteConnectOptions::new()
            .filename(db_url.trim_start_matches("sqlite://"))
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .busy_timeout(std::time::Duration::from_secs(5))
            .foreign_keys(true);

        let pool = SqlitePool::connect_with(connect_options)
            .await
            .map_err(sqlx_error_to_task_error)?;

        Ok(Self { pool })
    }

    /// Run database migrations
    ///
    /// Applies all pending migrations to bring the schema up to date;
    /// call once after creating a repository instance.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations/sqlite")
            .run(&self.pool)
            .await
            .map_err(|e| TaskError::Database(format!("Migration failed: {e}")))?;

        tracing::info!("Database migrations completed successfully");
        Ok(())
    }

    /// Get access to the underlying database pool for custom operations
    ///
    /// Primarily intended for testing scenarios where direct SQL
    /// execution is needed.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn list(&self, filter: TaskFilter) -> Result<Vec<Task>> {
        tracing::debug!(?filter, "listing tasks");

        let mut query_builder = build_list_query(&filter);
        let rows = query_builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(sqlx_error_to_task_error)?;

        rows.iter().map(row_to_task).collect()
    }

    async fn get(&self, id: i64) -> Result<Option<Task>> {
        let result = sqlx::query(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(sqlx_error_to_task_error)?;

        match result {
            Some(row) => Ok(Some(row_to_task(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, task: NewTask) -> Result<Task> {
        TaskValidator::validate_new_task(&task)?;

        let now = Utc::now();

        let row = sqlx::query(&format!(
            "INSERT INTO tasks (title, description, priority, is_done, created_at) \
             VALUES (?, ?, ?, ?, ?) \
             RETURNING {TASK_COLUMNS}"
        ))
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.priority)
        .bind(false)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(sqlx_error_to_task_error)?;

        row_to_task(&row)
    }

    async fn update(&self, id: i64, updates: UpdateTask) -> Result<Option<Task>> {
        TaskValidator::validate_update(&updates)?;

        if updates.is_empty() {
            // Nothing to write, return the row as-is
            return self.get(id).await;
        }

        let mut query_builder: sqlx::QueryBuilder<sqlx::Sqlite> =
            sqlx::QueryBuilder::new("UPDATE tasks SET ");

        if let Some(ref title) = updates.title {
            query_builder.push("title = ");
            query_builder.push_bind(title);
            query_builder.push(", ");
        }

        if let Some(ref description) = updates.description {
            query_builder.push("description = ");
            query_builder.push_bind(description);
            query_builder.push(", ");
        }

        if let Some(is_done) = updates.is_done {
            query_builder.push("is_done = ");
            query_builder.push_bind(is_done);
            query_builder.push(", ");
        }

        if let Some(priority) = updates.priority {
            query_builder.push("priority = ");
            query_builder.push_bind(priority);
            query_builder.push(", ");
        }

        // Every mutation refreshes updated_at
        query_builder.push("updated_at = ");
        query_builder.push_bind(Utc::now());

        query_builder.push(" WHERE id = ");
        query_builder.push_bind(id);
        query_builder.push(format!(" RETURNING {TASK_COLUMNS}"));

        let row = query_builder
            .build()
            .fetch_optional(&self.pool)
            .await
            .map_err(sqlx_error_to_task_error)?;

        match row {
            Some(row) => Ok(Some(row_to_task(&row)?)),
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(sqlx_error_to_task_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn mark_done(&self, id: i64) -> Result<Option<Task>> {
        let row = sqlx::query(&format!(
            "UPDATE tasks SET is_done = ?, updated_at = ? WHERE id = ? RETURNING {TASK_COLUMNS}"
        ))
        .bind(true)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(sqlx_error_to_task_error)?;

        match row {
            Some(row) => Ok(Some(row_to_task(&row)?)),
            None => Ok(None),
        }
    }

    async fn health_check(&self) -> Result<()> {
        // Simple query to verify database connectivity
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(sqlx_error_to_task_error)?;

        Ok(())
    }
}
