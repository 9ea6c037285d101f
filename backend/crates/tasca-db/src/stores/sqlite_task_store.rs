use crate::{DbError, Result as DbErrorResult, TaskStore, UpdateOptions};

use tasca_core::{NewTask, Task, TaskPatch};

use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use log::debug;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

/// Embedded schema migrations for the task table
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

const TASK_COLUMNS: &str = "id, title, description, cost, hours_estimated, hours_real, \
     image, completed, finished_at, created_at, updated_at";

/// SQLite-backed task store. Listing follows insertion order (`rowid`).
#[derive(Clone)]
pub struct SqliteTaskStore {
    pool: SqlitePool,
}

#[derive(Debug, FromRow)]
struct TaskRow {
    id: String,
    title: String,
    description: Option<String>,
    cost: f64,
    hours_estimated: f64,
    hours_real: Option<f64>,
    image: Option<String>,
    completed: bool,
    finished_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TaskRow> for Task {
    type Error = DbError;

    #[track_caller]
    fn try_from(r: TaskRow) -> DbErrorResult<Self> {
        Ok(Task {
            id: Uuid::parse_str(&r.id).map_err(|e| DbError::Initialization {
                message: format!("Invalid UUID in tasks.id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            title: r.title,
            description: r.description,
            cost: r.cost,
            hours_estimated: r.hours_estimated,
            hours_real: r.hours_real,
            image: r.image,
            completed: r.completed,
            finished_at: r.finished_at,
            created_at: r.created_at,
            updated_at: r.updated_at,
        })
    }
}

impl SqliteTaskStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database file and run migrations
    pub async fn open(path: &Path, max_connections: u32) -> DbErrorResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(
                SqliteConnectOptions::new()
                    .filename(path)
                    .create_if_missing(true)
                    .journal_mode(SqliteJournalMode::Wal)
                    .synchronous(SqliteSynchronous::Normal)
                    .busy_timeout(Duration::from_secs(5)),
            )
            .await?;

        let store = Self::new(pool);
        store.migrate().await?;
        Ok(store)
    }

    pub async fn migrate(&self) -> DbErrorResult<()> {
        MIGRATOR.run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl TaskStore for SqliteTaskStore {
    async fn create(&self, new_task: NewTask) -> DbErrorResult<Task> {
        new_task.validate()?;
        let task = Task::from_new_task(new_task);

        sqlx::query(&format!(
            "INSERT INTO tasks ({}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            TASK_COLUMNS
        ))
        .bind(task.id.to_string())
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.cost)
        .bind(task.hours_estimated)
        .bind(task.hours_real)
        .bind(&task.image)
        .bind(task.completed)
        .bind(task.finished_at)
        .bind(task.created_at)
        .bind(task.updated_at)
        .execute(&self.pool)
        .await?;

        debug!("Inserted task {}", task.id);
        Ok(task)
    }

    async fn find_all(&self) -> DbErrorResult<Vec<Task>> {
        let rows: Vec<TaskRow> = sqlx::query_as(&format!(
            "SELECT {} FROM tasks ORDER BY rowid",
            TASK_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Task::try_from).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Task>> {
        let row: Option<TaskRow> =
            sqlx::query_as(&format!("SELECT {} FROM tasks WHERE id = ?", TASK_COLUMNS))
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await?;

        row.map(Task::try_from).transpose()
    }

    async fn find_by_id_and_update(
        &self,
        id: Uuid,
        patch: TaskPatch,
        options: UpdateOptions,
    ) -> DbErrorResult<Option<Task>> {
        // Take the write lock up front so concurrent writers queue on busy_timeout
        // instead of failing the read-to-write upgrade
        let mut tx = self.pool.begin_with("BEGIN IMMEDIATE").await?;

        let row: Option<TaskRow> =
            sqlx::query_as(&format!("SELECT {} FROM tasks WHERE id = ?", TASK_COLUMNS))
                .bind(id.to_string())
                .fetch_optional(&mut *tx)
                .await?;

        // Dropping the transaction rolls it back
        let Some(row) = row else {
            return Ok(None);
        };

        let mut task = Task::try_from(row)?;
        task.apply_patch(patch)?;
        if options.run_validators {
            task.validate()?;
        }

        sqlx::query(
            r#"
                UPDATE tasks SET
                    title = ?, description = ?, cost = ?, hours_estimated = ?,
                    hours_real = ?, image = ?, completed = ?, finished_at = ?,
                    updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.cost)
        .bind(task.hours_estimated)
        .bind(task.hours_real)
        .bind(&task.image)
        .bind(task.completed)
        .bind(task.finished_at)
        .bind(task.updated_at)
        .bind(task.id.to_string())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        debug!("Updated task {}", task.id);
        Ok(Some(task))
    }

    async fn find_by_id_and_delete(&self, id: Uuid) -> DbErrorResult<Option<Task>> {
        let row: Option<TaskRow> = sqlx::query_as(&format!(
            "DELETE FROM tasks WHERE id = ? RETURNING {}",
            TASK_COLUMNS
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Task::try_from).transpose()
    }

    async fn ping(&self) -> DbErrorResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
