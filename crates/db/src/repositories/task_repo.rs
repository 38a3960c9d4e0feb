//! Repository for the `tasks` table.

use async_trait::async_trait;
use taskmanager_core::types::DbId;

use crate::models::task::Task;
use crate::repositories::{StoreResult, TaskStore};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, completed, created_at, updated_at";

/// PostgreSQL-backed [`TaskStore`]. Timestamps come from the database clock.
#[derive(Debug, Clone)]
pub struct TaskRepo {
    pool: DbPool,
}

impl TaskRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Insert a new task, returning the created row.
    async fn insert(&self, task: &Task) -> StoreResult<Task> {
        let query = format!(
            "INSERT INTO tasks (title, description, completed)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(&task.title)
            .bind(&task.description)
            .bind(task.completed)
            .fetch_one(&self.pool)
            .await
    }

    /// Overwrite the mutable columns of an existing task.
    ///
    /// `updated_at` never moves backwards even if the database clock does.
    async fn update(&self, id: DbId, task: &Task) -> StoreResult<Task> {
        let query = format!(
            "UPDATE tasks SET
                title = $2,
                description = $3,
                completed = $4,
                updated_at = GREATEST(NOW(), updated_at)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&task.title)
            .bind(&task.description)
            .bind(task.completed)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }
}

#[async_trait]
impl TaskStore for TaskRepo {
    async fn save(&self, task: Task) -> StoreResult<Task> {
        match task.id {
            None => self.insert(&task).await,
            Some(id) => self.update(id, &task).await,
        }
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Task>> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn find_all(&self) -> StoreResult<Vec<Task>> {
        let query = format!("SELECT {COLUMNS} FROM tasks ORDER BY id ASC");
        sqlx::query_as::<_, Task>(&query)
            .fetch_all(&self.pool)
            .await
    }

    async fn exists_by_id(&self, id: DbId) -> StoreResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM tasks WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }

    async fn delete_by_id(&self, id: DbId) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        tracing::debug!(id, rows = result.rows_affected(), "Deleted task row");
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await
    }
}
