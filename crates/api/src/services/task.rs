//! Task lifecycle service.
//!
//! Translates client-facing requests into [`TaskStore`] calls and back.
//! Every identifier-addressed operation checks that the task exists before
//! touching it and fails with [`CoreError::NotFound`] otherwise, without
//! issuing any write.

use std::sync::Arc;

use taskmanager_core::error::CoreError;
use taskmanager_core::types::DbId;
use taskmanager_db::models::task::{Task, TaskDto};
use taskmanager_db::repositories::TaskStore;

/// Entity name used in not-found errors.
const ENTITY: &str = "Task";

/// Errors returned by [`TaskService`] operations.
#[derive(Debug, thiserror::Error)]
pub enum TaskServiceError {
    /// A domain error, currently only a missing task.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The store failed.
    #[error(transparent)]
    Store(#[from] sqlx::Error),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

fn not_found(id: DbId) -> TaskServiceError {
    TaskServiceError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// A row that vanished between lookup and write is still a missing task.
fn missing_on_write(id: DbId) -> impl FnOnce(sqlx::Error) -> TaskServiceError {
    move |err| match err {
        sqlx::Error::RowNotFound => not_found(id),
        other => other.into(),
    }
}

/// CRUD orchestration over a shared [`TaskStore`].
///
/// Holds no state besides the store handle, so clones are cheap and may be
/// used from any number of request handlers concurrently.
#[derive(Clone)]
pub struct TaskService {
    store: Arc<dyn TaskStore>,
}

impl TaskService {
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }

    /// Persist a new task built from `input`.
    ///
    /// Caller-supplied `id` and timestamps are ignored; the store assigns
    /// them. No field validation is applied.
    pub async fn create_task(&self, input: TaskDto) -> TaskServiceResult<TaskDto> {
        let saved = self.store.save(Task::from_dto(input)).await?;
        tracing::info!(id = ?saved.id, "Created task");
        Ok(saved.into())
    }

    /// Every stored task, in store order.
    pub async fn get_all_tasks(&self) -> TaskServiceResult<Vec<TaskDto>> {
        let tasks = self.store.find_all().await?;
        tracing::debug!(count = tasks.len(), "Listed tasks");
        Ok(tasks.into_iter().map(TaskDto::from).collect())
    }

    pub async fn get_task_by_id(&self, id: DbId) -> TaskServiceResult<TaskDto> {
        let task = self.find_existing(id).await?;
        Ok(task.into())
    }

    /// Replace `title`, `description` and `completed` of task `id` with the
    /// values in `input`.
    ///
    /// Absent values in `input` overwrite stored ones; there is no partial
    /// merge. `id` and `created_at` are preserved.
    pub async fn update_task(&self, id: DbId, input: TaskDto) -> TaskServiceResult<TaskDto> {
        let mut task = self.find_existing(id).await?;
        task.apply_dto(input);

        let saved = self.store.save(task).await.map_err(missing_on_write(id))?;
        tracing::info!(id, "Updated task");
        Ok(saved.into())
    }

    /// Set `completed = true` on task `id`. Calling it again is harmless.
    pub async fn mark_task_as_completed(&self, id: DbId) -> TaskServiceResult<TaskDto> {
        let mut task = self.find_existing(id).await?;
        task.completed = true;

        let saved = self.store.save(task).await.map_err(missing_on_write(id))?;
        tracing::info!(id, "Marked task as completed");
        Ok(saved.into())
    }

    /// Permanently remove task `id`.
    pub async fn delete_task(&self, id: DbId) -> TaskServiceResult<()> {
        if !self.store.exists_by_id(id).await? {
            tracing::debug!(id, "Delete requested for missing task");
            return Err(not_found(id));
        }

        self.store.delete_by_id(id).await?;
        tracing::info!(id, "Deleted task");
        Ok(())
    }

    /// Whether the backing store answers a ping.
    pub async fn store_reachable(&self) -> bool {
        match self.store.ping().await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "Task store ping failed");
                false
            }
        }
    }

    async fn find_existing(&self, id: DbId) -> TaskServiceResult<Task> {
        self.store.find_by_id(id).await?.ok_or_else(|| {
            tracing::debug!(id, "Task lookup missed");
            not_found(id)
        })
    }
}
