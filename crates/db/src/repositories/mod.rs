//! Task storage contract and its implementations.
//!
//! [`TaskStore`] is the only persistence surface the service layer sees.
//! [`TaskRepo`] backs it with PostgreSQL; [`MemoryTaskStore`] keeps rows in
//! process memory for tests and database-less runs.

pub mod memory_task_store;
pub mod task_repo;

pub use memory_task_store::MemoryTaskStore;
pub use task_repo::TaskRepo;

use async_trait::async_trait;
use taskmanager_core::types::DbId;

use crate::models::task::Task;

/// Result type for task store operations.
pub type StoreResult<T> = Result<T, sqlx::Error>;

/// Keyed durable storage for [`Task`] entities.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Insert `task` when it has no `id`, otherwise update the row it names.
    ///
    /// On insert the store assigns `id` and sets both `created_at` and
    /// `updated_at` to the current time. On update it overwrites `title`,
    /// `description` and `completed`, moves `updated_at` forward and leaves
    /// `created_at` alone. Returns the row as stored.
    ///
    /// # Errors
    ///
    /// Returns [`sqlx::Error::RowNotFound`] when updating an `id` that does
    /// not exist.
    async fn save(&self, task: Task) -> StoreResult<Task>;

    /// Find a task by its ID.
    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Task>>;

    /// List every task in insertion (ascending `id`) order.
    async fn find_all(&self) -> StoreResult<Vec<Task>>;

    /// Whether a task with this ID exists.
    async fn exists_by_id(&self, id: DbId) -> StoreResult<bool>;

    /// Permanently remove a task. Removing a missing ID is a no-op.
    async fn delete_by_id(&self, id: DbId) -> StoreResult<()>;

    /// Check that the backing storage is reachable.
    async fn ping(&self) -> StoreResult<()>;
}
