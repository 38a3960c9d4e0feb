//! In-memory [`TaskStore`] for tests and database-less runs.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use taskmanager_core::types::{DbId, Timestamp};

use crate::models::task::Task;
use crate::repositories::{StoreResult, TaskStore};

/// Thread-safe in-memory task store.
///
/// IDs start at 1 and are never reused, so iteration over the map yields
/// insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryTaskStore {
    state: Arc<RwLock<MemoryState>>,
}

#[derive(Debug, Default)]
struct MemoryState {
    tasks: BTreeMap<DbId, Task>,
    last_id: DbId,
}

impl MemoryTaskStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl std::fmt::Display) -> sqlx::Error {
    sqlx::Error::Io(std::io::Error::other(err.to_string()))
}

/// Current time, clamped so it never precedes `previous`.
fn now_after(previous: Option<Timestamp>) -> Timestamp {
    let now = Utc::now();
    match previous {
        Some(prev) if prev > now => prev,
        _ => now,
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn save(&self, mut task: Task) -> StoreResult<Task> {
        let mut state = self.state.write().map_err(poisoned)?;

        match task.id {
            None => {
                let id = state.last_id + 1;
                state.last_id = id;
                let now = Utc::now();
                task.id = Some(id);
                task.created_at = Some(now);
                task.updated_at = Some(now);
                state.tasks.insert(id, task.clone());
            }
            Some(id) => {
                let stored = state.tasks.get_mut(&id).ok_or(sqlx::Error::RowNotFound)?;
                stored.title = task.title;
                stored.description = task.description;
                stored.completed = task.completed;
                stored.updated_at = Some(now_after(stored.updated_at));
                task = stored.clone();
            }
        }

        Ok(task)
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn find_all(&self) -> StoreResult<Vec<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.tasks.values().cloned().collect())
    }

    async fn exists_by_id(&self, id: DbId) -> StoreResult<bool> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.tasks.contains_key(&id))
    }

    async fn delete_by_id(&self, id: DbId) -> StoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.tasks.remove(&id);
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
