//! Task entity model and transfer object.

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use taskmanager_core::types::{DbId, Timestamp};

/// A task row from the `tasks` table.
///
/// `id`, `created_at` and `updated_at` are `None` only before the first
/// successful [`TaskStore::save`](crate::repositories::TaskStore::save);
/// the store assigns all three.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Task {
    pub id: Option<DbId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

impl Task {
    /// Build an unsaved entity from a transfer object.
    ///
    /// Any caller-supplied `id` or timestamps are dropped.
    pub fn from_dto(dto: TaskDto) -> Self {
        Self {
            id: None,
            title: dto.title,
            description: dto.description,
            completed: dto.completed,
            created_at: None,
            updated_at: None,
        }
    }

    /// Overwrite the mutable fields with those of `dto`.
    ///
    /// This is a full replacement: an absent `title` or `description` in the
    /// transfer object clears the stored value.
    pub fn apply_dto(&mut self, dto: TaskDto) {
        self.title = dto.title;
        self.description = dto.description;
        self.completed = dto.completed;
    }
}

/// Wire representation of a task exchanged with HTTP clients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    pub id: Option<DbId>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub completed: bool,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<Task> for TaskDto {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            completed: task.completed,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}
