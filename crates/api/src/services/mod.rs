//! Service layer sitting between HTTP handlers and the task store.

pub mod task;

pub use task::{TaskService, TaskServiceError, TaskServiceResult};
