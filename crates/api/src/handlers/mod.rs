//! Request handlers.
//!
//! Handlers decode the request, delegate to [`TaskService`](crate::services::TaskService)
//! and map errors via [`AppError`](crate::error::AppError).

pub mod task;
