pub mod health;
pub mod task;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /tasks                                           list, create
/// /tasks/{id}                                      get, update, delete
/// /tasks/complete/{id}                             mark completed (PATCH)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/tasks", task::router())
}
