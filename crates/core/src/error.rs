use crate::types::DbId;

/// Domain-level failures shared by the service and HTTP layers.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found with id: {id}")]
    NotFound { entity: &'static str, id: DbId },
}
