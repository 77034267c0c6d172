use crate::types::DbId;

/// Domain-level error type shared across crates.
///
/// The API layer decides how each variant maps to an HTTP status; this enum
/// only describes what went wrong in domain terms.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
