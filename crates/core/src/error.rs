use crate::types::DbId;

/// Domain error shared by the store implementations and the service layer.
///
/// Each variant corresponds to one bucket of the HTTP error taxonomy; the
/// API crate owns the actual status-code mapping.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A specific record addressed by id does not exist.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A query or page produced an empty result set.
    #[error("No results: {0}")]
    NoResults(String),

    /// The request is malformed or missing required parts.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The request is well-formed but semantically invalid.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The backing store failed unexpectedly.
    #[error("Storage error: {0}")]
    Storage(String),
}
