//! Domain error type shared across the workspace.

use crate::types::DbId;

/// Errors produced by domain-level logic.
///
/// The API layer maps each variant onto an HTTP status; the pipeline and
/// worker layers propagate them with `?`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup failed.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed domain validation.
    #[error("{0}")]
    Validation(String),

    /// An unexpected internal failure.
    #[error("{0}")]
    Internal(String),
}
