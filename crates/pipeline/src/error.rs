//! Pipeline error taxonomy.
//!
//! Run-level errors ([`PipelineError`]) abort a run before any dispatch.
//! Per-template errors ([`DispatchError`]) are recorded in the integration
//! log and skipped so sibling templates keep rendering.

use artproof_core::error::CoreError;
use artproof_core::types::DbId;
use artproof_photoshop::PhotoshopApiError;

/// Fatal, run-level failures.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The artwork to render does not exist.
    #[error("Artwork {0} not found")]
    ArtworkNotFound(DbId),

    /// Another run for the same artwork is already executing in this
    /// process.
    #[error("A preview render for artwork {0} is already in flight")]
    RunInFlight(DbId),

    /// A domain-level failure (e.g. an unparseable stored shape).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A status poll against the rendering service failed.
    #[error("Status poll failed: {0}")]
    Poll(#[from] PhotoshopApiError),

    /// A database operation failed. Includes preview destruction, which
    /// must abort the run before any dispatch.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Per-template dispatch failures. Never abort the run.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// No base render uploaded for the size the artwork's shape requires.
    /// A data error: retrying cannot succeed until the upload exists.
    #[error("Artwork {artwork_id} has no '{size}' base render")]
    MissingBaseRender { artwork_id: DbId, size: &'static str },

    /// The rendering service rejected or failed the submission call.
    #[error("Submission failed: {0}")]
    Submit(#[from] PhotoshopApiError),

    /// A database operation failed while resolving inputs or recording
    /// the dispatch.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl DispatchError {
    /// Whether a retry of the same dispatch could succeed.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::MissingBaseRender { .. })
    }
}
