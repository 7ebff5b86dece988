//! Render run entity model.
//!
//! A render run is the background-execution envelope around one pipeline
//! invocation: the API queues a row, the worker claims it, and the outcome
//! (completed or failed) is recorded for operator follow-up. Re-triggering
//! after a failure simply queues a new run.

use artproof_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use super::status::StatusId;

/// A row from the `render_runs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RenderRun {
    pub id: DbId,
    pub artwork_id: DbId,
    pub status_id: StatusId,
    pub error_message: Option<String>,
    pub claimed_at: Option<Timestamp>,
    pub started_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
