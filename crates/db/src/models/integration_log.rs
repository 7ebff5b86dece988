//! Integration log entity model.
//!
//! One entry per composition dispatch attempt against the external
//! rendering service. Entries are the durable record of which templates
//! were dispatched (and with which job handle), which failed before a
//! handle existed, and which the service later reported as failed.

use artproof_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Dispatch was accepted; the job is in flight or not yet polled.
pub const LOG_STATUS_DISPATCHED: &str = "dispatched";

/// The service reported the job complete.
pub const LOG_STATUS_COMPLETED: &str = "completed";

/// Dispatch failed, or the service reported the job failed.
pub const LOG_STATUS_FAILED: &str = "failed";

/// A row from the `integration_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct IntegrationLog {
    pub id: DbId,
    pub artwork_id: DbId,
    pub template_id: Option<DbId>,
    pub render_run_id: Option<DbId>,
    /// Dot-separated integration action, e.g. `photoshop.render_previews`.
    pub action: String,
    /// Job handle returned by the service; NULL when dispatch failed
    /// before submission succeeded.
    pub job_handle: Option<String>,
    pub status: String,
    pub error_message: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
