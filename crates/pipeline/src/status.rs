//! Pull-based status aggregation over a run's collected job handles.
//!
//! The poller holds no state and sets no cadence: callers (an HTTP
//! handler, an operator script, a scheduled task) decide when and how often
//! to poll. Terminal states are written back onto the integration-log
//! entry so failure auditing works without re-polling.

use artproof_core::types::DbId;
use artproof_db::repositories::{IntegrationLogRepo, RenderRunRepo};
use artproof_photoshop::{JobStatusReport, PhotoshopApi, RenderJobHandle, RenderJobStatus};
use futures::future::try_join_all;
use sqlx::PgPool;

use crate::error::PipelineError;

/// Poll the rendering service for every job dispatched by the artwork's
/// most recent render run.
///
/// Returns one report per dispatched job, in dispatch order. An artwork
/// with no runs, or a run with zero dispatched jobs, yields an empty list —
/// never an error.
pub async fn job_statuses(
    pool: &PgPool,
    api: &PhotoshopApi,
    artwork_id: DbId,
) -> Result<Vec<JobStatusReport>, PipelineError> {
    let Some(run) = RenderRunRepo::find_latest_for_artwork(pool, artwork_id).await? else {
        return Ok(Vec::new());
    };
    let handles = IntegrationLogRepo::handles_for_run(pool, run.id).await?;
    poll_handles(pool, api, handles).await
}

/// Poll each handle concurrently, preserving input order in the result.
///
/// Jobs that report a terminal state have their integration-log entry
/// updated as a side effect.
pub async fn poll_handles(
    pool: &PgPool,
    api: &PhotoshopApi,
    handles: Vec<String>,
) -> Result<Vec<JobStatusReport>, PipelineError> {
    let polls = handles.into_iter().map(|handle| async move {
        let handle = RenderJobHandle::new(handle);
        let status = api.job_status(&handle).await?;

        match status {
            RenderJobStatus::Complete => {
                IntegrationLogRepo::mark_completed(pool, handle.as_str()).await?;
            }
            RenderJobStatus::Failed => {
                IntegrationLogRepo::mark_failed(
                    pool,
                    handle.as_str(),
                    "Job reported failed by the rendering service",
                )
                .await?;
            }
            RenderJobStatus::Pending => {}
        }

        Ok::<JobStatusReport, PipelineError>(JobStatusReport {
            job_handle: handle,
            status,
        })
    });

    try_join_all(polls).await
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Zero dispatched jobs must produce an empty report list without
    /// touching the database or the service.
    #[tokio::test]
    async fn polling_zero_handles_returns_empty_list() {
        let pool = PgPool::connect_lazy("postgres://localhost/unused")
            .expect("lazy pool construction is offline");
        let api = PhotoshopApi::new("http://127.0.0.1:9".into(), String::new());

        let reports = poll_handles(&pool, &api, Vec::new())
            .await
            .expect("no polls, no errors");
        assert!(reports.is_empty());
    }
}
