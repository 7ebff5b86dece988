//! Background render-run dispatcher.
//!
//! Polls for queued render runs and executes the preview pipeline for
//! each. The claim query guarantees at most one executing run per artwork
//! across all worker instances, so a re-trigger waits for the in-flight
//! run instead of racing its preview destruction.

use std::sync::Arc;
use std::time::Duration;

use artproof_db::repositories::RenderRunRepo;
use artproof_pipeline::RenderPreviews;
use sqlx::PgPool;
use tokio_util::sync::CancellationToken;

/// Default polling interval for the dispatcher loop.
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Long-lived task that claims queued render runs and executes them.
pub struct RunDispatcher {
    pool: PgPool,
    renderer: Arc<RenderPreviews>,
    poll_interval: Duration,
}

impl RunDispatcher {
    /// Create a dispatcher with the default poll interval.
    pub fn new(pool: PgPool, renderer: Arc<RenderPreviews>) -> Self {
        Self {
            pool,
            renderer,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Run the dispatcher loop until the cancellation token is triggered.
    pub async fn run(&self, cancel: CancellationToken) {
        let mut ticker = tokio::time::interval(self.poll_interval);
        tracing::info!(
            poll_interval_ms = self.poll_interval.as_millis() as u64,
            "Render-run dispatcher started",
        );

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Render-run dispatcher shutting down");
                    break;
                }
                _ = ticker.tick() => {
                    if let Err(e) = self.try_dispatch().await {
                        tracing::error!(error = %e, "Dispatch cycle failed");
                    }
                }
            }
        }
    }

    /// One cycle: claim and execute queued runs until none are claimable.
    ///
    /// A run failure marks the row failed and moves on; re-triggering
    /// queues a fresh run, which is safe because the pipeline starts by
    /// destroying previews.
    async fn try_dispatch(&self) -> Result<(), sqlx::Error> {
        while let Some(run) = RenderRunRepo::claim_next(&self.pool).await? {
            tracing::info!(run_id = run.id, artwork_id = run.artwork_id, "Render run claimed");

            match self.renderer.run(run.artwork_id, Some(run.id)).await {
                Ok(outcome) => {
                    tracing::info!(
                        run_id = run.id,
                        artwork_id = run.artwork_id,
                        dispatched = outcome.job_handles.len(),
                        failed = outcome.failed_dispatches,
                        "Render run completed",
                    );
                    RenderRunRepo::complete(&self.pool, run.id).await?;
                }
                Err(e) => {
                    tracing::error!(
                        run_id = run.id,
                        artwork_id = run.artwork_id,
                        error = %e,
                        "Render run failed",
                    );
                    RenderRunRepo::fail(&self.pool, run.id, &e.to_string()).await?;
                }
            }
        }
        Ok(())
    }
}
