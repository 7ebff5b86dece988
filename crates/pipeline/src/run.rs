//! Pipeline orchestrator: one full preview regeneration per call.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use artproof_core::composition::ACTION_RENDER_PREVIEWS;
use artproof_core::photos::{
    sizing_photo_url, PRODUCT_DETAILS_PHOTO_URL, PRODUCT_DETAILS_POSITION, SIZING_PHOTO_POSITION,
};
use artproof_core::shape::TemplateShape;
use artproof_core::types::DbId;
use artproof_db::models::artwork::Artwork;
use artproof_db::models::upload::NewPreview;
use artproof_db::repositories::{ArtworkRepo, IntegrationLogRepo, UploadRepo};
use artproof_events::{EventBus, PlatformEvent};
use artproof_photoshop::{PhotoshopApi, RenderJobHandle};
use sqlx::PgPool;

use crate::client::CompositionClient;
use crate::error::{DispatchError, PipelineError};
use crate::plan::{plan_dispatches, PlannedDispatch};
use crate::selector::RenderBatches;

/// Tuning knobs for a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Submission attempts per template before recording a failure.
    ///
    /// 1 means no automatic retry: a failed dispatch waits for a manual
    /// re-trigger of the whole run. Raising it retries transient
    /// submission errors in place; data errors (missing base render) are
    /// never retried.
    pub max_dispatch_attempts: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_dispatch_attempts: 1,
        }
    }
}

/// Summary of one pipeline run.
#[derive(Debug)]
pub struct RenderOutcome {
    /// Job handles in dispatch order, one per successfully submitted
    /// template.
    pub job_handles: Vec<RenderJobHandle>,
    /// Number of templates whose dispatch failed (recorded in the
    /// integration log, not retried within this run).
    pub failed_dispatches: usize,
}

/// Orchestrates preview regeneration for artworks.
///
/// One instance is shared process-wide; it tracks which artworks have a run
/// executing so the same artwork is never rendered concurrently within this
/// process. (The render-run claim query provides the same guarantee across
/// processes.)
pub struct RenderPreviews {
    pool: PgPool,
    api: Arc<PhotoshopApi>,
    events: Arc<EventBus>,
    config: PipelineConfig,
    /// Artworks with a run in flight in this process.
    in_flight: Mutex<HashSet<DbId>>,
}

impl RenderPreviews {
    /// Create an orchestrator with the default configuration.
    pub fn new(pool: PgPool, api: Arc<PhotoshopApi>, events: Arc<EventBus>) -> Self {
        Self::with_config(pool, api, events, PipelineConfig::default())
    }

    pub fn with_config(
        pool: PgPool,
        api: Arc<PhotoshopApi>,
        events: Arc<EventBus>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            pool,
            api,
            events,
            config,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Execute one full pipeline run for an artwork.
    ///
    /// Sequence: destroy stale previews, dispatch the four template batches
    /// in category order, append the sizing photo (position 7) and the
    /// product-details photo (position 8).
    ///
    /// Per-template dispatch failures are recorded and skipped; the run
    /// keeps going to maximize partial progress. Failures before the first
    /// dispatch (missing artwork, destruction error) abort the run. There
    /// is no rollback — re-running is safe because destruction comes first
    /// and order values restart from 1.
    pub async fn run(
        &self,
        artwork_id: DbId,
        render_run_id: Option<DbId>,
    ) -> Result<RenderOutcome, PipelineError> {
        let _guard = RunGuard::acquire(&self.in_flight, artwork_id)?;

        let artwork = ArtworkRepo::find_by_id(&self.pool, artwork_id)
            .await?
            .ok_or(PipelineError::ArtworkNotFound(artwork_id))?;
        let shape = artwork.template_shape()?;

        self.events.publish(
            PlatformEvent::new("artwork.previews_render_started").with_source("artwork", artwork_id),
        );

        // Stale previews must be gone before any dispatch: order values
        // restart from 1, and a mixed old/new set would interleave wrongly.
        let removed = UploadRepo::destroy_previews(&self.pool, artwork_id).await?;
        tracing::debug!(artwork_id, removed, "Stale previews destroyed");

        // Re-load the template assignment fresh; it may have changed while
        // the run sat in the queue.
        let batches = RenderBatches::load(&self.pool, artwork_id).await?;
        let planned = plan_dispatches(batches);

        let client = CompositionClient::new(&self.pool, &self.api);
        let mut job_handles = Vec::with_capacity(planned.len());
        let mut failed_dispatches = 0;

        for dispatch in &planned {
            match self
                .dispatch_with_retry(&client, &artwork, shape, render_run_id, dispatch)
                .await
            {
                Ok(handle) => job_handles.push(handle),
                Err(e) => {
                    failed_dispatches += 1;
                    tracing::warn!(
                        artwork_id,
                        template_id = dispatch.template.id,
                        error = %e,
                        "Template dispatch failed; continuing with remaining templates",
                    );
                    if let Err(log_err) = IntegrationLogRepo::record_failed(
                        &self.pool,
                        artwork_id,
                        Some(dispatch.template.id),
                        render_run_id,
                        ACTION_RENDER_PREVIEWS,
                        &e.to_string(),
                    )
                    .await
                    {
                        tracing::error!(
                            artwork_id,
                            template_id = dispatch.template.id,
                            error = %log_err,
                            "Failed to record dispatch failure",
                        );
                    }
                }
            }
        }

        self.append_sizing_photo(&artwork, shape).await?;
        self.append_product_details_photo(&artwork).await?;

        tracing::info!(
            artwork_id,
            dispatched = job_handles.len(),
            failed = failed_dispatches,
            "Preview render run finished",
        );

        self.events.publish(
            PlatformEvent::new("artwork.previews_rendered")
                .with_source("artwork", artwork_id)
                .with_payload(serde_json::json!({
                    "dispatched": job_handles.len(),
                    "failed": failed_dispatches,
                })),
        );

        Ok(RenderOutcome {
            job_handles,
            failed_dispatches,
        })
    }

    /// Dispatch one template, retrying transient submission errors up to
    /// the configured attempt budget. Data errors fail immediately.
    async fn dispatch_with_retry(
        &self,
        client: &CompositionClient<'_>,
        artwork: &Artwork,
        shape: TemplateShape,
        render_run_id: Option<DbId>,
        planned: &PlannedDispatch,
    ) -> Result<RenderJobHandle, DispatchError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match client.dispatch(artwork, shape, render_run_id, planned).await {
                Ok(handle) => return Ok(handle),
                Err(e) if !e.is_retryable() => return Err(e),
                Err(e) if attempt >= self.config.max_dispatch_attempts => return Err(e),
                Err(e) => {
                    tracing::warn!(
                        artwork_id = artwork.id,
                        template_id = planned.template.id,
                        attempt,
                        error = %e,
                        "Dispatch attempt failed; retrying",
                    );
                }
            }
        }
    }

    /// Append the shape-matched sizing photo at its fixed position.
    ///
    /// Bypasses the order counters and the secondary distribution
    /// integration.
    async fn append_sizing_photo(
        &self,
        artwork: &Artwork,
        shape: TemplateShape,
    ) -> Result<(), PipelineError> {
        let preview = NewPreview {
            artwork_id: artwork.id,
            position: SIZING_PHOTO_POSITION,
            for_marketing: false,
            file_url: sizing_photo_url(shape).to_string(),
            skip_distribution: true,
        };
        UploadRepo::create_preview(&self.pool, &preview).await?;
        Ok(())
    }

    /// Append the static product-details photo at its fixed position.
    async fn append_product_details_photo(&self, artwork: &Artwork) -> Result<(), PipelineError> {
        let preview = NewPreview {
            artwork_id: artwork.id,
            position: PRODUCT_DETAILS_POSITION,
            for_marketing: false,
            file_url: PRODUCT_DETAILS_PHOTO_URL.to_string(),
            skip_distribution: true,
        };
        UploadRepo::create_preview(&self.pool, &preview).await?;
        Ok(())
    }
}

/// Marks an artwork as in flight for the lifetime of one run.
///
/// Removes the artwork from the set on drop, including on early returns
/// and panics inside the run.
struct RunGuard<'a> {
    set: &'a Mutex<HashSet<DbId>>,
    artwork_id: DbId,
}

impl<'a> RunGuard<'a> {
    fn acquire(set: &'a Mutex<HashSet<DbId>>, artwork_id: DbId) -> Result<Self, PipelineError> {
        let mut in_flight = set.lock().unwrap_or_else(|e| e.into_inner());
        if !in_flight.insert(artwork_id) {
            return Err(PipelineError::RunInFlight(artwork_id));
        }
        Ok(Self { set, artwork_id })
    }
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        let mut in_flight = self.set.lock().unwrap_or_else(|e| e.into_inner());
        in_flight.remove(&self.artwork_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_does_not_auto_retry() {
        assert_eq!(PipelineConfig::default().max_dispatch_attempts, 1);
    }

    #[test]
    fn run_guard_rejects_second_acquisition() {
        let set = Mutex::new(HashSet::new());

        let first = RunGuard::acquire(&set, 7).expect("first acquisition succeeds");
        let second = RunGuard::acquire(&set, 7);
        assert!(matches!(second, Err(PipelineError::RunInFlight(7))));

        // Other artworks are unaffected.
        let other = RunGuard::acquire(&set, 8);
        assert!(other.is_ok());

        drop(first);
        assert!(RunGuard::acquire(&set, 7).is_ok());
    }
}
