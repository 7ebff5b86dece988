//! Handlers for the `/uploads` resource.
//!
//! The rendering service delivers finished composites out of band: once a
//! job completes, it POSTs the result location here together with the
//! metadata supplied at dispatch time, and the preview record is created
//! with exactly that metadata.

use artproof_db::models::upload::NewPreview;
use artproof_db::repositories::{IntegrationLogRepo, UploadRepo};
use artproof_events::PlatformEvent;
use artproof_photoshop::CompositionTarget;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Payload delivered by the rendering service when a composite is ready.
#[derive(Debug, Deserialize)]
pub struct RenderCallback {
    /// Handle of the job that produced the image.
    pub job_handle: String,
    /// Location of the finished composite.
    pub file_url: String,
    /// Metadata echoed back from the original submission.
    pub target: CompositionTarget,
}

/// POST /api/v1/uploads/render-callback
///
/// Create the preview record for a finished composite and mark the
/// integration-log entry completed.
pub async fn render_callback(
    State(state): State<AppState>,
    Json(payload): Json<RenderCallback>,
) -> AppResult<impl IntoResponse> {
    let preview = UploadRepo::create_preview(
        &state.pool,
        &NewPreview {
            artwork_id: payload.target.artwork_id,
            position: payload.target.position,
            for_marketing: payload.target.for_marketing,
            file_url: payload.file_url,
            skip_distribution: false,
        },
    )
    .await?;

    IntegrationLogRepo::mark_completed(&state.pool, &payload.job_handle).await?;

    state.event_bus.publish(
        PlatformEvent::new("artwork.preview_created")
            .with_source("artwork", payload.target.artwork_id)
            .with_payload(serde_json::json!({
                "job_handle": payload.job_handle,
                "position": payload.target.position,
            })),
    );

    tracing::info!(
        artwork_id = payload.target.artwork_id,
        job_handle = %payload.job_handle,
        position = payload.target.position,
        "Preview created from render callback",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: preview })))
}
