//! Handlers for the `/artworks/{id}/previews` resource.

use artproof_core::composition::ACTION_RENDER_PREVIEWS;
use artproof_core::error::CoreError;
use artproof_core::types::DbId;
use artproof_db::repositories::{ArtworkRepo, IntegrationLogRepo, RenderRunRepo, UploadRepo};
use artproof_events::PlatformEvent;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Fetch an artwork or return 404.
async fn find_artwork(
    pool: &sqlx::PgPool,
    artwork_id: DbId,
) -> AppResult<artproof_db::models::artwork::Artwork> {
    ArtworkRepo::find_by_id(pool, artwork_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Artwork",
            id: artwork_id,
        }))
}

/// POST /api/v1/artworks/{id}/previews/render
///
/// Queue a preview render run for the artwork. Returns 202 with the queued
/// run; the worker claims it and executes the pipeline asynchronously.
/// Queuing while another run is in flight is allowed — the claim query
/// holds the new run back until the in-flight one finishes.
pub async fn queue_render(
    State(state): State<AppState>,
    Path(artwork_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let artwork = find_artwork(&state.pool, artwork_id).await?;

    let run = RenderRunRepo::enqueue(&state.pool, artwork.id).await?;

    state.event_bus.publish(
        PlatformEvent::new("artwork.render_run_queued").with_source("artwork", artwork.id),
    );

    tracing::info!(artwork_id, run_id = run.id, "Render run queued");

    Ok((StatusCode::ACCEPTED, Json(DataResponse { data: run })))
}

/// GET /api/v1/artworks/{id}/previews
///
/// The artwork's previews in display order (position ascending).
pub async fn list_previews(
    State(state): State<AppState>,
    Path(artwork_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    find_artwork(&state.pool, artwork_id).await?;

    let previews = UploadRepo::list_previews(&state.pool, artwork_id).await?;
    Ok(Json(DataResponse { data: previews }))
}

/// GET /api/v1/artworks/{id}/previews/jobs
///
/// Poll the rendering service for every job dispatched by the artwork's
/// most recent render run. An artwork with no dispatched jobs yields an
/// empty list.
pub async fn job_statuses(
    State(state): State<AppState>,
    Path(artwork_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    find_artwork(&state.pool, artwork_id).await?;

    let reports =
        artproof_pipeline::status::job_statuses(&state.pool, &state.photoshop, artwork_id).await?;
    Ok(Json(DataResponse { data: reports }))
}

/// GET /api/v1/artworks/{id}/previews/failures
///
/// Template ids whose dispatch or render failed, for operator follow-up.
pub async fn failed_templates(
    State(state): State<AppState>,
    Path(artwork_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    find_artwork(&state.pool, artwork_id).await?;

    let template_ids =
        IntegrationLogRepo::failed_template_ids(&state.pool, artwork_id, ACTION_RENDER_PREVIEWS)
            .await?;
    Ok(Json(DataResponse { data: template_ids }))
}
