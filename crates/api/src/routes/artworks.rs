//! Route definitions for the `/artworks/{id}/previews` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::artworks;
use crate::state::AppState;

/// Routes mounted at `/artworks`.
///
/// ```text
/// POST   /{id}/previews/render     -> queue_render
/// GET    /{id}/previews            -> list_previews
/// GET    /{id}/previews/jobs       -> job_statuses
/// GET    /{id}/previews/failures   -> failed_templates
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}/previews/render", post(artworks::queue_render))
        .route("/{id}/previews", get(artworks::list_previews))
        .route("/{id}/previews/jobs", get(artworks::job_statuses))
        .route("/{id}/previews/failures", get(artworks::failed_templates))
}
