pub mod artworks;
pub mod health;
pub mod uploads;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /artworks/{id}/previews/render     queue a preview render run (POST)
/// /artworks/{id}/previews            previews in display order (GET)
/// /artworks/{id}/previews/jobs       rendering job statuses (GET)
/// /artworks/{id}/previews/failures   template ids that failed to render (GET)
///
/// /uploads/render-callback           rendering-service completion callback (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/artworks", artworks::router())
        .nest("/uploads", uploads::router())
}
