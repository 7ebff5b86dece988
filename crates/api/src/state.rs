use std::sync::Arc;

use artproof_events::EventBus;
use artproof_photoshop::PhotoshopApi;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable: inner data is behind `Arc` or is already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: artproof_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Rendering-service client, used by the status-aggregation route.
    pub photoshop: Arc<PhotoshopApi>,
    /// Centralized event bus for publishing platform events.
    pub event_bus: Arc<EventBus>,
}
