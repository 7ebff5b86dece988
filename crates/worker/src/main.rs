mod dispatcher;

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use artproof_events::EventBus;
use artproof_photoshop::{PhotoshopApi, PhotoshopConfig};
use artproof_pipeline::RenderPreviews;

use dispatcher::RunDispatcher;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "artproof_worker=debug,artproof_pipeline=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = artproof_db::create_pool(&database_url).await?;
    artproof_db::health_check(&pool).await?;
    tracing::info!("Database connection pool created");

    let photoshop_config = PhotoshopConfig::from_env();
    tracing::info!(api_url = %photoshop_config.api_url, "Rendering service configured");
    let photoshop = Arc::new(PhotoshopApi::from_config(&photoshop_config));

    let events = Arc::new(EventBus::default());
    let renderer = Arc::new(RenderPreviews::new(pool.clone(), photoshop, events));

    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        signal_cancel.cancel();
    });

    let dispatcher = RunDispatcher::new(pool, renderer);
    dispatcher.run(cancel).await;

    tracing::info!("Worker stopped");
    Ok(())
}

/// Wait for a termination signal (SIGINT or SIGTERM on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
