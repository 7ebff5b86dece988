//! Repository for the `render_runs` table.
//!
//! Uses `RenderRunStatus` for all status transitions. The claim query is
//! the single-run-in-flight guard: no artwork may have two runs executing
//! concurrently, or interleaved preview destruction and dispatch would
//! corrupt the order sequence.

use artproof_core::types::DbId;
use sqlx::PgPool;

use crate::models::render_run::RenderRun;
use crate::models::status::RenderRunStatus;

/// Column list for `render_runs` queries.
const COLUMNS: &str = "id, artwork_id, status_id, error_message, \
     claimed_at, started_at, completed_at, created_at, updated_at";

/// Provides queue operations for background render runs.
pub struct RenderRunRepo;

impl RenderRunRepo {
    /// Queue a new render run for an artwork. Returns immediately with the
    /// queued row; a worker picks it up asynchronously.
    pub async fn enqueue(pool: &PgPool, artwork_id: DbId) -> Result<RenderRun, sqlx::Error> {
        let query = format!(
            "INSERT INTO render_runs (artwork_id, status_id) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RenderRun>(&query)
            .bind(artwork_id)
            .bind(RenderRunStatus::Queued.id())
            .fetch_one(pool)
            .await
    }

    /// Atomically claim the oldest queued run whose artwork has no run
    /// already executing.
    ///
    /// Uses `SELECT FOR UPDATE SKIP LOCKED` so multiple worker instances
    /// never double-claim, and a `NOT EXISTS` sub-query so a re-trigger
    /// waits for the in-flight run instead of racing it.
    pub async fn claim_next(pool: &PgPool) -> Result<Option<RenderRun>, sqlx::Error> {
        let query = format!(
            "UPDATE render_runs \
             SET status_id = $1, claimed_at = NOW(), started_at = NOW() \
             WHERE id = ( \
                 SELECT r.id FROM render_runs r \
                 WHERE r.status_id = $2 \
                   AND NOT EXISTS ( \
                       SELECT 1 FROM render_runs running \
                       WHERE running.artwork_id = r.artwork_id \
                         AND running.status_id = $1 \
                   ) \
                 ORDER BY r.created_at ASC \
                 LIMIT 1 \
                 FOR UPDATE SKIP LOCKED \
             ) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RenderRun>(&query)
            .bind(RenderRunStatus::Running.id())
            .bind(RenderRunStatus::Queued.id())
            .fetch_optional(pool)
            .await
    }

    /// Mark a run completed.
    pub async fn complete(pool: &PgPool, run_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE render_runs SET status_id = $2, completed_at = NOW() WHERE id = $1",
        )
        .bind(run_id)
        .bind(RenderRunStatus::Completed.id())
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Mark a run failed with an error message.
    ///
    /// No automatic retry: the run stays failed until an operator queues a
    /// new one, which is safe because the pipeline destroys previews first.
    pub async fn fail(pool: &PgPool, run_id: DbId, error: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE render_runs \
             SET status_id = $2, error_message = $3, completed_at = NOW() \
             WHERE id = $1",
        )
        .bind(run_id)
        .bind(RenderRunStatus::Failed.id())
        .bind(error)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// The most recent run for an artwork, if any.
    pub async fn find_latest_for_artwork(
        pool: &PgPool,
        artwork_id: DbId,
    ) -> Result<Option<RenderRun>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM render_runs \
             WHERE artwork_id = $1 \
             ORDER BY id DESC LIMIT 1"
        );
        sqlx::query_as::<_, RenderRun>(&query)
            .bind(artwork_id)
            .fetch_optional(pool)
            .await
    }
}
