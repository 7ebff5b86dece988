//! Repository for the `integration_logs` table.

use artproof_core::types::DbId;
use sqlx::PgPool;

use crate::models::integration_log::{
    IntegrationLog, LOG_STATUS_COMPLETED, LOG_STATUS_DISPATCHED, LOG_STATUS_FAILED,
};

/// Column list for `integration_logs` queries.
const COLUMNS: &str = "id, artwork_id, template_id, render_run_id, action, \
     job_handle, status, error_message, created_at, updated_at";

/// Provides operations for external-integration audit entries.
pub struct IntegrationLogRepo;

impl IntegrationLogRepo {
    /// Record a dispatch accepted by the external service.
    ///
    /// The job handle is persisted so status lookup survives a process
    /// restart.
    pub async fn record_dispatched(
        pool: &PgPool,
        artwork_id: DbId,
        template_id: Option<DbId>,
        render_run_id: Option<DbId>,
        action: &str,
        job_handle: &str,
    ) -> Result<IntegrationLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO integration_logs \
                (artwork_id, template_id, render_run_id, action, job_handle, status) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, IntegrationLog>(&query)
            .bind(artwork_id)
            .bind(template_id)
            .bind(render_run_id)
            .bind(action)
            .bind(job_handle)
            .bind(LOG_STATUS_DISPATCHED)
            .fetch_one(pool)
            .await
    }

    /// Record a dispatch that failed before the service issued a handle
    /// (input-resolution failure or submission error).
    pub async fn record_failed(
        pool: &PgPool,
        artwork_id: DbId,
        template_id: Option<DbId>,
        render_run_id: Option<DbId>,
        action: &str,
        error: &str,
    ) -> Result<IntegrationLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO integration_logs \
                (artwork_id, template_id, render_run_id, action, status, error_message) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, IntegrationLog>(&query)
            .bind(artwork_id)
            .bind(template_id)
            .bind(render_run_id)
            .bind(action)
            .bind(LOG_STATUS_FAILED)
            .bind(error)
            .fetch_one(pool)
            .await
    }

    /// Mark the entry for a job handle completed.
    pub async fn mark_completed(pool: &PgPool, job_handle: &str) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE integration_logs SET status = $2 WHERE job_handle = $1")
            .bind(job_handle)
            .bind(LOG_STATUS_COMPLETED)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Mark the entry for a job handle failed with an error message.
    pub async fn mark_failed(
        pool: &PgPool,
        job_handle: &str,
        error: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE integration_logs SET status = $2, error_message = $3 WHERE job_handle = $1",
        )
        .bind(job_handle)
        .bind(LOG_STATUS_FAILED)
        .bind(error)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Job handles collected during one render run, in dispatch order.
    ///
    /// Entries without a handle (failed dispatches) are excluded.
    pub async fn handles_for_run(
        pool: &PgPool,
        render_run_id: DbId,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT job_handle FROM integration_logs \
             WHERE render_run_id = $1 AND job_handle IS NOT NULL \
             ORDER BY id ASC",
        )
        .bind(render_run_id)
        .fetch_all(pool)
        .await
    }

    /// Template ids whose dispatch or render failed for an artwork.
    ///
    /// Drives operator follow-up: these templates produced no preview on
    /// the most recent runs.
    pub async fn failed_template_ids(
        pool: &PgPool,
        artwork_id: DbId,
        action: &str,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT DISTINCT template_id FROM integration_logs \
             WHERE artwork_id = $1 AND action = $2 AND status = $3 \
               AND template_id IS NOT NULL",
        )
        .bind(artwork_id)
        .bind(action)
        .bind(LOG_STATUS_FAILED)
        .fetch_all(pool)
        .await
    }
}
