//! Repository for the `uploads` table.
//!
//! Uploads cover both base renders (per-size source images) and previews
//! (the generated display set). Preview rows are immutable: the pipeline
//! destroys the whole set and recreates it.

use artproof_core::composition::{UPLOAD_TYPE_BASE_RENDER, UPLOAD_TYPE_PREVIEW};
use artproof_core::types::DbId;
use sqlx::PgPool;

use crate::models::upload::{NewPreview, Upload};

/// Column list for `uploads` queries.
const COLUMNS: &str = "id, artwork_id, upload_type, position, for_marketing, \
     size, skip_distribution, file_url, created_at, updated_at";

/// Provides query and mutation operations for artwork uploads.
pub struct UploadRepo;

impl UploadRepo {
    /// Insert a preview row.
    ///
    /// Used by the synthesized-photo appender and by the render-completion
    /// callback once the service has produced a composite.
    pub async fn create_preview(pool: &PgPool, input: &NewPreview) -> Result<Upload, sqlx::Error> {
        let query = format!(
            "INSERT INTO uploads \
                (artwork_id, upload_type, position, for_marketing, skip_distribution, file_url) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Upload>(&query)
            .bind(input.artwork_id)
            .bind(UPLOAD_TYPE_PREVIEW)
            .bind(input.position)
            .bind(input.for_marketing)
            .bind(input.skip_distribution)
            .bind(&input.file_url)
            .fetch_one(pool)
            .await
    }

    /// Insert a base render row for a physical size.
    pub async fn create_base_render(
        pool: &PgPool,
        artwork_id: DbId,
        size: &str,
        file_url: &str,
    ) -> Result<Upload, sqlx::Error> {
        let query = format!(
            "INSERT INTO uploads (artwork_id, upload_type, size, file_url) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Upload>(&query)
            .bind(artwork_id)
            .bind(UPLOAD_TYPE_BASE_RENDER)
            .bind(size)
            .bind(file_url)
            .fetch_one(pool)
            .await
    }

    /// Delete every preview belonging to an artwork.
    ///
    /// Returns the number of rows removed. Order values restart from 1 on
    /// the next run, so a partial delete would corrupt display ordering —
    /// any error here must abort the run.
    pub async fn destroy_previews(pool: &PgPool, artwork_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM uploads WHERE artwork_id = $1 AND upload_type = $2")
            .bind(artwork_id)
            .bind(UPLOAD_TYPE_PREVIEW)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Previews for an artwork in display order (position ascending).
    pub async fn list_previews(
        pool: &PgPool,
        artwork_id: DbId,
    ) -> Result<Vec<Upload>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM uploads \
             WHERE artwork_id = $1 AND upload_type = $2 \
             ORDER BY position ASC, id ASC"
        );
        sqlx::query_as::<_, Upload>(&query)
            .bind(artwork_id)
            .bind(UPLOAD_TYPE_PREVIEW)
            .fetch_all(pool)
            .await
    }

    /// The artwork's base render for a physical size, if uploaded.
    pub async fn find_base_render(
        pool: &PgPool,
        artwork_id: DbId,
        size: &str,
    ) -> Result<Option<Upload>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM uploads \
             WHERE artwork_id = $1 AND upload_type = $2 AND size = $3 \
             ORDER BY id DESC LIMIT 1"
        );
        sqlx::query_as::<_, Upload>(&query)
            .bind(artwork_id)
            .bind(UPLOAD_TYPE_BASE_RENDER)
            .bind(size)
            .fetch_optional(pool)
            .await
    }
}
