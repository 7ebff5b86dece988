//! Repository for the `mockup_templates` table.

use artproof_core::types::DbId;
use sqlx::PgPool;

use crate::models::template::{CreateMockupTemplate, MockupTemplate};

/// Column list for `mockup_templates` queries.
const COLUMNS: &str = "id, artwork_id, name, with_model, is_standard, for_marketing, \
     sort_order, image_url, created_at, updated_at";

/// Provides CRUD operations for mockup templates.
pub struct TemplateRepo;

impl TemplateRepo {
    /// Insert a new template, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMockupTemplate,
    ) -> Result<MockupTemplate, sqlx::Error> {
        let query = format!(
            "INSERT INTO mockup_templates \
                (artwork_id, name, with_model, is_standard, for_marketing, sort_order, image_url) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 0), $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MockupTemplate>(&query)
            .bind(input.artwork_id)
            .bind(&input.name)
            .bind(input.with_model)
            .bind(input.is_standard)
            .bind(input.for_marketing)
            .bind(input.sort_order)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find a template by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MockupTemplate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mockup_templates WHERE id = $1");
        sqlx::query_as::<_, MockupTemplate>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All templates currently assigned to an artwork, in arrival order.
    ///
    /// Callers must not cache the result across a pipeline run boundary:
    /// administrators can re-assign templates while a run is queued.
    pub async fn list_for_artwork(
        pool: &PgPool,
        artwork_id: DbId,
    ) -> Result<Vec<MockupTemplate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM mockup_templates \
             WHERE artwork_id = $1 \
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, MockupTemplate>(&query)
            .bind(artwork_id)
            .fetch_all(pool)
            .await
    }
}
