//! Repository for the `artworks` table.

use artproof_core::types::DbId;
use sqlx::PgPool;

use crate::models::artwork::{Artwork, CreateArtwork};

/// Column list for `artworks` queries.
const COLUMNS: &str = "id, name, shape, created_at, updated_at";

/// Provides CRUD operations for artworks.
pub struct ArtworkRepo;

impl ArtworkRepo {
    /// Insert a new artwork, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateArtwork) -> Result<Artwork, sqlx::Error> {
        let query = format!(
            "INSERT INTO artworks (name, shape) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artwork>(&query)
            .bind(&input.name)
            .bind(&input.shape)
            .fetch_one(pool)
            .await
    }

    /// Find an artwork by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Artwork>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artworks WHERE id = $1");
        sqlx::query_as::<_, Artwork>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
