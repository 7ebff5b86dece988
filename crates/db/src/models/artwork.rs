//! Artwork entity model.

use artproof_core::error::CoreError;
use artproof_core::shape::TemplateShape;
use artproof_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `artworks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Artwork {
    pub id: DbId,
    pub name: String,
    /// Template-shape classifier, stored as text
    /// (`vertical` / `horizontal` / `tall` / `square` / `wide`).
    pub shape: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Artwork {
    /// Parse the stored shape into its typed form.
    ///
    /// The column carries a CHECK constraint, so this only fails on rows
    /// written outside the application.
    pub fn template_shape(&self) -> Result<TemplateShape, CoreError> {
        TemplateShape::parse(&self.shape)
    }
}

/// DTO for creating a new artwork.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateArtwork {
    pub name: String,
    pub shape: String,
}
