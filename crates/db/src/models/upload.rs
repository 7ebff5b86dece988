//! Upload entity model.
//!
//! One table stores both kinds of artwork image: `base_render` rows are the
//! per-size source images artists upload, `preview` rows are the generated
//! display set. Previews are destroyed en masse before each pipeline run
//! and never mutated after creation.

use artproof_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `uploads` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Upload {
    pub id: DbId,
    pub artwork_id: DbId,
    /// `preview` or `base_render` (see `artproof_core::composition`).
    pub upload_type: String,
    /// Display position; set on previews, NULL on base renders.
    pub position: Option<i32>,
    pub for_marketing: bool,
    /// Physical size label; set on base renders, NULL on previews.
    pub size: Option<String>,
    /// Previews flagged here are not forwarded to the secondary
    /// distribution integration (the two synthesized photos).
    pub skip_distribution: bool,
    pub file_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a preview upload row.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPreview {
    pub artwork_id: DbId,
    pub position: i32,
    pub for_marketing: bool,
    pub file_url: String,
    pub skip_distribution: bool,
}
