//! Mockup template entity model.

use artproof_core::category::RenderCategory;
use artproof_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `mockup_templates` table.
///
/// A template belongs to at most one artwork at a time; administrators can
/// re-assign templates while renders are queued, which is why the pipeline
/// always re-reads the assignment set.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MockupTemplate {
    pub id: DbId,
    pub artwork_id: Option<DbId>,
    pub name: String,
    pub with_model: bool,
    pub is_standard: bool,
    pub for_marketing: bool,
    /// Explicit sort key; only meaningful within the standard batch.
    pub sort_order: i32,
    pub image_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl MockupTemplate {
    /// Dispatch category derived from the template's flags.
    pub fn category(&self) -> RenderCategory {
        RenderCategory::classify(self.with_model, self.is_standard, self.for_marketing)
    }
}

/// DTO for registering a new template.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMockupTemplate {
    pub artwork_id: Option<DbId>,
    pub name: String,
    pub with_model: bool,
    pub is_standard: bool,
    pub for_marketing: bool,
    pub sort_order: Option<i32>,
    pub image_url: String,
}
