//! Template selection: partition an artwork's templates into the four
//! dispatch batches.
//!
//! The template set is re-loaded from the database on every run — an
//! administrator may have re-assigned templates since the run was queued,
//! so nothing here is cached.

use artproof_core::category::RenderCategory;
use artproof_core::types::DbId;
use artproof_db::models::template::MockupTemplate;
use artproof_db::repositories::TemplateRepo;

/// An artwork's templates split by render category, in dispatch order.
#[derive(Debug, Default)]
pub struct RenderBatches {
    /// Non-model standard product shots, ordered by explicit sort key.
    pub standard: Vec<MockupTemplate>,
    /// Non-model lifestyle mockups, in arrival order.
    pub mockup: Vec<MockupTemplate>,
    /// Model mockups, in arrival order.
    pub model_mockup: Vec<MockupTemplate>,
    /// Marketing renders, in arrival order.
    pub marketing: Vec<MockupTemplate>,
}

impl RenderBatches {
    /// Load the artwork's current template set and partition it.
    pub async fn load(pool: &sqlx::PgPool, artwork_id: DbId) -> Result<Self, sqlx::Error> {
        let templates = TemplateRepo::list_for_artwork(pool, artwork_id).await?;
        Ok(Self::partition(templates))
    }

    /// Partition templates by render category.
    ///
    /// Classification is total (see [`RenderCategory::classify`]), so every
    /// template lands in exactly one batch. The standard batch is sorted by
    /// its explicit sort key (a stable sort, so equal keys keep arrival
    /// order); the other batches keep arrival order as loaded.
    pub fn partition(templates: Vec<MockupTemplate>) -> Self {
        let mut batches = Self::default();
        for template in templates {
            match template.category() {
                RenderCategory::Standard => batches.standard.push(template),
                RenderCategory::Mockup => batches.mockup.push(template),
                RenderCategory::ModelMockup => batches.model_mockup.push(template),
                RenderCategory::Marketing => batches.marketing.push(template),
            }
        }
        batches.standard.sort_by_key(|t| t.sort_order);
        batches
    }

    /// Total number of templates across all four batches.
    pub fn len(&self) -> usize {
        self.standard.len() + self.mockup.len() + self.model_mockup.len() + self.marketing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consume into a single list in dispatch order:
    /// standard, mockup, model mockup, marketing.
    pub fn into_dispatch_order(self) -> Vec<MockupTemplate> {
        let mut ordered = self.standard;
        ordered.extend(self.mockup);
        ordered.extend(self.model_mockup);
        ordered.extend(self.marketing);
        ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(
        id: DbId,
        with_model: bool,
        is_standard: bool,
        for_marketing: bool,
        sort_order: i32,
    ) -> MockupTemplate {
        let now = chrono::Utc::now();
        MockupTemplate {
            id,
            artwork_id: Some(1),
            name: format!("template-{id}"),
            with_model,
            is_standard,
            for_marketing,
            sort_order,
            image_url: format!("https://templates.test/{id}.psd"),
            created_at: now,
            updated_at: now,
        }
    }

    fn ids(templates: &[MockupTemplate]) -> Vec<DbId> {
        templates.iter().map(|t| t.id).collect()
    }

    #[test]
    fn partition_routes_each_category_to_its_batch() {
        let batches = RenderBatches::partition(vec![
            template(1, false, true, false, 1),  // standard
            template(2, false, false, false, 0), // mockup
            template(3, true, false, false, 0),  // model mockup
            template(4, false, false, true, 0),  // marketing
        ]);

        assert_eq!(ids(&batches.standard), vec![1]);
        assert_eq!(ids(&batches.mockup), vec![2]);
        assert_eq!(ids(&batches.model_mockup), vec![3]);
        assert_eq!(ids(&batches.marketing), vec![4]);
    }

    #[test]
    fn standard_batch_sorts_by_sort_key() {
        let batches = RenderBatches::partition(vec![
            template(1, false, true, false, 3),
            template(2, false, true, false, 1),
            template(3, false, true, false, 2),
        ]);

        assert_eq!(ids(&batches.standard), vec![2, 3, 1]);
    }

    #[test]
    fn other_batches_keep_arrival_order() {
        let batches = RenderBatches::partition(vec![
            template(5, false, false, false, 9),
            template(3, false, false, false, 1),
            template(8, true, false, false, 0),
            template(6, true, false, false, 0),
        ]);

        assert_eq!(ids(&batches.mockup), vec![5, 3]);
        assert_eq!(ids(&batches.model_mockup), vec![8, 6]);
    }

    #[test]
    fn marketing_captures_any_flag_combination() {
        let batches = RenderBatches::partition(vec![
            template(1, true, true, true, 0),
            template(2, false, true, true, 0),
            template(3, true, false, true, 0),
        ]);

        assert_eq!(batches.marketing.len(), 3);
        assert!(batches.standard.is_empty());
        assert!(batches.model_mockup.is_empty());
    }

    #[test]
    fn dispatch_order_is_standard_mockup_model_marketing() {
        let batches = RenderBatches::partition(vec![
            template(10, false, false, true, 0),  // marketing
            template(11, true, false, false, 0),  // model mockup
            template(12, false, false, false, 0), // mockup
            template(13, false, true, false, 2),  // standard #2
            template(14, false, true, false, 1),  // standard #1
        ]);

        let ordered = batches.into_dispatch_order();
        assert_eq!(ids(&ordered), vec![14, 13, 12, 11, 10]);
    }

    #[test]
    fn empty_template_set_yields_empty_batches() {
        let batches = RenderBatches::partition(Vec::new());
        assert!(batches.is_empty());
        assert!(batches.into_dispatch_order().is_empty());
    }
}
