//! Dispatch planning: flatten the batches and assign preview order values.
//!
//! Planning is pure — it consumes the partitioned batches and the two
//! order counters and produces the exact dispatch list, so the ordering
//! contract is testable without touching the database or the rendering
//! service.

use artproof_core::order::OrderCounters;
use artproof_db::models::template::MockupTemplate;

use crate::selector::RenderBatches;

/// One planned composition dispatch.
#[derive(Debug)]
pub struct PlannedDispatch {
    pub template: MockupTemplate,
    /// Preview display position drawn from the matching order counter.
    pub position: i32,
}

/// Flatten the batches into dispatch order and assign order values.
///
/// Templates rendered with a model draw positions from one counter,
/// templates without a model from the other; both counters persist across
/// all four batches, so each partition's positions form a contiguous
/// 1..=N sequence in dispatch order regardless of interleaving.
pub fn plan_dispatches(batches: RenderBatches) -> Vec<PlannedDispatch> {
    let mut counters = OrderCounters::new();
    batches
        .into_dispatch_order()
        .into_iter()
        .map(|template| {
            let position = counters.assign(template.with_model);
            PlannedDispatch { template, position }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use artproof_core::types::DbId;

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

    fn plan(templates: Vec<MockupTemplate>) -> Vec<PlannedDispatch> {
        plan_dispatches(RenderBatches::partition(templates))
    }

    #[test]
    fn two_standard_one_mockup_one_model_scenario() {
        // 2 standard (sort keys 1, 2), 1 mockup, 1 model mockup.
        let planned = plan(vec![
            template(20, true, false, false, 0),  // model mockup
            template(21, false, false, false, 0), // mockup
            template(22, false, true, false, 2),  // standard, key 2
            template(23, false, true, false, 1),  // standard, key 1
        ]);

        let order: Vec<(DbId, i32)> = planned.iter().map(|p| (p.template.id, p.position)).collect();
        assert_eq!(order, vec![(23, 1), (22, 2), (21, 3), (20, 1)]);
    }

    #[test]
    fn model_positions_are_contiguous_regardless_of_interleaving() {
        let planned = plan(vec![
            template(1, false, true, false, 1),
            template(2, false, false, false, 0),
            template(3, true, false, false, 0),
            template(4, true, false, false, 0),
            template(5, true, false, true, 0),  // marketing, with model
            template(6, false, false, true, 0), // marketing, no model
        ]);

        let model_positions: Vec<i32> = planned
            .iter()
            .filter(|p| p.template.with_model)
            .map(|p| p.position)
            .collect();
        assert_eq!(model_positions, vec![1, 2, 3]);

        let non_model_positions: Vec<i32> = planned
            .iter()
            .filter(|p| !p.template.with_model)
            .map(|p| p.position)
            .collect();
        assert_eq!(non_model_positions, vec![1, 2, 3]);
    }

    #[test]
    fn counters_are_not_reset_between_batches() {
        // Three non-model templates in three different batches: the
        // counter carries through them all.
        let planned = plan(vec![
            template(1, false, true, false, 1),  // standard
            template(2, false, false, false, 0), // mockup
            template(3, false, false, true, 0),  // marketing
        ]);

        let positions: Vec<i32> = planned.iter().map(|p| p.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }

    #[test]
    fn positions_can_collide_across_partitions() {
        // A known property of the numbering scheme: the two sequences are
        // independent, so both partitions contain position 1.
        let planned = plan(vec![
            template(1, false, false, false, 0),
            template(2, true, false, false, 0),
        ]);

        assert_eq!(planned[0].position, 1);
        assert_eq!(planned[1].position, 1);
    }

    #[test]
    fn empty_batches_plan_nothing() {
        assert!(plan(Vec::new()).is_empty());
    }
}
