//! Preview order assignment counters.
//!
//! One pipeline run owns two counters: templates rendered with a model draw
//! from one sequence, templates without a model from the other. Both
//! sequences start at 1 and run across all four dispatch batches — they are
//! never reset between batches and never coordinated with each other.
//!
//! Because the sequences are independent, a model order value can equal a
//! non-model order value, and either can reach the fixed sizing (7) and
//! product-details (8) positions. Previews sort by order value regardless;
//! the collision is a known property of the numbering scheme, not resolved
//! here.

/// Two independent post-increment counters scoped to one pipeline run.
#[derive(Debug, Default)]
pub struct OrderCounters {
    model: i32,
    non_model: i32,
}

impl OrderCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the next order value from the partition matching `with_model`.
    ///
    /// Returns the post-increment value, so the first assignment in each
    /// partition is 1.
    pub fn assign(&mut self, with_model: bool) -> i32 {
        let counter = if with_model {
            &mut self.model
        } else {
            &mut self.non_model
        };
        *counter += 1;
        *counter
    }

    /// Number of model order values assigned so far.
    pub fn model_count(&self) -> i32 {
        self.model
    }

    /// Number of non-model order values assigned so far.
    pub fn non_model_count(&self) -> i32 {
        self.non_model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_assignment_in_each_partition_is_one() {
        let mut counters = OrderCounters::new();
        assert_eq!(counters.assign(false), 1);
        assert_eq!(counters.assign(true), 1);
    }

    #[test]
    fn partitions_count_independently() {
        let mut counters = OrderCounters::new();

        // 40 non-model assignments do not advance the model sequence.
        for expected in 1..=40 {
            assert_eq!(counters.assign(false), expected);
        }
        assert_eq!(counters.assign(true), 1);
        assert_eq!(counters.assign(true), 2);
        assert_eq!(counters.assign(false), 41);
    }

    #[test]
    fn interleaved_assignments_stay_contiguous_per_partition() {
        let mut counters = OrderCounters::new();
        let pattern = [false, true, false, false, true, false];

        let mut model_orders = Vec::new();
        let mut non_model_orders = Vec::new();
        for with_model in pattern {
            let order = counters.assign(with_model);
            if with_model {
                model_orders.push(order);
            } else {
                non_model_orders.push(order);
            }
        }

        assert_eq!(model_orders, vec![1, 2]);
        assert_eq!(non_model_orders, vec![1, 2, 3, 4]);
    }

    #[test]
    fn counts_track_assignments() {
        let mut counters = OrderCounters::new();
        counters.assign(false);
        counters.assign(false);
        counters.assign(true);

        assert_eq!(counters.non_model_count(), 2);
        assert_eq!(counters.model_count(), 1);
    }
}
