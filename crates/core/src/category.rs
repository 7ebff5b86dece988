//! Render-category classification for mockup templates.
//!
//! Templates carry three independent boolean flags (`with_model`,
//! `is_standard`, `for_marketing`); the pipeline dispatches them in four
//! category batches. Classification is total over all eight flag
//! combinations so that every template lands in exactly one batch.

/// The four dispatch batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderCategory {
    /// Plain product shots without a model. Dispatched first, ordered by
    /// the template's explicit sort key.
    Standard,
    /// Non-model lifestyle mockups.
    Mockup,
    /// Mockups featuring a model.
    ModelMockup,
    /// Promotional renders. Dispatched last, regardless of the other flags.
    Marketing,
}

impl RenderCategory {
    /// All categories, in dispatch order.
    pub const DISPATCH_ORDER: [Self; 4] = [
        Self::Standard,
        Self::Mockup,
        Self::ModelMockup,
        Self::Marketing,
    ];

    /// Classify a template's flag combination.
    ///
    /// `for_marketing` wins outright, then `with_model`, then
    /// `is_standard`. In particular a template flagged both `with_model`
    /// and `is_standard` classifies as [`ModelMockup`](Self::ModelMockup).
    pub fn classify(with_model: bool, is_standard: bool, for_marketing: bool) -> Self {
        if for_marketing {
            Self::Marketing
        } else if with_model {
            Self::ModelMockup
        } else if is_standard {
            Self::Standard
        } else {
            Self::Mockup
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marketing_outranks_every_other_flag() {
        for with_model in [false, true] {
            for is_standard in [false, true] {
                assert_eq!(
                    RenderCategory::classify(with_model, is_standard, true),
                    RenderCategory::Marketing,
                );
            }
        }
    }

    #[test]
    fn standard_requires_is_standard_without_model() {
        assert_eq!(
            RenderCategory::classify(false, true, false),
            RenderCategory::Standard,
        );
    }

    #[test]
    fn plain_mockup_when_no_flags_set() {
        assert_eq!(
            RenderCategory::classify(false, false, false),
            RenderCategory::Mockup,
        );
    }

    #[test]
    fn with_model_classifies_as_model_mockup() {
        assert_eq!(
            RenderCategory::classify(true, false, false),
            RenderCategory::ModelMockup,
        );
    }

    #[test]
    fn model_flag_outranks_standard_flag() {
        // Both flags set and not marketing: the model batch wins.
        assert_eq!(
            RenderCategory::classify(true, true, false),
            RenderCategory::ModelMockup,
        );
    }

    #[test]
    fn classification_is_total() {
        // Every one of the eight combinations maps to some category
        // without panicking.
        for with_model in [false, true] {
            for is_standard in [false, true] {
                for for_marketing in [false, true] {
                    let _ = RenderCategory::classify(with_model, is_standard, for_marketing);
                }
            }
        }
    }
}
