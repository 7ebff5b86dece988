//! Shape → physical print-size lookup.
//!
//! Each template shape maps to the ordered list of physical sizes
//! manufactured for it. Artists upload one base render per size; the first
//! entry is authoritative when resolving the base render that feeds
//! composition input.

use crate::shape::TemplateShape;

/// Ordered physical sizes (inches, width x height) manufactured per shape.
pub fn required_sizes(shape: TemplateShape) -> &'static [&'static str] {
    match shape {
        TemplateShape::Vertical => &["16x24", "24x36", "12x18"],
        TemplateShape::Horizontal => &["24x16", "36x24", "18x12"],
        TemplateShape::Tall => &["16x48", "12x36"],
        TemplateShape::Square => &["24x24", "16x16", "12x12"],
        TemplateShape::Wide => &["48x16", "36x12"],
    }
}

/// The size whose base render feeds composition input for this shape.
pub fn primary_size(shape: TemplateShape) -> &'static str {
    required_sizes(shape)[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shape_has_at_least_one_size() {
        for shape in TemplateShape::ALL {
            assert!(!required_sizes(shape).is_empty(), "{shape} has no sizes");
        }
    }

    #[test]
    fn primary_size_is_the_first_entry() {
        for shape in TemplateShape::ALL {
            assert_eq!(primary_size(shape), required_sizes(shape)[0]);
        }
    }

    #[test]
    fn sizes_are_well_formed_dimension_labels() {
        for shape in TemplateShape::ALL {
            for size in required_sizes(shape) {
                let (w, h) = size.split_once('x').expect("size must be WxH");
                assert!(w.parse::<u32>().is_ok(), "bad width in {size}");
                assert!(h.parse::<u32>().is_ok(), "bad height in {size}");
            }
        }
    }
}
