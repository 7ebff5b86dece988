//! Synthesized preview photos appended after composition dispatch.
//!
//! Two previews are not composited from artwork: a sizing chart chosen by
//! template shape and a static product-details photo. Their display
//! positions are fixed so they sort near the end of the preview list; they
//! bypass the order counters entirely. Dynamic order values can reach 7 or
//! 8 on artworks with many templates, in which case the fixed photos
//! interleave with composited previews (see [`crate::order`]).

use crate::shape::TemplateShape;

/// Fixed display position of the sizing-chart photo.
pub const SIZING_PHOTO_POSITION: i32 = 7;

/// Fixed display position of the product-details photo.
pub const PRODUCT_DETAILS_POSITION: i32 = 8;

/// Static product-details photo shared by every artwork.
pub const PRODUCT_DETAILS_PHOTO_URL: &str =
    "https://cc-templates.s3.us-west-1.amazonaws.com/product_details.jpg";

/// Sizing-chart photo matching the artwork's template shape.
pub fn sizing_photo_url(shape: TemplateShape) -> &'static str {
    match shape {
        TemplateShape::Vertical => {
            "https://cc-templates.s3.us-west-1.amazonaws.com/sizing_vertical.jpg"
        }
        TemplateShape::Horizontal => {
            "https://cc-templates.s3.us-west-1.amazonaws.com/sizing_horizontal.jpg"
        }
        TemplateShape::Tall => "https://cc-templates.s3.us-west-1.amazonaws.com/sizing_tall.jpg",
        TemplateShape::Square => {
            "https://cc-templates.s3.us-west-1.amazonaws.com/sizing_square.jpg"
        }
        TemplateShape::Wide => "https://cc-templates.s3.us-west-1.amazonaws.com/sizing_wide.jpg",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_positions_are_seven_and_eight() {
        assert_eq!(SIZING_PHOTO_POSITION, 7);
        assert_eq!(PRODUCT_DETAILS_POSITION, 8);
    }

    #[test]
    fn each_shape_has_its_own_sizing_photo() {
        let mut urls: Vec<&str> = TemplateShape::ALL
            .into_iter()
            .map(sizing_photo_url)
            .collect();
        urls.sort_unstable();
        urls.dedup();
        assert_eq!(urls.len(), TemplateShape::ALL.len());
    }

    #[test]
    fn sizing_photo_is_not_the_product_details_photo() {
        for shape in TemplateShape::ALL {
            assert_ne!(sizing_photo_url(shape), PRODUCT_DETAILS_PHOTO_URL);
        }
    }
}
