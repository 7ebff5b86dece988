//! Artwork template-shape classifier.
//!
//! Every artwork is classified into one of five physical shapes. The shape
//! drives which base-render size feeds composition input
//! ([`crate::sizes`]) and which sizing photo is appended to the preview set
//! ([`crate::photos`]).

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Physical shape of an artwork's product templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateShape {
    Vertical,
    Horizontal,
    Tall,
    Square,
    Wide,
}

impl TemplateShape {
    /// All shapes, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Vertical,
        Self::Horizontal,
        Self::Tall,
        Self::Square,
        Self::Wide,
    ];

    /// Database/API string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
            Self::Tall => "tall",
            Self::Square => "square",
            Self::Wide => "wide",
        }
    }

    /// Parse the stored string form.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "vertical" => Ok(Self::Vertical),
            "horizontal" => Ok(Self::Horizontal),
            "tall" => Ok(Self::Tall),
            "square" => Ok(Self::Square),
            "wide" => Ok(Self::Wide),
            other => Err(CoreError::Validation(format!(
                "Invalid template shape '{other}'. Must be one of: vertical, horizontal, tall, square, wide"
            ))),
        }
    }
}

impl std::fmt::Display for TemplateShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrips_every_shape() {
        for shape in TemplateShape::ALL {
            assert_eq!(TemplateShape::parse(shape.as_str()).unwrap(), shape);
        }
    }

    #[test]
    fn parse_rejects_unknown_shape() {
        let result = TemplateShape::parse("circular");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid template shape"));
    }

    #[test]
    fn parse_rejects_empty_string() {
        assert!(TemplateShape::parse("").is_err());
    }

    #[test]
    fn serde_uses_lowercase_form() {
        let json = serde_json::to_string(&TemplateShape::Vertical).unwrap();
        assert_eq!(json, "\"vertical\"");
    }
}
