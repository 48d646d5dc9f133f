//! View configuration for a card grid.
//!
//! Keys and defaults follow the options the view exposes to users; values
//! outside the allowed ranges are clamped by [`ViewConfig::normalized`]
//! rather than rejected.

use crate::error::ConfigError;
use crate::style_types::ImageFit;
use crate::types_base::{PropertyId, PropertyNamespace};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

pub const DEFAULT_CARD_SIZE: u32 = 200;
pub const CARD_SIZE_RANGE: RangeInclusive<u32> = 100..=400;
pub const DEFAULT_IMAGE_ASPECT_RATIO: f32 = 1.6;
pub const IMAGE_ASPECT_RATIO_RANGE: RangeInclusive<f32> = 0.5..=2.0;

/// What a card shows when it has no cover image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum CoverFallback {
    /// An empty cover.
    None,
    /// A solid color picked from the note name.
    Color,
    /// A gradient picked from the note name.
    #[default]
    Gradient,
    /// An excerpt of the note's text.
    Preview,
}

impl CoverFallback {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoverFallback::None => "none",
            CoverFallback::Color => "color",
            CoverFallback::Gradient => "gradient",
            CoverFallback::Preview => "preview",
        }
    }
}

impl FromStr for CoverFallback {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(CoverFallback::None),
            "color" => Ok(CoverFallback::Color),
            "gradient" => Ok(CoverFallback::Gradient),
            "preview" => Ok(CoverFallback::Preview),
            _ => Err(ConfigError::InvalidValue {
                key: "coverFallback".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// A blank fallback takes the default; unknown ones render an empty cover.
impl From<String> for CoverFallback {
    fn from(s: String) -> Self {
        if s.trim().is_empty() {
            return CoverFallback::default();
        }
        s.parse().unwrap_or(CoverFallback::None)
    }
}

impl fmt::Display for CoverFallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewConfig {
    pub cover_fallback: CoverFallback,
    /// Card width in pixels.
    pub card_size: u32,
    /// Property holding the cover image.
    pub image_property: Option<PropertyId>,
    pub image_fit: ImageFit,
    pub image_aspect_ratio: f32,
    /// Properties shown on each card; the first one is the title.
    pub order: Vec<PropertyId>,
    /// Property whose value groups the cards.
    pub group_by: Option<PropertyId>,
    /// Label overrides, keyed by property id.
    pub display_names: BTreeMap<String, String>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            cover_fallback: CoverFallback::default(),
            card_size: DEFAULT_CARD_SIZE,
            image_property: None,
            image_fit: ImageFit::default(),
            image_aspect_ratio: DEFAULT_IMAGE_ASPECT_RATIO,
            order: Vec::new(),
            group_by: None,
            display_names: BTreeMap::new(),
        }
    }
}

impl ViewConfig {
    /// Parses a configuration from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ViewConfig = serde_json::from_str(json)?;
        Ok(config.normalized())
    }

    /// Replaces unset values with defaults and clamps sizes into range.
    pub fn normalized(mut self) -> Self {
        self.card_size = match self.card_size {
            0 => DEFAULT_CARD_SIZE,
            size => size.clamp(*CARD_SIZE_RANGE.start(), *CARD_SIZE_RANGE.end()),
        };
        self.image_aspect_ratio = if self.image_aspect_ratio.is_finite() && self.image_aspect_ratio > 0.0 {
            self.image_aspect_ratio
                .clamp(*IMAGE_ASPECT_RATIO_RANGE.start(), *IMAGE_ASPECT_RATIO_RANGE.end())
        } else {
            DEFAULT_IMAGE_ASPECT_RATIO
        };
        self.image_property = self.image_property.filter(|id| !id.is_empty());
        self.group_by = self.group_by.filter(|id| !id.is_empty());
        self.order.retain(|id| !id.is_empty());
        self
    }

    /// The label shown next to a property's value.
    pub fn display_name(&self, id: &PropertyId) -> String {
        if let Some(name) = self.display_names.get(id.as_str()) {
            return name.clone();
        }
        match id.namespace() {
            PropertyNamespace::Note => id.name().to_string(),
            PropertyNamespace::File => format!("file {}", id.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewConfig::from_json("{}").unwrap();
        assert_eq!(config, ViewConfig::default());
        assert_eq!(config.cover_fallback, CoverFallback::Gradient);
        assert_eq!(config.card_size, 200);
        assert_eq!(config.image_fit, ImageFit::Cover);
        assert_eq!(config.image_aspect_ratio, 1.6);
    }

    #[test]
    fn test_full_config() {
        let config = ViewConfig::from_json(
            r#"{
                "coverFallback": "preview",
                "cardSize": 260,
                "imageProperty": "note.cover",
                "imageFit": "contain",
                "imageAspectRatio": 1.2,
                "order": ["note.title", "note.status", "file.name"],
                "groupBy": "note.status",
                "displayNames": { "note.status": "State" }
            }"#,
        )
        .unwrap();
        assert_eq!(config.cover_fallback, CoverFallback::Preview);
        assert_eq!(config.card_size, 260);
        assert_eq!(config.image_property, Some(PropertyId::from("note.cover")));
        assert_eq!(config.image_fit, ImageFit::Contain);
        assert_eq!(config.order.len(), 3);
        assert_eq!(config.group_by, Some(PropertyId::from("note.status")));
        assert_eq!(config.display_name(&"note.status".into()), "State");
    }

    #[test]
    fn test_unknown_fallback_means_none() {
        let config = ViewConfig::from_json(r#"{"coverFallback": "sparkles"}"#).unwrap();
        assert_eq!(config.cover_fallback, CoverFallback::None);
        assert!("sparkles".parse::<CoverFallback>().is_err());
    }

    #[test]
    fn test_blank_fallback_means_default() {
        for json in [r#"{"coverFallback": ""}"#, r#"{"coverFallback": "  "}"#] {
            let config = ViewConfig::from_json(json).unwrap();
            assert_eq!(config.cover_fallback, CoverFallback::Gradient);
        }
    }

    #[test]
    fn test_normalization() {
        let config = ViewConfig::from_json(
            r#"{"cardSize": 0, "imageAspectRatio": 0, "imageProperty": "", "groupBy": " "}"#,
        )
        .unwrap();
        assert_eq!(config.card_size, DEFAULT_CARD_SIZE);
        assert_eq!(config.image_aspect_ratio, DEFAULT_IMAGE_ASPECT_RATIO);
        assert_eq!(config.image_property, None);
        assert_eq!(config.group_by, None);

        let config = ViewConfig::from_json(r#"{"cardSize": 5000, "imageAspectRatio": 0.1}"#).unwrap();
        assert_eq!(config.card_size, 400);
        assert_eq!(config.image_aspect_ratio, 0.5);
    }

    #[test]
    fn test_display_name_defaults() {
        let config = ViewConfig::default();
        assert_eq!(config.display_name(&"note.status".into()), "status");
        assert_eq!(config.display_name(&"rating".into()), "rating");
        assert_eq!(config.display_name(&"file.name".into()), "file name");
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(ViewConfig::from_json("{"), Err(ConfigError::Json(_))));
        assert!(matches!(ViewConfig::from_json(r#"{"cardSize": "big"}"#), Err(ConfigError::Json(_))));
    }
}
