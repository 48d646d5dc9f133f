//! CSS fragments for covers and the card grid.

use serde::Serialize;

/// Angle of generated gradient covers.
pub const GRADIENT_ANGLE_DEG: u16 = 135;

/// `linear-gradient(135deg, {from} 0%, {to} 100%)`
pub fn linear_gradient(from: &str, to: &str) -> String {
    format!("linear-gradient({}deg, {} 0%, {} 100%)", GRADIENT_ANGLE_DEG, from, to)
}

/// Sizing shared by every card of a grid, exposed as CSS custom properties.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridStyle {
    /// Card width in pixels.
    pub card_size: u32,
    /// Width / height ratio of the cover area.
    pub image_aspect_ratio: f32,
}

impl GridStyle {
    pub fn custom_properties(&self) -> [(&'static str, String); 2] {
        [
            ("--card-size", format!("{}px", self.card_size)),
            ("--image-aspect-ratio", self.image_aspect_ratio.to_string()),
        ]
    }

    /// The custom properties as an inline `style` attribute value.
    pub fn to_inline_css(&self) -> String {
        self.custom_properties()
            .iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
