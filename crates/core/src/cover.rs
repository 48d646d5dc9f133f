//! Cover selection: an image when the note names one, otherwise the
//! configured fallback.

use crate::config::{CoverFallback, ViewConfig};
use crate::reference::Reference;
use crate::style_types::{ImageFit, linear_gradient};
use crate::traits::{ContentSource, LinkResolver};
use crate::types_base::NoteEntry;
use deck_excerpt::excerpt;
use deck_palette::{color_for, gradient_for};
use serde::Serialize;

/// Longest preview excerpt, in chars.
pub const PREVIEW_EXCERPT_LENGTH: usize = 500;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Cover {
    Image { src: String, fit: ImageFit },
    Color { color: String },
    Gradient { from: String, to: String },
    /// An excerpt of the note's text; empty if the note is empty or unreadable.
    Preview { excerpt: String },
    Empty,
}

impl Cover {
    /// CSS class of the cover element.
    pub fn class_name(&self) -> &'static str {
        match self {
            Cover::Image { .. } => "deck-cover-image",
            Cover::Color { .. } => "deck-cover-color",
            Cover::Gradient { .. } => "deck-cover-gradient",
            Cover::Preview { excerpt } if excerpt.is_empty() => "deck-cover-preview-empty",
            Cover::Preview { .. } => "deck-cover-preview",
            Cover::Empty => "deck-cover-empty",
        }
    }

    /// Inline style declaration for the cover element, if it needs one.
    pub fn style(&self) -> Option<String> {
        match self {
            Cover::Image { fit, .. } => Some(format!("object-fit: {}", fit)),
            Cover::Color { color } => Some(format!("background-color: {}", color)),
            Cover::Gradient { from, to } => Some(format!("background: {}", linear_gradient(from, to))),
            Cover::Preview { .. } | Cover::Empty => None,
        }
    }
}

/// Picks the cover for `entry`.
///
/// 1. The image property, if it resolves to an image address.
/// 2. The image property's color, if it holds a hex color.
/// 3. The configured fallback.
pub fn select_cover<L, C>(entry: &NoteEntry, config: &ViewConfig, links: &L, content: &C) -> Cover
where
    L: LinkResolver + ?Sized,
    C: ContentSource + ?Sized,
{
    if let Some(id) = &config.image_property {
        let value = entry.value(id);
        let reference = Reference::classify(&value);
        if let Some(src) = reference.resolve(&entry.path, links) {
            return Cover::Image { src, fit: config.image_fit };
        }
        if let Some(color) = reference.as_color() {
            return Cover::Color { color: color.to_string() };
        }
    }
    fallback_cover(config.cover_fallback, entry, content)
}

/// The cover for a note without an image.
pub fn fallback_cover<C>(fallback: CoverFallback, entry: &NoteEntry, content: &C) -> Cover
where
    C: ContentSource + ?Sized,
{
    let note_name = entry.basename();
    match fallback {
        CoverFallback::Color => Cover::Color { color: color_for(note_name).to_string() },
        CoverFallback::Gradient => {
            let gradient = gradient_for(note_name);
            Cover::Gradient { from: gradient.from.to_string(), to: gradient.to.to_string() }
        }
        CoverFallback::Preview => preview_cover(entry, content),
        CoverFallback::None => Cover::Empty,
    }
}

fn preview_cover<C>(entry: &NoteEntry, content: &C) -> Cover
where
    C: ContentSource + ?Sized,
{
    match content.read_note(&entry.path) {
        Ok(text) => Cover::Preview { excerpt: excerpt(&text, PREVIEW_EXCERPT_LENGTH) },
        Err(e) => {
            log::warn!("Failed to read '{}' for preview via {}: {}", entry.path, content.name(), e);
            Cover::Preview { excerpt: String::new() }
        }
    }
}
