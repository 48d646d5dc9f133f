//! The card grid: every card of a view, optionally grouped by a property.

use crate::card::{Card, build_card};
use crate::config::ViewConfig;
use crate::style_types::GridStyle;
use crate::traits::{ContentSource, LinkResolver};
use crate::types_base::NoteEntry;
use serde::Serialize;

/// Header of the group collecting notes without a value for the group key.
pub const NO_VALUE_HEADER: &str = "No value";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardGroup {
    /// Group key, `None` when the grid is not grouped.
    pub key: Option<String>,
    pub cards: Vec<Card>,
}

impl CardGroup {
    /// Heading shown above the group, if it has one.
    pub fn header(&self) -> Option<&str> {
        self.key
            .as_deref()
            .map(|key| if key.is_empty() { NO_VALUE_HEADER } else { key })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardGrid {
    pub style: GridStyle,
    pub groups: Vec<CardGroup>,
}

impl CardGrid {
    pub fn is_grouped(&self) -> bool {
        self.groups.iter().any(|group| group.key.is_some())
    }

    pub fn card_count(&self) -> usize {
        self.groups.iter().map(|group| group.cards.len()).sum()
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.groups.iter().flat_map(|group| group.cards.iter())
    }
}

/// Renders notes into cards with one configuration and one vault.
pub struct CardRenderer<'a> {
    config: ViewConfig,
    links: &'a dyn LinkResolver,
    content: &'a dyn ContentSource,
}

impl<'a> CardRenderer<'a> {
    pub fn new(config: ViewConfig, links: &'a dyn LinkResolver, content: &'a dyn ContentSource) -> Self {
        Self { config: config.normalized(), links, content }
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn style(&self) -> GridStyle {
        GridStyle {
            card_size: self.config.card_size,
            image_aspect_ratio: self.config.image_aspect_ratio,
        }
    }

    pub fn render_card(&self, entry: &NoteEntry) -> Option<Card> {
        build_card(entry, &self.config, self.links, self.content)
    }

    /// Renders all entries, keeping their order.
    ///
    /// With a `group_by` property, groups appear in the order their key is
    /// first seen; notes without a value share one group keyed `""`.
    pub fn render_grid<'e, I>(&self, entries: I) -> CardGrid
    where
        I: IntoIterator<Item = &'e NoteEntry>,
    {
        let mut groups: Vec<CardGroup> = Vec::new();

        for entry in entries {
            let Some(card) = self.render_card(entry) else {
                continue;
            };
            let key = self
                .config
                .group_by
                .as_ref()
                .map(|id| entry.value(id).to_display_string());

            match groups.iter_mut().find(|group| group.key == key) {
                Some(group) => group.cards.push(card),
                None => groups.push(CardGroup { key, cards: vec![card] }),
            }
        }

        log::debug!("Rendered {} groups", groups.len());
        CardGrid { style: self.style(), groups }
    }
}
