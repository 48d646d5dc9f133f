//! A single card: cover, title and the visible properties of one note.

use crate::config::ViewConfig;
use crate::cover::{Cover, select_cover};
use crate::traits::{ContentSource, LinkResolver};
use crate::types_base::NoteEntry;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardProperty {
    pub id: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    /// Vault path of the note; opening the card opens this note.
    pub path: String,
    pub title: String,
    pub cover: Cover,
    pub properties: Vec<CardProperty>,
}

/// Builds the card for `entry`. Returns `None` for entries without a path.
pub fn build_card<L, C>(entry: &NoteEntry, config: &ViewConfig, links: &L, content: &C) -> Option<Card>
where
    L: LinkResolver + ?Sized,
    C: ContentSource + ?Sized,
{
    if entry.path.is_empty() {
        log::debug!("Skipping entry without a file");
        return None;
    }

    let cover = select_cover(entry, config, links, content);

    // The first ordered property is the title; an empty one falls back to the file name.
    let title = config
        .order
        .first()
        .map(|id| entry.value(id).to_display_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| entry.basename().to_string());

    let properties = config
        .order
        .iter()
        .skip(1)
        .filter_map(|id| {
            let value = entry.value(id);
            if value.is_null() {
                return None;
            }
            // Zero and false are still shown.
            let value = value.to_display_string();
            (!value.is_empty()).then(|| CardProperty {
                id: id.to_string(),
                label: config.display_name(id),
                value,
            })
        })
        .collect();

    Some(Card { path: entry.path.clone(), title, cover, properties })
}
