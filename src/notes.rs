//! Loading note entries from a vault on disk.
//!
//! A note's properties come from its YAML frontmatter. Notes whose
//! frontmatter does not parse are still loaded, without properties.

use crate::error::DeckError;
use deck_core::{NoteEntry, PropertyValue};
use deck_excerpt::split_frontmatter;
use deck_resource::FilesystemVault;
use deck_traits::ContentSource;
use serde_json::Value;
use std::collections::BTreeMap;

/// Parses a frontmatter block into note properties.
///
/// An empty block has no properties; anything but a mapping is an error.
pub fn parse_frontmatter(yaml: &str) -> Result<BTreeMap<String, PropertyValue>, DeckError> {
    if yaml.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    let value: Value = serde_yaml::from_str(yaml)?;
    match value {
        Value::Null => Ok(BTreeMap::new()),
        Value::Object(map) => Ok(map
            .into_iter()
            .map(|(key, value)| (key, PropertyValue::from(value)))
            .collect()),
        other => Err(DeckError::Frontmatter(format!(
            "expected a mapping, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}

/// Builds the entry for the note at `path` from its raw text.
pub fn parse_note(path: &str, text: &str) -> NoteEntry {
    let mut entry = NoteEntry::new(path);
    if let (Some(yaml), _) = split_frontmatter(text) {
        match parse_frontmatter(yaml) {
            Ok(properties) => entry.properties = properties,
            Err(e) => log::warn!("Ignoring frontmatter of '{}': {}", path, e),
        }
    }
    entry
}

/// Loads every markdown note of the vault, in path order.
///
/// A note that cannot be read is still loaded, without properties.
pub fn load_notes(vault: &FilesystemVault) -> Vec<NoteEntry> {
    let notes: Vec<NoteEntry> = vault
        .notes()
        .map(|path| match vault.read_note(path) {
            Ok(text) => parse_note(path, &text),
            Err(e) => {
                log::warn!("Failed to read '{}' via {}: {}", path, vault.name(), e);
                NoteEntry::new(path)
            }
        })
        .collect();

    log::info!("Loaded {} notes from {}", notes.len(), vault.root().display());
    notes
}
