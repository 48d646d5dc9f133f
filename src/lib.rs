//! # deck
//!
//! Card grids for note vaults. Each note becomes a card with a cover image
//! taken from one of its properties, or a deterministic color, gradient or
//! text preview when it has none.
//!
//! The building blocks live in the member crates and are re-exported here;
//! this crate adds loading notes from disk and the `deck` command line.

pub mod error;
pub mod notes;

pub use deck_core::{
    Card, CardGrid, CardGroup, CardProperty, CardRenderer, Color, ContentSource, Cover, CoverFallback,
    GridStyle, ImageFit, InMemoryVault, LinkResolver, NoteEntry, PropertyId, PropertyValue, Reference,
    ResolvedTarget, ResourceError, ViewConfig, resolve_image,
};
pub use deck_core::cover::PREVIEW_EXCERPT_LENGTH;
pub use deck_core::grid::NO_VALUE_HEADER;
pub use deck_excerpt::{Boundary, Excerpt, excerpt, excerpt_with_boundary};
pub use deck_palette::{color_for, gradient_for, hash_name};
pub use deck_resource::FilesystemVault;
pub use error::DeckError;
pub use notes::{load_notes, parse_frontmatter, parse_note};

use std::path::Path;

/// Opens the vault at `root` and renders all of its notes.
pub fn render_vault<P: AsRef<Path>>(root: P, config: ViewConfig) -> Result<CardGrid, DeckError> {
    let vault = FilesystemVault::open(root)?;
    let notes = load_notes(&vault);
    let renderer = CardRenderer::new(config, &vault, &vault);
    Ok(renderer.render_grid(&notes))
}
