//! # deck-core
//!
//! Card model for grids of notes.
//!
//! This crate turns note entries and a view configuration into cards:
//! - **reference**: Classifies property values and resolves image references
//! - **cover**: Picks a card's cover image or its fallback
//! - **card**: Builds the title and visible properties of a card
//! - **grid**: Renders and groups every card of a view
//! - **config**: The view configuration and its defaults
//!
//! ## Design Principle
//!
//! This crate has **no platform dependencies**. Vault access goes through the
//! [`LinkResolver`] and [`ContentSource`] traits, which the host implements.

// Re-export foundation crates
pub use deck_style as style_types;
pub use deck_traits as traits;
pub use deck_types as types_base;

// Re-export algorithm crates
pub use deck_excerpt as excerpt;
pub use deck_palette as palette;

pub mod card;
pub mod config;
pub mod cover;
pub mod error;
pub mod grid;
pub mod reference;

// Re-export commonly used types from foundation crates
pub use style_types::{GridStyle, ImageFit};
pub use types_base::{Color, NoteEntry, PropertyId, PropertyValue};

// Re-export from internal modules
pub use card::{Card, CardProperty, build_card};
pub use config::{CoverFallback, ViewConfig};
pub use cover::{Cover, fallback_cover, select_cover};
pub use error::ConfigError;
pub use grid::{CardGrid, CardGroup, CardRenderer, NO_VALUE_HEADER};
pub use reference::{Reference, resolve_image};

// Re-export vault abstraction traits
pub use traits::{ContentSource, InMemoryVault, LinkResolver, ResolvedTarget, ResourceError};
