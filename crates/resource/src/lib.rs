//! Vault implementations for the deck card engine.
//!
//! This crate provides platform-specific implementations of the
//! `LinkResolver` and `ContentSource` traits from deck-traits.
//!
//! ## Available Vaults
//!
//! - [`FilesystemVault`]: Indexes and reads a vault directory on disk
//!
//! ## Re-exports
//!
//! For convenience, we also re-export the in-memory vault from deck-traits:
//! - [`InMemoryVault`]: Pre-populated in-memory storage

mod filesystem;

pub use filesystem::FilesystemVault;

// Re-export the in-memory vault from deck-traits for convenience
pub use deck_traits::InMemoryVault;
