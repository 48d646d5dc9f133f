//! Collaborator traits for everything that lives outside the card engine.
//!
//! `LinkResolver` turns a link target into a renderable address and
//! `ContentSource` reads note bodies. Both are implemented by the host's
//! vault; [`InMemoryVault`] is the environment-free implementation.

use crate::linkpath::first_linkpath_dest;
use std::collections::HashMap;
use std::sync::RwLock;
use thiserror::Error;

/// Prefix put in front of vault-relative paths to form resource addresses.
pub const DEFAULT_RESOURCE_PREFIX: &str = "app://local/";

/// Error type for resource loading operations.
#[derive(Error, Debug, Clone)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to load resource '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("Invalid resource format: {0}")]
    InvalidFormat(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ResourceError {
    fn from(err: std::io::Error) -> Self {
        ResourceError::Io(err.to_string())
    }
}

/// A link target resolved to a concrete file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    /// Vault-relative path of the file the link points at.
    pub path: String,
    /// Address a renderer can load the file from.
    pub resource_address: String,
}

impl ResolvedTarget {
    pub fn new(path: impl Into<String>, resource_address: impl Into<String>) -> Self {
        Self { path: path.into(), resource_address: resource_address.into() }
    }

    /// Builds a target whose address is `prefix` followed by the path.
    pub fn with_prefix(path: impl Into<String>, prefix: &str) -> Self {
        let path = path.into();
        let resource_address = format!("{}{}", prefix, path);
        Self { path, resource_address }
    }
}

/// Resolves symbolic link targets relative to the note they appear in.
///
/// Any `Fn(&str, &str) -> Option<ResolvedTarget>` is a resolver, which keeps
/// ad-hoc lookups (and test doubles) cheap to write.
pub trait LinkResolver {
    /// Resolves `target` as written in the note at `context_path`.
    ///
    /// Returns `None` when nothing in the vault matches.
    fn resolve_link(&self, target: &str, context_path: &str) -> Option<ResolvedTarget>;
}

impl<F> LinkResolver for F
where
    F: Fn(&str, &str) -> Option<ResolvedTarget>,
{
    fn resolve_link(&self, target: &str, context_path: &str) -> Option<ResolvedTarget> {
        self(target, context_path)
    }
}

/// Reads note contents.
pub trait ContentSource: Send + Sync {
    /// Reads the full text of the note at `path`.
    fn read_note(&self, path: &str) -> Result<String, ResourceError>;

    /// Check if a note exists.
    fn exists(&self, path: &str) -> bool;

    /// Returns a human-readable name for this source (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// An in-memory vault.
///
/// Files are stored in memory and must be pre-populated before use. Binary
/// files (images) are registered by path only; notes carry their text.
#[derive(Debug)]
pub struct InMemoryVault {
    files: RwLock<HashMap<String, Option<String>>>,
    resource_prefix: String,
}

impl Default for InMemoryVault {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryVault {
    pub fn new() -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
            resource_prefix: DEFAULT_RESOURCE_PREFIX.to_string(),
        }
    }

    /// Sets the prefix used to build resource addresses.
    pub fn with_resource_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.resource_prefix = prefix.into();
        self
    }

    /// Add a note with its text.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::LoadFailed` if the internal lock is poisoned.
    pub fn add_note(&self, path: impl Into<String>, content: impl Into<String>) -> Result<(), ResourceError> {
        self.insert(path.into(), Some(content.into()))
    }

    /// Register a file (an image, an attachment) without content.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::LoadFailed` if the internal lock is poisoned.
    pub fn add_file(&self, path: impl Into<String>) -> Result<(), ResourceError> {
        self.insert(path.into(), None)
    }

    fn insert(&self, path: String, content: Option<String>) -> Result<(), ResourceError> {
        let mut files = self.files.write().map_err(|_| ResourceError::LoadFailed {
            path: path.clone(),
            message: "vault lock poisoned".to_string(),
        })?;
        files.insert(path, content);
        Ok(())
    }

    /// Remove a file from the vault.
    ///
    /// Returns `false` if the lock is poisoned or the file doesn't exist.
    pub fn remove(&self, path: &str) -> bool {
        self.files
            .write()
            .map(|mut files| files.remove(path).is_some())
            .unwrap_or(false)
    }

    /// Get the number of files in the vault.
    ///
    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.files.read().map(|f| f.len()).unwrap_or(0)
    }

    /// Check if the vault is empty.
    ///
    /// Returns `true` if the lock is poisoned (safe default).
    pub fn is_empty(&self) -> bool {
        self.files.read().map(|f| f.is_empty()).unwrap_or(true)
    }
}

impl LinkResolver for InMemoryVault {
    fn resolve_link(&self, target: &str, context_path: &str) -> Option<ResolvedTarget> {
        let files = self.files.read().ok()?;
        let path = first_linkpath_dest(files.keys().map(String::as_str), target, context_path)?;
        Some(ResolvedTarget::with_prefix(path, &self.resource_prefix))
    }
}

impl ContentSource for InMemoryVault {
    fn read_note(&self, path: &str) -> Result<String, ResourceError> {
        let files = self.files.read().map_err(|_| ResourceError::LoadFailed {
            path: path.to_string(),
            message: "vault lock poisoned".to_string(),
        })?;
        match files.get(path) {
            Some(Some(content)) => Ok(content.clone()),
            Some(None) => Err(ResourceError::InvalidFormat(format!("{} has no text content", path))),
            None => Err(ResourceError::NotFound(path.to_string())),
        }
    }

    fn exists(&self, path: &str) -> bool {
        self.files.read().map(|f| f.contains_key(path)).unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "InMemoryVault"
    }
}
