//! Newtype wrapper for property identifiers
//!
//! A property id names either a frontmatter property of a note (`note.cover`,
//! or just `cover`) or an intrinsic file attribute (`file.name`, `file.path`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Where a property's value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyNamespace {
    /// A frontmatter property of the note.
    Note,
    /// An attribute of the note's file (`name`, `basename`, `path`, ...).
    File,
}

/// An identifier for a card property
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PropertyId(Arc<str>);

impl PropertyId {
    /// Creates a new PropertyId from a string
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation of this property ID
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn namespace(&self) -> PropertyNamespace {
        if self.0.starts_with("file.") {
            PropertyNamespace::File
        } else {
            PropertyNamespace::Note
        }
    }

    /// The property name without its namespace prefix.
    pub fn name(&self) -> &str {
        self.0
            .strip_prefix("file.")
            .or_else(|| self.0.strip_prefix("note."))
            .unwrap_or(&self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<String> for PropertyId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for PropertyId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl From<PropertyId> for String {
    fn from(id: PropertyId) -> Self {
        id.0.to_string()
    }
}

impl AsRef<str> for PropertyId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
