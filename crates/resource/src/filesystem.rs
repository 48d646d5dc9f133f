//! Filesystem-backed vault for native platforms.
//!
//! The vault indexes every file under its root once, then answers link
//! lookups from the index and reads notes straight from disk.
//!
//! # Security
//!
//! Reads are confined to the vault root: absolute paths and paths that
//! escape the root (e.g. `../../../etc/passwd`) are rejected.

use deck_traits::{
    ContentSource, DEFAULT_RESOURCE_PREFIX, LinkResolver, ResolvedTarget, ResourceError,
    first_linkpath_dest,
};
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// A vault rooted at a directory on the local filesystem.
///
/// Paths handed in and out are vault-relative and `/`-separated regardless
/// of platform.
#[derive(Debug)]
pub struct FilesystemVault {
    root: PathBuf,
    /// Canonicalized root for security checks
    canonical_root: Option<PathBuf>,
    resource_prefix: String,
    files: Vec<String>,
}

impl FilesystemVault {
    /// Opens a vault at `root` and indexes its files.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::NotFound` if `root` is not a directory.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self, ResourceError> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(ResourceError::NotFound(format!(
                "{} (not a directory)",
                root.display()
            )));
        }
        let canonical_root = root.canonicalize().ok();
        let mut vault = Self {
            root,
            canonical_root,
            resource_prefix: DEFAULT_RESOURCE_PREFIX.to_string(),
            files: Vec::new(),
        };
        vault.refresh()?;
        Ok(vault)
    }

    /// Sets the prefix used to build resource addresses.
    pub fn with_resource_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.resource_prefix = prefix.into();
        self
    }

    /// Returns the root directory of this vault.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Vault-relative paths of every indexed file, sorted.
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Indexed markdown notes, sorted.
    pub fn notes(&self) -> impl Iterator<Item = &str> {
        self.files
            .iter()
            .map(String::as_str)
            .filter(|path| path.to_ascii_lowercase().ends_with(".md"))
    }

    /// Re-walks the vault directory. Hidden entries (dot files, `.obsidian/`)
    /// are skipped.
    pub fn refresh(&mut self) -> Result<(), ResourceError> {
        let mut files = Vec::new();
        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry.file_name()));

        for entry in walker {
            let entry = entry.map_err(|e| ResourceError::LoadFailed {
                path: self.root.display().to_string(),
                message: e.to_string(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Ok(relative) = entry.path().strip_prefix(&self.root) {
                files.push(to_vault_path(relative));
            }
        }

        files.sort();
        log::debug!("Indexed {} files under {}", files.len(), self.root.display());
        self.files = files;
        Ok(())
    }

    /// Resolves and validates a vault path against the root.
    ///
    /// Returns `None` if the path would escape the root directory.
    fn resolve_path_safe(&self, path: &str) -> Option<PathBuf> {
        if Path::new(path).is_absolute() {
            return None;
        }

        for component in Path::new(path).components() {
            if let Component::ParentDir = component {
                return None;
            }
        }

        let full_path = self.root.join(path);

        if let Ok(canonical) = full_path.canonicalize()
            && let Some(ref base) = self.canonical_root
        {
            // A symlink may still point outside the vault.
            return canonical.starts_with(base).then_some(canonical);
        }

        Some(full_path)
    }
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}

fn to_vault_path(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

impl LinkResolver for FilesystemVault {
    fn resolve_link(&self, target: &str, context_path: &str) -> Option<ResolvedTarget> {
        let path = first_linkpath_dest(self.files.iter().map(String::as_str), target, context_path)?;
        Some(ResolvedTarget::with_prefix(path, &self.resource_prefix))
    }
}

impl ContentSource for FilesystemVault {
    fn read_note(&self, path: &str) -> Result<String, ResourceError> {
        let full_path = self
            .resolve_path_safe(path)
            .ok_or_else(|| ResourceError::NotFound(format!("{} (path traversal blocked)", path)))?;

        std::fs::read_to_string(&full_path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ResourceError::NotFound(path.to_string()),
            std::io::ErrorKind::InvalidData => {
                ResourceError::InvalidFormat(format!("{} is not valid UTF-8", path))
            }
            _ => ResourceError::LoadFailed { path: path.to_string(), message: e.to_string() },
        })
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve_path_safe(path).is_some_and(|p| p.is_file())
    }

    fn name(&self) -> &'static str {
        "FilesystemVault"
    }
}
