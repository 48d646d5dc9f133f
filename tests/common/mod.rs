pub mod fixtures;

use deck::FilesystemVault;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// A vault in a temporary directory, removed when dropped.
pub struct TestVault {
    pub dir: TempDir,
}

impl TestVault {
    pub fn new() -> std::io::Result<Self> {
        Ok(Self { dir: tempfile::tempdir()? })
    }

    /// Creates a vault holding `files` (vault path, content).
    pub fn with_files<I, P, C>(files: I) -> std::io::Result<Self>
    where
        I: IntoIterator<Item = (P, C)>,
        P: AsRef<str>,
        C: AsRef<str>,
    {
        let vault = Self::new()?;
        for (path, content) in files {
            vault.write(path.as_ref(), content.as_ref())?;
        }
        Ok(vault)
    }

    pub fn write(&self, path: &str, content: &str) -> std::io::Result<()> {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(full, content)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn open(&self) -> Result<FilesystemVault, deck::ResourceError> {
        FilesystemVault::open(self.root())
    }
}
