use deck_core::ConfigError;
use deck_traits::ResourceError;
use thiserror::Error;

/// Every failure the vault loader and the command line can report.
#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Vault access failed: {0}")]
    Resource(#[from] ResourceError),

    #[error("View configuration is invalid: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Frontmatter is invalid: {0}")]
    Frontmatter(String),
}

impl From<serde_yaml::Error> for DeckError {
    fn from(e: serde_yaml::Error) -> Self {
        DeckError::Frontmatter(e.to_string())
    }
}
