//! Article files: TOML on disk, validated on load.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::content::{Article, ValidationError};

/// Errors raised while loading an article file.
///
/// Displayable as-is in both the CLI and the reader's status bar.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid article TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid article: {0}")]
    Invalid(#[from] ValidationError),
}

/// Parse and validate an article from TOML text.
pub fn parse_article(text: &str) -> Result<Article, ContentError> {
    let article: Article = toml::from_str(text)?;
    article.validate()?;
    Ok(article)
}

/// Read, parse and validate an article file.
pub fn load_article(path: &Path) -> Result<Article, ContentError> {
    let text = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let article = parse_article(&text)?;
    tracing::debug!(
        path = %path.display(),
        entries = article.breakdown.len(),
        "loaded article"
    );
    Ok(article)
}
