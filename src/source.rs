//! Bibliography source loading.

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading the bibliography source.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),
}

/// Loads the raw text of a BibTeX file.
///
/// The content is returned untouched so entries can be re-emitted verbatim.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid UTF-8.
pub fn load_source(path: &Path) -> Result<String, SourceError> {
    let content = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "loaded bibliography source");
    Ok(content)
}
