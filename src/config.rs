//! Run configuration.
//!
//! Every run starts from [`Config::default`], which reproduces the fixed file
//! names and author spellings of a plain `bib-publications` invocation. A TOML
//! file can override any section, and the CLI applies its flags on top.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Target author must have at least one name spelling")]
    NoAuthorSpellings,

    #[error("Target author name spellings must not be blank")]
    BlankAuthorSpelling,
}

/// Root configuration, optionally loaded from a TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub page: PageConfig,
    pub author: TargetAuthor,
}

/// Input and output file names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// BibTeX source to read.
    pub input: PathBuf,
    /// Filtered, sorted bibliography to write.
    pub bibliography: PathBuf,
    /// Generated Quarto page to write.
    pub page: PathBuf,
    /// Citation style referenced from the page front matter. Not produced here.
    pub csl: String,
}

/// Front matter shown on the generated page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub title: String,
    pub description: String,
}

/// The site owner, as spelled in author fields and rendered references.
///
/// The same spellings drive first-author detection and the highlighting
/// script, in the order they are listed. Build one with [`TargetAuthor::new`]
/// so the list is never empty and holds no blank spelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetAuthor {
    spellings: Vec<String>,
}

// ─── Defaults ──────────────────────────────────────────────

/// Highlight order matters: `Johnson, Emily` must come after `Johnson, Emily K.`.
const DEFAULT_SPELLINGS: &[&str] = &["Johnson, E. K.", "Johnson, Emily K.", "Johnson, Emily"];

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: PathsConfig::default(),
            page: PageConfig::default(),
            author: TargetAuthor::default(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("references.bib"),
            bibliography: PathBuf::from("articles.bib"),
            page: PathBuf::from("publications.qmd"),
            csl: "apa.csl".to_string(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Publications".to_string(),
            description: "Published research and scholarly works".to_string(),
        }
    }
}

impl Default for TargetAuthor {
    fn default() -> Self {
        Self {
            spellings: DEFAULT_SPELLINGS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

// ─── Loading ───────────────────────────────────────────────

impl Config {
    /// Loads a configuration from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(content)?;
        config.author = TargetAuthor::new(config.author.spellings)?;
        Ok(config)
    }
}

impl TargetAuthor {
    /// Builds a target author from its name spellings, in highlight order.
    ///
    /// # Errors
    ///
    /// Fails if the list is empty or any spelling is blank: an empty
    /// spelling would match every name.
    pub fn new<I, S>(spellings: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let spellings: Vec<String> = spellings.into_iter().map(Into::into).collect();
        if spellings.is_empty() {
            return Err(ConfigError::NoAuthorSpellings);
        }
        if spellings.iter().any(|s| s.trim().is_empty()) {
            return Err(ConfigError::BlankAuthorSpelling);
        }
        Ok(Self { spellings })
    }

    pub fn spellings(&self) -> &[String] {
        &self.spellings
    }

    /// Returns true if `name` contains any of the spellings.
    pub fn matches(&self, name: &str) -> bool {
        self.spellings
            .iter()
            .any(|spelling| name.contains(spelling.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_file_names() {
        let config = Config::default();
        assert_eq!(config.paths.input, PathBuf::from("references.bib"));
        assert_eq!(config.paths.bibliography, PathBuf::from("articles.bib"));
        assert_eq!(config.paths.page, PathBuf::from("publications.qmd"));
        assert_eq!(config.paths.csl, "apa.csl");
    }

    #[test]
    fn test_default_author_matches_both_variants() {
        let author = TargetAuthor::default();
        assert!(author.matches("Johnson, Emily"));
        assert!(author.matches("Johnson, Emily Kate"));
        assert!(author.matches("Johnson, E. K."));
        assert!(!author.matches("Johnson, E."));
        assert!(!author.matches("Smith, J."));
    }

    #[test]
    fn test_from_toml_partial_keeps_defaults() {
        // Given: a config that only overrides the page title
        let content = r#"
[page]
title = "Papers"
"#;

        // When: we parse it
        let config = Config::from_toml(content).unwrap();

        // Then: untouched sections keep their defaults
        assert_eq!(config.page.title, "Papers");
        assert_eq!(
            config.page.description,
            "Published research and scholarly works"
        );
        assert_eq!(config.paths, PathsConfig::default());
        assert_eq!(config.author, TargetAuthor::default());
    }

    #[test]
    fn test_from_toml_author_and_paths() {
        let content = r#"
[paths]
input = "library.bib"
csl = "ieee.csl"

[author]
spellings = ["Doe, J.", "Doe, Jane"]
"#;

        let config = Config::from_toml(content).unwrap();

        assert_eq!(config.paths.input, PathBuf::from("library.bib"));
        assert_eq!(config.paths.bibliography, PathBuf::from("articles.bib"));
        assert_eq!(config.paths.csl, "ieee.csl");
        assert_eq!(config.author.spellings(), ["Doe, J.", "Doe, Jane"]);
    }

    #[test]
    fn test_from_toml_empty_spellings_rejected() {
        let content = r#"
[author]
spellings = []
"#;

        let err = Config::from_toml(content).unwrap_err();
        assert!(matches!(err, ConfigError::NoAuthorSpellings));
    }

    #[test]
    fn test_from_toml_blank_spelling_rejected() {
        // Given: an author list with an empty and a whitespace-only spelling
        let content = r#"
[author]
spellings = ["Doe, J.", ""]
"#;

        // When: we parse it
        let err = Config::from_toml(content).unwrap_err();

        // Then: the blank spelling is refused
        assert!(matches!(err, ConfigError::BlankAuthorSpelling));
        let err = Config::from_toml("[author]\nspellings = [\"  \"]\n").unwrap_err();
        assert!(matches!(err, ConfigError::BlankAuthorSpelling));
    }

    #[test]
    fn test_target_author_new_validates() {
        assert!(matches!(
            TargetAuthor::new(Vec::<String>::new()),
            Err(ConfigError::NoAuthorSpellings)
        ));
        assert!(matches!(
            TargetAuthor::new([""]),
            Err(ConfigError::BlankAuthorSpelling)
        ));
        let author = TargetAuthor::new(["Doe, J."]).unwrap();
        assert!(author.matches("Doe, J."));
        assert!(!author.matches("Roe, R."));
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(
            TargetAuthor::default(),
            TargetAuthor::new(DEFAULT_SPELLINGS.iter().copied()).unwrap()
        );
    }

    #[test]
    fn test_from_toml_invalid() {
        let err = Config::from_toml("[paths\ninput = ").unwrap_err();
        assert!(matches!(err, ConfigError::TomlError(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/bib-publications.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[paths]\npage = \"index.qmd\"\n").unwrap();
        file.flush().unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.paths.page, PathBuf::from("index.qmd"));
    }
}
