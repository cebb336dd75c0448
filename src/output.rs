//! Output generation for the filtered bibliography and the publications page.
//!
//! Both files are truncated and rewritten in place. The bibliography is
//! written first; a failure while writing the page leaves it already updated.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::articles::{ArticleList, Stats};
use crate::config::Config;
use crate::page::{render_page, PageSettings};

/// Errors that can occur when writing output files.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Concatenates the raw entries, each followed by one blank line.
///
/// # Returns
///
/// The bibliography text; empty when there are no articles.
pub fn render_bibliography(articles: &ArticleList) -> String {
    let mut output = String::new();
    for article in articles {
        output.push_str(&article.raw);
        output.push_str("\n\n");
    }
    output
}

/// Writes the bibliography file, replacing any previous content.
pub fn write_bibliography(path: &Path, articles: &ArticleList) -> Result<(), OutputError> {
    write_file(path, &render_bibliography(articles))?;
    tracing::info!(path = %path.display(), articles = articles.len(), "wrote bibliography");
    Ok(())
}

/// Renders and writes the publications page, replacing any previous content.
pub fn write_page(config: &Config, stats: Stats) -> Result<(), OutputError> {
    let bibliography = bibliography_reference(&config.paths.bibliography, &config.paths.page);
    let settings = PageSettings {
        title: &config.page.title,
        description: &config.page.description,
        bibliography: &bibliography,
        csl: &config.paths.csl,
    };

    let path = &config.paths.page;
    write_file(path, &render_page(&settings, stats, &config.author))?;
    tracing::info!(path = %path.display(), "wrote publications page");
    Ok(())
}

/// Writes both artifacts, bibliography first.
///
/// # Returns
///
/// The statistics embedded in the page.
pub fn write_outputs(config: &Config, articles: &ArticleList) -> Result<Stats, OutputError> {
    let stats = articles.stats();
    write_bibliography(&config.paths.bibliography, articles)?;
    write_page(config, stats)?;
    Ok(stats)
}

/// Path of the bibliography as seen from the page's directory.
///
/// Falls back to the configured path when the bibliography lives elsewhere.
fn bibliography_reference(bibliography: &Path, page: &Path) -> String {
    let relative = page
        .parent()
        .and_then(|dir| bibliography.strip_prefix(dir).ok())
        .unwrap_or(bibliography);
    relative.to_string_lossy().into_owned()
}

fn write_file(path: &Path, content: &str) -> Result<(), OutputError> {
    fs::write(path, content).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}
