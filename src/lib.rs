//! bib-publications: extract journal articles from a BibTeX file and build a
//! publications page.
//!
//! This library provides functionality to:
//! - Split a BibTeX file into raw entries and keep the `@article` ones
//! - Sort articles by year and count first-author publications
//! - Write a cleaned bibliography and a Quarto page with statistics

pub mod articles;
pub mod config;
pub mod extract;
pub mod output;
pub mod page;
pub mod source;

pub use articles::{ArticleList, Stats};
pub use config::{Config, TargetAuthor};
pub use extract::{classify, extract_articles, split_entries, Article};
pub use output::{render_bibliography, write_outputs};
pub use page::{render_page, PageSettings};
pub use source::load_source;

/// Extracts and sorts the articles of a bibliography.
pub fn collect_articles(text: &str, author: &TargetAuthor) -> ArticleList {
    ArticleList::sorted(extract_articles(text, author))
}
