//! BibTeX entry extraction.
//!
//! Splits a bibliography into raw entry blocks and pulls out the few fields
//! needed for sorting and statistics. This is pattern matching, not parsing:
//! an entry runs from its `@type{` marker to the first `}` that starts a line,
//! with no brace-depth tracking.
//!
//! Known limitations:
//! - a braced value whose closing `}` begins a line ends the entry early;
//! - an entry containing `@` in its body (an e-mail address, say) is skipped.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::TargetAuthor;

/// `@word{` up to the first newline immediately followed by `}`.
static ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@\w+\{[^@]+?\n\}").unwrap());

static TYPE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@(\w+)\{").unwrap());

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"date\s*=\s*\{([0-9]{4})").unwrap());

static AUTHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"author\s*=\s*\{([^}]+)\}").unwrap());

/// The entry type kept by [`extract_articles`].
pub const ARTICLE_TYPE: &str = "article";

/// Separator between names in a BibTeX author list.
const AUTHOR_SEPARATOR: &str = " and ";

/// A journal article retained from the source bibliography.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    /// Publication year from the `date` field, or 0 when absent.
    pub year: u32,
    /// The entry exactly as it appeared in the source.
    pub raw: String,
    /// Whether the first listed author is the target author.
    pub first_author: bool,
}

/// Returns the raw entry blocks of `text` in file order.
///
/// Each block is a verbatim slice of the input, from `@` through the closing `}`.
pub fn split_entries(text: &str) -> Vec<&str> {
    ENTRY_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Returns the entry type as written (e.g. `Article`), if the block has one.
pub fn entry_type(entry: &str) -> Option<&str> {
    TYPE_RE
        .captures(entry)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}

/// Returns the year at the start of the first `date = {YYYY...}` field, or 0.
///
/// Only ASCII digits count; a year written in other decimal scripts reads as 0.
pub fn entry_year(entry: &str) -> u32 {
    DATE_RE
        .captures(entry)
        .and_then(|cap| cap.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Returns the first name of the first `author = {...}` field, trimmed.
pub fn first_author(entry: &str) -> Option<&str> {
    let authors = AUTHOR_RE.captures(entry)?.get(1)?.as_str();
    authors.split(AUTHOR_SEPARATOR).next().map(str::trim)
}

/// Classifies a single raw entry.
///
/// Returns `None` for anything that is not an `article` (compared
/// case-insensitively). Missing fields never fail: the year defaults to 0 and
/// the first-author flag to false.
pub fn classify(entry: &str, author: &TargetAuthor) -> Option<Article> {
    let kind = entry_type(entry)?;
    if kind.to_lowercase() != ARTICLE_TYPE {
        return None;
    }

    Some(Article {
        year: entry_year(entry),
        raw: entry.to_string(),
        first_author: first_author(entry).is_some_and(|name| author.matches(name)),
    })
}

/// Extracts every `article` entry from a bibliography, in file order.
pub fn extract_articles(text: &str, author: &TargetAuthor) -> Vec<Article> {
    let entries = split_entries(text);
    let articles: Vec<Article> = entries
        .iter()
        .filter_map(|entry| classify(entry, author))
        .collect();

    tracing::debug!(
        entries = entries.len(),
        articles = articles.len(),
        dropped = entries.len() - articles.len(),
        "classified bibliography entries"
    );

    articles
}
