//! Year ordering and authorship statistics.

use crate::extract::Article;

/// Aggregate counts shown on the publications page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Number of articles written to the bibliography.
    pub total: usize,
    /// Number of those articles with the target author listed first.
    pub first_author: usize,
}

/// Articles ordered most recent first.
///
/// Articles sharing a year keep their order from the source file. Undated
/// articles (year 0) come last.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleList {
    articles: Vec<Article>,
}

impl ArticleList {
    /// Sorts `articles` by year, descending. The sort is stable.
    pub fn sorted(mut articles: Vec<Article>) -> Self {
        articles.sort_by(|a, b| b.year.cmp(&a.year));
        Self { articles }
    }

    pub fn as_slice(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Article> {
        self.articles.iter()
    }

    pub fn stats(&self) -> Stats {
        Stats {
            total: self.articles.len(),
            first_author: self.articles.iter().filter(|a| a.first_author).count(),
        }
    }
}

impl<'a> IntoIterator for &'a ArticleList {
    type Item = &'a Article;
    type IntoIter = std::slice::Iter<'a, Article>;

    fn into_iter(self) -> Self::IntoIter {
        self.articles.iter()
    }
}
