//! Quarto publications page generation.
//!
//! The page is a fixed document: front matter pointing at the generated
//! bibliography, a static style sheet, the statistics block, the `#refs`
//! marker Quarto expands into the formatted reference list, and a small
//! script that bolds the target author's name inside that list.

use crate::articles::Stats;
use crate::config::TargetAuthor;

/// Front matter and file references for a page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSettings<'a> {
    pub title: &'a str,
    pub description: &'a str,
    /// Bibliography file name, as Quarto should resolve it from the page.
    pub bibliography: &'a str,
    /// Citation style file name.
    pub csl: &'a str,
}

/// Shown in place of the h-index, which is never computed.
const H_INDEX_PLACEHOLDER: &str = "—";

/// Static style sheet for the statistics block and reference list.
const STYLE_SHEET: &str = r#"<style>
/* Publication statistics styling - compact version */
.pub-stats {
  margin-bottom: 2em;
  padding-bottom: 1em;
  border-bottom: 2px solid #e0e0e0;
}

.stat-grid {
  display: flex;
  gap: 2em;
  flex-wrap: wrap;
}

.stat-item {
  display: inline-flex;
  align-items: baseline;
  gap: 0.5em;
}

.stat-number {
  font-size: 1.5em;
  font-weight: 700;
  color: #2c5282;
}

.stat-label {
  font-size: 0.9em;
  color: #666;
}

/* Enhanced publication list styling */
.references {
  margin-left: 0;
  padding-left: 0;
}

.references .csl-entry {
  margin-bottom: 1em;
  padding-bottom: 0.75em;
  border-bottom: 1px solid #e0e0e0;
  line-height: 1.6;
}

.references .csl-entry:last-child {
  border-bottom: none;
}

/* Make journal names stand out */
.references .csl-entry em {
  font-style: italic;
  color: #2c5282;
  font-weight: 500;
}

/* Bold author name - will be done via JavaScript */
.references .csl-entry strong {
  color: #000;
  font-weight: 700;
}

/* Year and volume styling */
.references .csl-entry a {
  color: #2563eb;
  text-decoration: none;
}

.references .csl-entry a:hover {
  text-decoration: underline;
}
</style>"#;

/// Renders the complete `.qmd` document.
pub fn render_page(settings: &PageSettings<'_>, stats: Stats, author: &TargetAuthor) -> String {
    let mut page = String::new();

    page.push_str(&front_matter(settings));
    page.push('\n');

    page.push_str("```{=html}\n");
    page.push_str(STYLE_SHEET);
    page.push_str("\n```\n\n");

    page.push_str(&stats_block(stats));
    page.push('\n');

    page.push_str("::: {#refs}\n:::\n\n");

    page.push_str("```{=html}\n");
    page.push_str(&highlight_script(author));
    page.push_str("\n```\n");

    page
}

fn front_matter(settings: &PageSettings<'_>) -> String {
    format!(
        "---\ntitle: {}\ndescription: {}\nbibliography: {}\ncsl: {}\nnocite: '@*'\n---\n",
        yaml_quote(settings.title),
        yaml_quote(settings.description),
        settings.bibliography,
        settings.csl
    )
}

fn stats_block(stats: Stats) -> String {
    let items = [
        (stats.total.to_string(), "publications"),
        (stats.first_author.to_string(), "first author"),
        (H_INDEX_PLACEHOLDER.to_string(), "h-index"),
    ];

    let items: Vec<String> = items
        .iter()
        .map(|(number, label)| {
            format!(
                "<div class=\"stat-item\">\n<span class=\"stat-number\">{}</span>\n<span class=\"stat-label\">{}</span>\n</div>\n",
                number, label
            )
        })
        .collect();

    format!(
        "::: {{.pub-stats}}\n::: {{.stat-grid}}\n{}:::\n:::\n",
        items.join("\n")
    )
}

/// Builds the script that wraps each author spelling in `<strong>`.
///
/// Replacements run in the order the spellings are listed. A spelling that is
/// a prefix of an earlier one gets a `(?!<)` lookahead so it does not match
/// right before a closing tag.
pub fn highlight_script(author: &TargetAuthor) -> String {
    let spellings = author.spellings();
    let primary = spellings.first().map(String::as_str).unwrap_or_default();

    let mut script = format!(
        "<script>\n\
         document.addEventListener('DOMContentLoaded', function() {{\n  \
         // Bold author name ({}) in bibliography\n  \
         const refs = document.getElementById('refs');\n  \
         if (refs) {{\n    \
         refs.innerHTML = refs.innerHTML",
        primary
    );

    for (i, spelling) in spellings.iter().enumerate() {
        let shadowed = spellings[..i]
            .iter()
            .any(|earlier| earlier.starts_with(spelling.as_str()));
        script.push_str(&format!(
            "\n      .replace(/{}{}/g, '<strong>{}</strong>')",
            js_regex_escape(spelling),
            if shadowed { "(?!<)" } else { "" },
            js_replacement_escape(spelling)
        ));
    }

    script.push_str(";\n  }\n});\n</script>");
    script
}

/// Escapes a literal for use inside a JavaScript regex literal.
fn js_regex_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(
            c,
            '\\' | '^' | '$' | '.' | '|' | '?' | '*' | '+' | '(' | ')' | '[' | ']' | '{' | '}' | '/'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Escapes text for a single-quoted JavaScript replacement string.
fn js_replacement_escape(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('$', "$$")
}

fn yaml_quote(text: &str) -> String {
    format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
}
