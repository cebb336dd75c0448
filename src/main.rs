//! CLI for bib-publications - Extract journal articles and build a publications page.

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use bib_publications::{collect_articles, load_source, write_outputs, Config, TargetAuthor};

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

/// Extract journal articles from a BibTeX file and generate a publications page
#[derive(Parser)]
#[command(name = "bib-publications")]
#[command(version)]
#[command(after_help = "\
Examples:
  bib-publications
  bib-publications -i library.bib -b site/articles.bib -p site/publications.qmd
  bib-publications -a 'Doe, J.' -a 'Doe, Jane'
  bib-publications --config publications.toml

With no options, reads references.bib and writes articles.bib and
publications.qmd in the current directory.")]
struct Cli {
    /// BibTeX file to read
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Filtered bibliography to write
    #[arg(short, long)]
    bib_out: Option<PathBuf>,

    /// Publications page to write
    #[arg(short, long)]
    page_out: Option<PathBuf>,

    /// Citation style file referenced from the page
    #[arg(long)]
    csl: Option<String>,

    /// Page title
    #[arg(long)]
    title: Option<String>,

    /// Page description
    #[arg(long)]
    description: Option<String>,

    /// Author name spelling to count and highlight (repeatable, in highlight order)
    #[arg(short, long = "author", value_name = "NAME")]
    authors: Vec<String>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Cli {
    /// Builds the run configuration: defaults, then the config file, then flags.
    fn into_config(self) -> Result<Config, AppError> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .map_err(|e| AppError::ConfigFile(format!("'{}': {}", path.display(), e)))?,
            None => Config::default(),
        };

        if let Some(input) = self.input {
            config.paths.input = input;
        }
        if let Some(bib_out) = self.bib_out {
            config.paths.bibliography = bib_out;
        }
        if let Some(page_out) = self.page_out {
            config.paths.page = page_out;
        }
        if let Some(csl) = self.csl {
            config.paths.csl = csl;
        }
        if let Some(title) = self.title {
            config.page.title = title;
        }
        if let Some(description) = self.description {
            config.page.description = description;
        }
        if !self.authors.is_empty() {
            config.author = TargetAuthor::new(self.authors)
                .map_err(|e| AppError::ConfigFile(format!("--author: {}", e)))?;
        }

        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// AppError: semantic exit codes
// ---------------------------------------------------------------------------

enum AppError {
    /// Exit 10: input file not found / unreadable
    InputFile(String),
    /// Exit 11: configuration file or flag invalid
    ConfigFile(String),
    /// Exit 12: cannot write an output file
    OutputFile(String),
}

impl AppError {
    fn exit_code(&self) -> i32 {
        match self {
            AppError::InputFile(_) => 10,
            AppError::ConfigFile(_) => 11,
            AppError::OutputFile(_) => 12,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InputFile(msg) => {
                write!(f, "{}\n  hint: verify the file path is correct", msg)
            }
            AppError::ConfigFile(msg) => {
                write!(
                    f,
                    "{}\n  hint: the config file must be TOML with optional [paths], [page] and [author] sections, and author spellings must not be blank",
                    msg
                )
            }
            AppError::OutputFile(msg) => {
                write!(
                    f,
                    "{}\n  hint: check that the output directory exists and is writable",
                    msg
                )
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

fn run() -> Result<(), AppError> {
    let config = Cli::parse().into_config()?;

    println!("Extracting journal articles...");

    // 1. Read the bibliography
    let input = &config.paths.input;
    let text = load_source(input)
        .map_err(|e| AppError::InputFile(format!("'{}': {}", input.display(), e)))?;

    // 2. Keep articles, most recent first
    let articles = collect_articles(&text, &config.author);

    // 3. Write articles.bib, then the page
    let stats =
        write_outputs(&config, &articles).map_err(|e| AppError::OutputFile(e.to_string()))?;

    println!(
        "Complete! Extracted {} journal articles (sorted by year, most recent first)",
        stats.total
    );

    Ok(())
}
