//! Cite command - format SBL citations for one book

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::citation::{CitationEngine, CitationResult, Emphasis, PageRange};
use crate::commands::{load_config, open_cache};
use crate::metadata::{read_metadata, BookMetadata};

/// Options for the cite command
pub struct CiteOptions {
    pub file: Option<PathBuf>,
    pub doc_id: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub html: bool,
    pub json: bool,
    pub place: Option<String>,
    pub config: Option<PathBuf>,
    pub cache_db: Option<PathBuf>,
}

/// Run the cite command
pub fn run(opts: &CiteOptions) -> Result<()> {
    let config = load_config(opts.config.as_deref())?;

    let mut book = match (&opts.file, &opts.doc_id) {
        (Some(file), doc_id) => {
            let book = read_metadata(file)?;
            if let Some(id) = doc_id {
                let cache = open_cache(&config, opts.cache_db.as_ref())?;
                cache
                    .put(id, &book)
                    .with_context(|| format!("Failed to cache metadata for document {}", id))?;
            }
            book
        }
        (None, Some(id)) => {
            let cache = open_cache(&config, opts.cache_db.as_ref())?;
            match cache.get(id, config.cache_max_age()?)? {
                Some(book) => book,
                None => bail!(
                    "No cached metadata for document {} (cite a metadata file with --doc-id first)",
                    id
                ),
            }
        }
        (None, None) => bail!("Provide a metadata file or --doc-id"),
    };

    fill_place(&mut book, config.place(opts.place.as_deref()));

    let engine = CitationEngine::new(config.series_abbreviations());
    let pages = PageRange::new(opts.start.as_deref(), opts.end.as_deref());
    let citations = engine.format(&book).with_pages(&pages);

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&citations)?);
        return Ok(());
    }

    let emphasis = if opts.html {
        Emphasis::Html
    } else {
        Emphasis::Markdown
    };
    print_citations(&citations, emphasis);

    Ok(())
}

/// Use the configured place only when the record has none
fn fill_place(book: &mut BookMetadata, place: Option<String>) {
    let has_place = book
        .place
        .as_deref()
        .is_some_and(|p| !p.trim().is_empty());
    if !has_place {
        if let Some(place) = place {
            book.place = Some(place);
        }
    }
}

fn print_citations(citations: &CitationResult, emphasis: Emphasis) {
    let cards = [
        ("First footnote", &citations.first_footnote),
        ("Later footnote", &citations.later_footnote),
        ("Bibliography", &citations.bibliography),
    ];

    for (i, (label, citation)) in cards.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", format!("{}:", label).cyan().bold());
        println!("  {}", citation.get(emphasis));
    }
}
