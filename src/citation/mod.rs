//! SBL citation formatting
//!
//! Turns a [`BookMetadata`] record into first-footnote, later-footnote, and
//! bibliography citations. Every stage is a pure function of its input, so
//! formatting the same record twice yields the same output.

mod author;
mod builder;
mod pages;
mod series;
mod short_title;
mod title;

pub use builder::{Citation, Emphasis};
pub use pages::PageRange;
pub use series::SeriesAbbreviations;

use author::ParsedAuthor;
use short_title::short_title;
use title::{clean_title, extract_volume};

use serde::Serialize;
use tracing::{debug, warn};

use crate::metadata::BookMetadata;

/// The three SBL citation forms for one book
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationResult {
    pub first_footnote: Citation,
    pub later_footnote: Citation,
    pub bibliography: Citation,
}

/// Formats citations using a configurable series table
#[derive(Debug, Clone, Default)]
pub struct CitationEngine {
    series: SeriesAbbreviations,
}

impl CitationEngine {
    pub fn new(series: SeriesAbbreviations) -> Self {
        Self { series }
    }

    pub fn format(&self, book: &BookMetadata) -> CitationResult {
        let book = book.normalized();
        let author = ParsedAuthor::from_book(&book);

        let missing = missing_fields(&book, &author);
        if !missing.is_empty() {
            warn!(
                missing = %missing.join(", "),
                title = book.title.as_deref().unwrap_or(""),
                "Missing required citation fields; placeholders will be used"
            );
        }

        let title = clean_title(
            book.title.as_deref().unwrap_or_default(),
            book.series.as_deref(),
        );
        let volume = extract_volume(&title);
        let short = short_title(&title);
        let series = self
            .series
            .abbreviate(book.series.as_deref().unwrap_or_default());

        debug!(
            title = %title,
            short_title = %short,
            series = %series,
            authors = author.count,
            volume = volume.as_ref().map(|v| v.number.as_str()),
            "Parsed citation components"
        );

        CitationResult {
            first_footnote: builder::first_footnote(&title, &book, &author, &series),
            later_footnote: builder::later_footnote(&author, &short, volume.as_ref()),
            bibliography: builder::bibliography(&title, &book, &author, &series),
        }
    }
}

/// Required fields absent from the record, with the author judged by what
/// survives name parsing
fn missing_fields(book: &BookMetadata, author: &ParsedAuthor) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if author.full.is_empty() {
        missing.push("author/editor");
    }
    missing.extend(book.missing_required());
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn format_citations(book: &BookMetadata) -> CitationResult {
        CitationEngine::default().format(book)
    }

    fn romans() -> BookMetadata {
        BookMetadata {
            title: Some("Romans".to_string()),
            author: Some("John Smith".to_string()),
            series: Some("Word Biblical Commentary".to_string()),
            publisher: Some("Word".to_string()),
            place: Some("Dallas".to_string()),
            year: Some("1988".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_end_to_end_bibliography() {
        let citations = format_citations(&romans());
        assert_eq!(
            citations.bibliography.plain,
            "Smith, John. *Romans*. WBC. Dallas: Word, 1988."
        );
        assert_eq!(
            citations.first_footnote.plain,
            "John Smith, *Romans*, WBC (Dallas: Word, 1988), xx–xx."
        );
        assert_eq!(citations.later_footnote.plain, "Smith, *Romans*, xx.");
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let book = romans();
        assert_eq!(format_citations(&book), format_citations(&book));
    }

    #[test]
    fn test_catalog_record_end_to_end() {
        let book = BookMetadata {
            title: Some(
                "Mark, Volume 1: New International Greek Testament Commentary".to_string(),
            ),
            series: Some("New International Greek Testament Commentary Ser.".to_string()),
            editor: Some("Jane Doe<br>and Richard Roe".to_string()),
            publisher: Some("Eerdmans".to_string()),
            print_date: Some("2002-10-01".to_string()),
            ..Default::default()
        };
        let citations = format_citations(&book);

        assert_eq!(
            citations.first_footnote.plain,
            "Jane Doe and Richard Roe, eds., *Mark, Volume 1*, NIGTC (Place: Eerdmans, 2002), xx–xx."
        );
        assert_eq!(citations.later_footnote.plain, "Doe, *Mark, Volume 1*, 1:xx.");
        assert_eq!(
            citations.bibliography.html,
            "Doe, Jane, and Richard Roe, eds. <em>Mark, Volume 1</em>. NIGTC. Place: Eerdmans, 2002."
        );
    }

    #[test]
    fn test_empty_record_degrades_to_placeholders() {
        let citations = format_citations(&BookMetadata::default());
        assert_eq!(
            citations.bibliography.plain,
            "**. Place: Publisher, Year."
        );
        assert_eq!(citations.later_footnote.plain, "**, xx.");
    }

    #[test]
    fn test_markup_only_author_reported_missing() {
        let book = BookMetadata {
            author: Some("<br>".to_string()),
            title: Some("Romans".to_string()),
            publisher: Some("Word".to_string()),
            year: Some("1988".to_string()),
            ..Default::default()
        };
        let author = ParsedAuthor::from_book(&book);
        assert_eq!(missing_fields(&book, &author), vec!["author/editor"]);
        assert_eq!(
            format_citations(&book).bibliography.plain,
            "*Romans*. Place: Word, 1988."
        );
    }

    #[test]
    fn test_missing_fields_complete_record() {
        let book = romans().normalized();
        let author = ParsedAuthor::from_book(&book);
        assert!(missing_fields(&book, &author).is_empty());
        assert_eq!(
            missing_fields(&BookMetadata::default(), &ParsedAuthor::default()),
            vec!["author/editor", "title", "publisher", "year"]
        );
    }

    #[test]
    fn test_engine_uses_series_overrides() {
        let mut overrides = BTreeMap::new();
        overrides.insert("Word Biblical Commentary".to_string(), "WordBC".to_string());
        let engine = CitationEngine::new(SeriesAbbreviations::with_overrides(overrides));
        let citations = engine.format(&romans());
        assert_eq!(
            citations.bibliography.plain,
            "Smith, John. *Romans*. WordBC. Dallas: Word, 1988."
        );
    }

    #[test]
    fn test_json_keys_are_camel_case() {
        let json = serde_json::to_value(format_citations(&romans())).unwrap();
        assert!(json.get("firstFootnote").is_some());
        assert!(json.get("laterFootnote").is_some());
        assert_eq!(
            json["bibliography"]["html"],
            "Smith, John. <em>Romans</em>. WBC. Dallas: Word, 1988."
        );
    }
}
