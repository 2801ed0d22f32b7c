//! Page numbers typed by the user, substituted into the footnote placeholders

use super::builder::{Citation, PAGE_PLACEHOLDER, PAGE_RANGE_PLACEHOLDER};
use super::CitationResult;

/// A start/end page pair as entered; "xx" or blank means unset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRange {
    start: Option<String>,
    end: Option<String>,
}

fn page_value(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(PAGE_PLACEHOLDER))
        .map(String::from)
}

impl PageRange {
    pub fn new(start: Option<&str>, end: Option<&str>) -> Self {
        Self {
            start: page_value(start),
            end: page_value(end),
        }
    }

    pub fn is_unset(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// "45", "45–47", or the "xx–xx" placeholder when no page is known
    pub fn render(&self) -> String {
        match (&self.start, &self.end) {
            (None, None) => PAGE_RANGE_PLACEHOLDER.to_string(),
            (Some(page), None) | (None, Some(page)) => page.clone(),
            (Some(start), Some(end)) if start == end => start.clone(),
            (Some(start), Some(end)) => format!("{}–{}", start, end),
        }
    }
}

/// Replace the last occurrence of `placeholder`, which always sits in the
/// locator at the end of a footnote
fn replace_last(text: &str, placeholder: &str, value: &str) -> String {
    match text.rfind(placeholder) {
        Some(pos) => format!(
            "{}{}{}",
            &text[..pos],
            value,
            &text[pos + placeholder.len()..]
        ),
        None => text.to_string(),
    }
}

fn substitute(citation: &Citation, placeholder: &str, value: &str) -> Citation {
    Citation {
        html: replace_last(&citation.html, placeholder, value),
        plain: replace_last(&citation.plain, placeholder, value),
    }
}

impl CitationResult {
    /// Fill the footnote page placeholders; the bibliography has none
    pub fn with_pages(&self, pages: &PageRange) -> CitationResult {
        if pages.is_unset() {
            return self.clone();
        }
        let range = pages.render();

        CitationResult {
            first_footnote: substitute(&self.first_footnote, PAGE_RANGE_PLACEHOLDER, &range),
            later_footnote: substitute(&self.later_footnote, PAGE_PLACEHOLDER, &range),
            bibliography: self.bibliography.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::citation::CitationEngine;
    use crate::metadata::BookMetadata;

    #[test]
    fn test_render_page_ranges() {
        assert_eq!(PageRange::new(None, None).render(), "xx–xx");
        assert_eq!(PageRange::new(Some("XX"), Some(" ")).render(), "xx–xx");
        assert_eq!(PageRange::new(Some("45"), None).render(), "45");
        assert_eq!(PageRange::new(Some("45"), Some("xx")).render(), "45");
        assert_eq!(PageRange::new(Some(""), Some("47")).render(), "47");
        assert_eq!(PageRange::new(Some("45"), Some("45")).render(), "45");
        assert_eq!(PageRange::new(Some("45"), Some("47")).render(), "45–47");
    }

    #[test]
    fn test_replace_last_targets_locator() {
        assert_eq!(replace_last("Maxx, *Title*, xx.", "xx", "12"), "Maxx, *Title*, 12.");
        assert_eq!(replace_last("no placeholder", "xx", "12"), "no placeholder");
    }

    fn sample_citations() -> CitationResult {
        CitationEngine::default().format(&BookMetadata {
            title: Some("Romans, vol. 2".to_string()),
            author: Some("John Smith".to_string()),
            publisher: Some("Word".to_string()),
            place: Some("Dallas".to_string()),
            year: Some("1988".to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn test_with_pages_fills_footnotes() {
        let citations = sample_citations().with_pages(&PageRange::new(Some("45"), Some("47")));
        assert_eq!(
            citations.first_footnote.plain,
            "John Smith, *Romans, vol. 2* (Dallas: Word, 1988), 45–47."
        );
        assert_eq!(
            citations.first_footnote.html,
            "John Smith, <em>Romans, vol. 2</em> (Dallas: Word, 1988), 45–47."
        );
        assert_eq!(citations.later_footnote.plain, "Smith, *Romans, vol. 2*, 2:45–47.");
    }

    #[test]
    fn test_with_pages_leaves_bibliography_alone() {
        let original = sample_citations();
        let citations = original.with_pages(&PageRange::new(Some("45"), None));
        assert_eq!(citations.bibliography, original.bibliography);
    }

    #[test]
    fn test_unset_pages_keep_placeholders() {
        let original = sample_citations();
        assert_eq!(original.with_pages(&PageRange::default()), original);
    }
}
