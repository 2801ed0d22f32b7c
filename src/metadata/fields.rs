use serde::{Deserialize, Serialize};

/// Book metadata as scraped from an e-book catalog detail page.
///
/// Every field accepts either its snake_case name or the label the catalog
/// prints next to it, so a raw `{"Title": ..., "Print Pub Date": ...}` record
/// deserializes directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BookMetadata {
    #[serde(default, alias = "Title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, alias = "Series", skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    #[serde(default, alias = "Edition", skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
    #[serde(default, alias = "Author", skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, alias = "Editor", skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
    #[serde(default, alias = "Publisher", skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, alias = "Place", skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    #[serde(default, alias = "Year", skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, alias = "Print Pub Date", skip_serializing_if = "Option::is_none")]
    pub print_date: Option<String>,
    #[serde(default, alias = "Ebook Pub Date", skip_serializing_if = "Option::is_none")]
    pub ebook_date: Option<String>,
}

impl BookMetadata {
    /// Returns a copy with blank fields dropped and catalog-derived fields filled in.
    ///
    /// The year comes from the leading four digits of the print date when no
    /// explicit year was given. An ebook date of "N/A" is treated as absent.
    pub fn normalized(&self) -> Self {
        let mut book = Self {
            title: non_blank(&self.title),
            series: non_blank(&self.series),
            edition: non_blank(&self.edition),
            author: non_blank(&self.author),
            editor: non_blank(&self.editor),
            publisher: non_blank(&self.publisher),
            place: non_blank(&self.place),
            year: non_blank(&self.year),
            print_date: non_blank(&self.print_date),
            ebook_date: non_blank(&self.ebook_date),
        };

        if book.year.is_none() {
            book.year = book.print_date.as_deref().and_then(leading_year);
        }

        if book.ebook_date.as_deref() == Some("N/A") {
            book.ebook_date = None;
        }

        book
    }

    /// Names of required title and imprint fields that are missing.
    ///
    /// Author presence depends on name parsing and is checked by the
    /// citation engine.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_blank(&self.title) {
            missing.push("title");
        }
        if is_blank(&self.publisher) {
            missing.push("publisher");
        }
        if is_blank(&self.year) {
            missing.push("year");
        }
        missing
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// "1988-05-01" -> "1988"
fn leading_year(date: &str) -> Option<String> {
    let digits: String = date.chars().take(4).collect();
    if digits.len() == 4 && digits.chars().all(|c| c.is_ascii_digit()) {
        Some(digits)
    } else {
        None
    }
}
