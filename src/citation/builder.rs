//! Assembly of the three SBL citation forms

use serde::Serialize;

use super::author::ParsedAuthor;
use super::title::VolumeInfo;
use crate::metadata::BookMetadata;

pub const PLACE_PLACEHOLDER: &str = "Place";
pub const PUBLISHER_PLACEHOLDER: &str = "Publisher";
pub const YEAR_PLACEHOLDER: &str = "Year";

/// Page placeholder in the first footnote
pub const PAGE_RANGE_PLACEHOLDER: &str = "xx–xx";
/// Page placeholder in the later footnote
pub const PAGE_PLACEHOLDER: &str = "xx";

/// How a title is emphasized in one rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Html,
    Markdown,
}

impl Emphasis {
    pub fn wrap(self, text: &str) -> String {
        match self {
            Emphasis::Html => format!("<em>{}</em>", text),
            Emphasis::Markdown => format!("*{}*", text),
        }
    }
}

/// One citation in its HTML and plain-text renderings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Citation {
    pub html: String,
    pub plain: String,
}

impl Citation {
    fn render(render: impl Fn(Emphasis) -> String) -> Self {
        Self {
            html: render(Emphasis::Html),
            plain: render(Emphasis::Markdown),
        }
    }

    pub fn get(&self, emphasis: Emphasis) -> &str {
        match emphasis {
            Emphasis::Html => &self.html,
            Emphasis::Markdown => &self.plain,
        }
    }
}

/// Place, publisher, and year with placeholders for missing values
fn imprint(book: &BookMetadata) -> String {
    format!(
        "{}: {}, {}",
        book.place.as_deref().unwrap_or(PLACE_PLACEHOLDER),
        book.publisher.as_deref().unwrap_or(PUBLISHER_PLACEHOLDER),
        book.year.as_deref().unwrap_or(YEAR_PLACEHOLDER),
    )
}

/// "Author, *Title*, Series (Place: Publisher, Year), xx–xx."
pub fn first_footnote(
    title: &str,
    book: &BookMetadata,
    author: &ParsedAuthor,
    series: &str,
) -> Citation {
    let author_part = if author.full.is_empty() {
        String::new()
    } else {
        format!("{}, ", author.full)
    };
    let series_part = if series.is_empty() {
        String::new()
    } else {
        format!(", {}", series)
    };
    let imprint = imprint(book);

    Citation::render(|em| {
        format!(
            "{}{}{} ({}), {}.",
            author_part,
            em.wrap(title),
            series_part,
            imprint,
            PAGE_RANGE_PLACEHOLDER
        )
    })
}

/// "Surname, *Short Title*, xx." or "Surname, *Short Title*, 2:xx." for a
/// volume of a multivolume work
pub fn later_footnote(
    author: &ParsedAuthor,
    short_title: &str,
    volume: Option<&VolumeInfo>,
) -> Citation {
    let author_part = if author.last.is_empty() {
        String::new()
    } else {
        format!("{}, ", author.last)
    };
    let locator = match volume {
        Some(v) if v.has_volume => format!("{}:{}", v.number, PAGE_PLACEHOLDER),
        _ => PAGE_PLACEHOLDER.to_string(),
    };

    Citation::render(|em| format!("{}{}, {}.", author_part, em.wrap(short_title), locator))
}

/// "Surname, Given. *Title*. Series. Place: Publisher, Year."
pub fn bibliography(
    title: &str,
    book: &BookMetadata,
    author: &ParsedAuthor,
    series: &str,
) -> Citation {
    let author_part = match author.first_last.as_str() {
        "" => String::new(),
        name if name.ends_with('.') => format!("{} ", name),
        name => format!("{}. ", name),
    };
    let series_part = if series.is_empty() {
        String::new()
    } else {
        format!(" {}.", series)
    };
    let imprint = imprint(book);

    Citation::render(|em| {
        format!(
            "{}{}.{} {}.",
            author_part,
            em.wrap(title),
            series_part,
            imprint
        )
    })
}
