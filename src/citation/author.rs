//! Author and editor name parsing following SBL conventions
//!
//! One person is cited in full, two are joined with "and", three or more
//! collapse to "First et al." in footnotes while the bibliography spells
//! everyone out with only the first name inverted.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::metadata::BookMetadata;

static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());
static AND_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s+and\s+").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Name forms needed by the three citation variants
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedAuthor {
    /// Footnote form: "A", "A and B", or "A et al."
    pub full: String,
    /// Surname of the first person, for later footnotes
    pub last: String,
    /// Bibliography form with the first person inverted
    pub first_last: String,
    pub count: usize,
}

/// One person split into given names and surname
#[derive(Debug)]
struct Person<'a> {
    name: &'a str,
    given: Option<&'a str>,
    surname: &'a str,
}

impl<'a> Person<'a> {
    fn parse(name: &'a str) -> Self {
        match name.rsplit_once(' ') {
            Some((given, surname)) => Self {
                name,
                given: Some(given),
                surname,
            },
            None => Self {
                name,
                given: None,
                surname: name,
            },
        }
    }

    /// "Surname, Given"
    fn inverted(&self) -> String {
        match self.given {
            Some(given) => format!("{}, {}", self.surname, given),
            None => self.name.to_string(),
        }
    }
}

impl ParsedAuthor {
    /// Parse the author field, falling back to the editor field with editor
    /// suffixes when no author is recorded
    pub fn from_book(book: &BookMetadata) -> Self {
        match (book.author.as_deref(), book.editor.as_deref()) {
            (Some(author), _) if !author.trim().is_empty() => parse_author(author, false),
            (_, Some(editor)) => parse_author(editor, true),
            _ => Self::default(),
        }
    }
}

/// Collapse markup and whitespace so names split cleanly on " and "
fn normalize_names(raw: &str) -> String {
    let text = LINE_BREAK.replace_all(raw, " ");
    let text = AND_SEPARATOR.replace_all(&text, " and ");
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

/// Parse one or more names joined by "and"
pub fn parse_author(raw: &str, is_editor: bool) -> ParsedAuthor {
    let normalized = normalize_names(raw);
    let people: Vec<Person> = normalized
        .split(" and ")
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(Person::parse)
        .collect();

    let count = people.len();
    let suffix = match (is_editor, count) {
        (false, _) => "",
        (true, 1) => ", ed.",
        (true, _) => ", eds.",
    };

    let (lead, full, first_last) = match people.as_slice() {
        [] => return ParsedAuthor::default(),
        [only] => (only, only.name.to_string(), only.inverted()),
        [a, b] => (
            a,
            format!("{} and {}", a.name, b.name),
            format!("{}, and {}", a.inverted(), b.name),
        ),
        [lead, rest @ ..] => {
            let mut bib = vec![lead.inverted()];
            bib.extend(rest.iter().map(|p| p.name.to_string()));
            (lead, format!("{} et al.", lead.name), bib.join(", "))
        }
    };

    ParsedAuthor {
        full: format!("{}{}", full, suffix),
        last: lead.surname.to_string(),
        first_last: format!("{}{}", first_last, suffix),
        count,
    }
}
