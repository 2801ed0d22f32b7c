//! Short titles for repeat citations

use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_ARTICLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(?:the|a|an)\s+").unwrap());

const MAX_WORDS: usize = 3;

/// Characters that end the main title
fn is_title_break(c: char) -> bool {
    matches!(c, ':' | '—' | '–')
}

/// Derive the short title used in later footnotes.
///
/// Drops a leading article, then keeps at most three words. A word carrying a
/// colon or dash within those three ends the short title early, with the
/// punctuation removed.
pub fn short_title(title: &str) -> String {
    let stripped = LEADING_ARTICLE.replace(title, "");
    let cleaned = stripped.trim();
    if cleaned.is_empty() {
        return title.to_string();
    }

    let words: Vec<&str> = cleaned.split_whitespace().collect();
    if words.len() <= MAX_WORDS {
        return cleaned.to_string();
    }

    let mut short = Vec::with_capacity(MAX_WORDS);
    for word in words.iter().take(MAX_WORDS) {
        if let Some(pos) = word.find(is_title_break) {
            let mut clean = word.to_string();
            clean.remove(pos);
            // A bare dash between words contributes nothing
            if !clean.is_empty() {
                short.push(clean);
            }
            break;
        }
        short.push(word.to_string());
    }

    short.join(" ")
}
