//! Title cleanup: drop series text the catalog appends to titles, and detect
//! the volume marker of multivolume works

use once_cell::sync::Lazy;
use regex::Regex;

use super::series::strip_ser_suffix;

static TRAILING_PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,:\-]+$").unwrap());

static VOLUME_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:vol\.?|volume)\s*(\d+)").unwrap());

/// Volume number found in a title like "Romans, vol. 2"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeInfo {
    pub has_volume: bool,
    pub number: String,
}

/// Remove the series name from the title when the catalog embedded it there.
///
/// Tries, in order, a trailing ": Series" / "- Series", a bracketed
/// "(Series)" / "[Series]" anywhere, and a trailing ", Series". Only the first
/// form found is stripped.
pub fn clean_title(title: &str, series: Option<&str>) -> String {
    let series = match series.map(strip_ser_suffix) {
        Some(s) if !s.is_empty() => s,
        _ => return title.to_string(),
    };
    if title.is_empty() {
        return String::new();
    }

    let escaped = regex::escape(series);
    let patterns = [
        format!(r"(?i)[:\-]\s*{}$", escaped),
        format!(r"(?i)[\(\[]\s*{}\s*[\)\]]", escaped),
        format!(r"(?i),\s*{}$", escaped),
    ];

    let mut cleaned = title.to_string();
    for pattern in &patterns {
        // The series text is escaped, so the pattern always compiles
        let Ok(re) = Regex::new(pattern) else {
            continue;
        };
        if re.is_match(&cleaned) {
            cleaned = re.replace_all(&cleaned, "").trim().to_string();
            break;
        }
    }

    TRAILING_PUNCTUATION
        .replace(cleaned.trim(), "")
        .trim()
        .to_string()
}

/// Find the first "vol. N" / "vol N" / "volume N" marker in a title
pub fn extract_volume(title: &str) -> Option<VolumeInfo> {
    VOLUME_MARKER.captures(title).map(|caps| VolumeInfo {
        has_volume: true,
        number: caps[1].to_string(),
    })
}
