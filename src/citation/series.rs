//! Standard SBL abbreviations for commentary series

use std::collections::BTreeMap;

/// Known series names and their SBL abbreviations
pub const SERIES_ABBREVIATIONS: &[(&str, &str)] = &[
    ("The Bible Speaks Today", "BST"),
    ("The Bible Speaks Today Ser.", "BST"),
    ("Baker Exegetical Commentary on the New Testament", "BECNT"),
    ("New International Commentary on the New Testament", "NICNT"),
    ("New International Commentary on the Old Testament", "NICOT"),
    ("Pillar New Testament Commentary", "PNTC"),
    ("Tyndale Old Testament Commentaries", "TOTC"),
    ("Tyndale New Testament Commentaries", "TNTC"),
    ("Word Biblical Commentary", "WBC"),
    ("New International Greek Testament Commentary", "NIGTC"),
    ("Anchor Bible", "AB"),
    ("Anchor Yale Bible", "AYB"),
    ("Hermeneia", "Herm"),
    ("International Critical Commentary", "ICC"),
    ("New Cambridge Bible Commentary", "NCBC"),
    ("Zondervan Exegetical Commentary on the New Testament", "ZECNT"),
    ("Zondervan Exegetical Commentary on the Old Testament", "ZECOT"),
    ("Brazos Theological Commentary on the Bible", "BTCB"),
    ("Eerdmans Critical Commentary", "ECC"),
    ("New Testament Library", "NTL"),
    ("Old Testament Library", "OTL"),
    (
        "Understanding the Bible Commentary Series",
        "Understanding the Bible Commentary Series",
    ),
];

/// Drop the " Ser." suffix the catalog appends to series names
pub fn strip_ser_suffix(series: &str) -> &str {
    let trimmed = series.trim_end();
    match trimmed.strip_suffix("Ser.") {
        Some(rest) if rest.ends_with(char::is_whitespace) => rest.trim(),
        _ => series.trim(),
    }
}

fn builtin(name: &str) -> Option<&'static str> {
    SERIES_ABBREVIATIONS
        .iter()
        .find(|(full, _)| *full == name)
        .map(|(_, abbrev)| *abbrev)
}

/// Series lookup table: the built-in abbreviations plus user overrides
#[derive(Debug, Clone, Default)]
pub struct SeriesAbbreviations {
    overrides: BTreeMap<String, String>,
}

impl SeriesAbbreviations {
    pub fn with_overrides(overrides: BTreeMap<String, String>) -> Self {
        Self { overrides }
    }

    /// Abbreviate a series name, falling back to the name without " Ser."
    pub fn abbreviate(&self, series: &str) -> String {
        if series.trim().is_empty() {
            return String::new();
        }

        let canonical = strip_ser_suffix(series);
        let keys = [canonical, series];
        keys.iter()
            .find_map(|key| self.overrides.get(*key).map(String::as_str))
            .or_else(|| keys.iter().find_map(|key| builtin(key)))
            .unwrap_or(canonical)
            .to_string()
    }

    /// All entries, overrides first, in display order
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .overrides
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.extend(
            SERIES_ABBREVIATIONS
                .iter()
                .filter(|(full, _)| !self.overrides.contains_key(*full))
                .copied(),
        );
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format_series(series: &str) -> String {
        SeriesAbbreviations::default().abbreviate(series)
    }

    #[test]
    fn test_known_series_abbreviated() {
        assert_eq!(format_series("Word Biblical Commentary"), "WBC");
        assert_eq!(format_series("Hermeneia"), "Herm");
    }

    #[test]
    fn test_unknown_series_returned_as_is() {
        assert_eq!(format_series("Unlisted Series Name"), "Unlisted Series Name");
    }

    #[test]
    fn test_ser_suffix_stripped() {
        assert_eq!(format_series("Anchor Yale Bible Ser."), "AYB");
        assert_eq!(format_series("Unlisted Series Ser."), "Unlisted Series");
        assert_eq!(format_series("The Bible Speaks Today Ser."), "BST");
    }

    #[test]
    fn test_ser_suffix_requires_separating_space() {
        assert_eq!(strip_ser_suffix("MiSer."), "MiSer.");
        assert_eq!(strip_ser_suffix("  Old Testament Library Ser. "), "Old Testament Library");
    }

    #[test]
    fn test_empty_series() {
        assert_eq!(format_series(""), "");
        assert_eq!(format_series("   "), "");
    }

    #[test]
    fn test_overrides_take_precedence() {
        let mut overrides = BTreeMap::new();
        overrides.insert("Word Biblical Commentary".to_string(), "Word".to_string());
        overrides.insert("Studies in Luke".to_string(), "SiL".to_string());
        let table = SeriesAbbreviations::with_overrides(overrides);

        assert_eq!(table.abbreviate("Word Biblical Commentary"), "Word");
        assert_eq!(table.abbreviate("Studies in Luke Ser."), "SiL");
        assert_eq!(table.abbreviate("Anchor Bible"), "AB");
    }

    #[test]
    fn test_override_on_suffixed_name_beats_builtin() {
        let mut overrides = BTreeMap::new();
        overrides.insert("Anchor Bible Ser.".to_string(), "AnBib".to_string());
        let table = SeriesAbbreviations::with_overrides(overrides);

        assert_eq!(table.abbreviate("Anchor Bible Ser."), "AnBib");
        assert_eq!(table.abbreviate("Anchor Bible"), "AB");
    }

    #[test]
    fn test_entries_lists_overrides_once() {
        let mut overrides = BTreeMap::new();
        overrides.insert("Anchor Bible".to_string(), "AnBib".to_string());
        let table = SeriesAbbreviations::with_overrides(overrides);
        let entries = table.entries();

        assert_eq!(entries[0], ("Anchor Bible", "AnBib"));
        assert_eq!(
            entries.iter().filter(|(full, _)| *full == "Anchor Bible").count(),
            1
        );
        assert_eq!(entries.len(), SERIES_ABBREVIATIONS.len());
    }
}
