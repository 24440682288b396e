//! Honorific extraction from passenger names.
//!
//! `"Braund, Mr. Owen Harris"` yields `"Mr"`, which is then grouped into one of
//! five classes: `Mr`, `Miss`, `Mrs`, `Master`, `Rare`.

use once_cell::sync::Lazy;
use regex::Regex;

/// A word preceded by a space and followed by a period.
static TITLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" ([A-Za-z]+)\.").expect("title pattern is a valid regex"));

/// Group for titles that are rare or not recognised.
pub const RARE: &str = "Rare";

/// Titles explicitly grouped as [`RARE`].
pub const RARE_TITLES: [&str; 11] = [
    "Dr", "Rev", "Col", "Major", "Lady", "Countess", "Jonkheer", "Don", "Dona", "Capt", "Sir",
];

/// First title token in `name`, if any.
pub fn extract_title(name: &str) -> Option<&str> {
    TITLE_PATTERN
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Map a raw title onto its group. Unknown titles are [`RARE`].
pub fn group_title(title: &str) -> &'static str {
    match title {
        "Mr" => "Mr",
        "Miss" | "Mlle" | "Ms" => "Miss",
        "Mrs" | "Mme" => "Mrs",
        "Master" => "Master",
        _ => RARE,
    }
}

/// Grouped title for a possibly absent name.
pub fn title_of(name: Option<&str>) -> &'static str {
    name.and_then(extract_title).map_or(RARE, group_title)
}
