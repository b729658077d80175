//! Parsers for the site convention encoded in directory-number descriptions.
//!
//! Descriptions follow the shape `Location - First Last - extension`, e.g.
//! `Main Office - John Smith - 1234`. Two independent patterns pull that
//! apart; each returns `None` when the description does not follow the
//! convention, and the caller drops the record from the corresponding step.

use crate::domain::model::NamePair;
use regex::Regex;
use std::sync::LazyLock;

// Anchored: the location prefix must start the description.
static LOCATION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([A-Za-z ]+) - ").unwrap());

// Unanchored: the name may appear anywhere between two ` - ` separators.
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" - ([A-Za-z]+) ([A-Za-z]+) - ").unwrap());

/// Extracts the location prefix, if the description starts with
/// `<letters and spaces> - `.
pub fn location_of(description: &str) -> Option<&str> {
    LOCATION_RE
        .captures(description)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extracts a `First Last` name bounded by ` - ` separators, if present.
pub fn name_pair_of(description: &str) -> Option<NamePair> {
    NAME_RE.captures(description).map(|caps| NamePair {
        first: caps[1].to_string(),
        last: caps[2].to_string(),
    })
}
