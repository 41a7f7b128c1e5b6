use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

use super::HOLE_COUNT;

/// Label used when a tab has no readable heading.
pub const UNKNOWN_LABEL: &str = "unknown";

/// What one hole tab gave us, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoleRecord {
    pub label: String,
    pub hole_number: Option<u8>,
    /// Par text as shown on the page; kept as text so odd values survive.
    pub par: Option<String>,
    pub raw_yardage_line: Option<String>,
}

impl HoleRecord {
    #[must_use]
    pub fn new(label: &str, par: Option<String>, raw_yardage_line: Option<String>) -> Self {
        Self {
            label: label.to_string(),
            hole_number: hole_number_from_label(label),
            par,
            raw_yardage_line,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedHoleYardages {
    pub hole_number: u8,
    pub par: Option<String>,
    /// Tee name -> yardage text.
    pub yardages: HashMap<String, String>,
}

/// `"Hole 7"` -> `Some(7)`. Anything outside 1..=18 is `None`.
///
/// # Panics
///
/// Will panic if the regex is invalid
#[must_use]
pub fn hole_number_from_label(label: &str) -> Option<u8> {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| {
        Regex::new(r"^\s*Hole\s+(\d{1,2})\s*$")
            .expect("Invalid regex pattern - this is a programming error")
    });

    let number = re.captures(label)?.get(1)?.as_str().parse::<u8>().ok()?;
    (1..=HOLE_COUNT).contains(&number).then_some(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hole_labels() {
        assert_eq!(hole_number_from_label("Hole 1"), Some(1));
        assert_eq!(hole_number_from_label(" Hole 18 "), Some(18));
        assert_eq!(hole_number_from_label("Hole 19"), None);
        assert_eq!(hole_number_from_label("Hole 0"), None);
        assert_eq!(hole_number_from_label(UNKNOWN_LABEL), None);
        assert_eq!(hole_number_from_label("Hole"), None);
    }
}
