use crate::model::{HoleRecord, ParsedHoleYardages};
use log::warn;
use std::collections::HashMap;

/// Split `"Gold: 450 | Blue: 410"` into `{Gold: "450", Blue: "410"}`.
///
/// A segment needs exactly one `:`; anything else is skipped.
#[must_use]
pub fn parse_yardages(raw_line: Option<&str>) -> HashMap<String, String> {
    let mut yardages = HashMap::new();
    let Some(line) = raw_line else {
        return yardages;
    };
    for segment in line.split('|') {
        let parts: Vec<&str> = segment.trim().split(':').collect();
        if let [tee, yardage] = parts.as_slice() {
            yardages.insert(tee.trim().to_string(), yardage.trim().to_string());
        }
    }
    yardages
}

#[must_use]
pub fn parse_hole(record: &HoleRecord) -> Option<ParsedHoleYardages> {
    Some(ParsedHoleYardages {
        hole_number: record.hole_number?,
        par: record.par.clone(),
        yardages: parse_yardages(record.raw_yardage_line.as_deref()),
    })
}

/// Key the scraped holes by hole number. Records without a usable hole
/// number are dropped; a later record for the same hole wins.
#[must_use]
pub fn index_holes(records: &[HoleRecord]) -> HashMap<u8, ParsedHoleYardages> {
    let mut by_hole = HashMap::new();
    for record in records {
        match parse_hole(record) {
            Some(parsed) => {
                if by_hole.insert(parsed.hole_number, parsed).is_some() {
                    warn!("Hole label '{}' seen twice; keeping the later tab", record.label);
                }
            }
            None => warn!(
                "Skipping tab labelled '{}': not a hole number between 1 and 18",
                record.label
            ),
        }
    }
    by_hole
}
