use crate::model::{
    CourseIdentity, HOLE_COUNT, HoleCells, NOT_AVAILABLE, NineTotals, ParsedHoleYardages, Tee,
    TeeRow,
};
use std::collections::HashMap;

const FRONT_NINE_LAST: u8 = 9;

/// Best-effort integer for the totals; anything that doesn't parse counts as 0.
/// Sums saturate at `i64::MAX`.
#[must_use]
pub fn parse_or_zero(value: &str) -> i64 {
    value.trim().parse::<i64>().unwrap_or(0)
}

/// One row per tee in [`Tee::ALL`] order, each covering holes 1..=18.
///
/// Holes missing from `holes` and tees missing from a hole's yardages are
/// stored as [`NOT_AVAILABLE`] and count as 0 in the totals.
#[must_use]
pub fn build_tee_rows(
    course: &CourseIdentity,
    holes: &HashMap<u8, ParsedHoleYardages>,
) -> Vec<TeeRow> {
    Tee::ALL
        .iter()
        .map(|tee| build_tee_row(course, *tee, holes))
        .collect()
}

#[must_use]
pub fn build_tee_row(
    course: &CourseIdentity,
    tee: Tee,
    holes: &HashMap<u8, ParsedHoleYardages>,
) -> TeeRow {
    let empty = ParsedHoleYardages::default();
    let mut totals = NineTotals::default();

    let cells: [HoleCells; HOLE_COUNT as usize] = std::array::from_fn(|idx| {
        let hole_number = u8::try_from(idx + 1).unwrap_or(HOLE_COUNT);
        let hole = holes.get(&hole_number).unwrap_or(&empty);

        let par = hole.par.as_deref().unwrap_or(NOT_AVAILABLE);
        let yardage = hole
            .yardages
            .get(tee.name())
            .map_or(NOT_AVAILABLE, String::as_str);

        if hole_number <= FRONT_NINE_LAST {
            totals.out_par = totals.out_par.saturating_add(parse_or_zero(par));
            totals.out_yardage = totals.out_yardage.saturating_add(parse_or_zero(yardage));
        } else {
            totals.in_par = totals.in_par.saturating_add(parse_or_zero(par));
            totals.in_yardage = totals.in_yardage.saturating_add(parse_or_zero(yardage));
        }

        HoleCells {
            par: par.to_string(),
            yardage: yardage.to_string(),
            handicap: NOT_AVAILABLE.to_string(),
        }
    });

    TeeRow {
        course: course.clone(),
        tee,
        par_overall: NOT_AVAILABLE.to_string(),
        rating: NOT_AVAILABLE.to_string(),
        slope: NOT_AVAILABLE.to_string(),
        holes: cells,
        totals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_or_zero_swallows_junk() {
        assert_eq!(parse_or_zero(" 412 "), 412);
        assert_eq!(parse_or_zero(NOT_AVAILABLE), 0);
        assert_eq!(parse_or_zero("4.5"), 0);
        assert_eq!(parse_or_zero(""), 0);
    }

    #[test]
    fn no_holes_still_gives_four_full_rows() {
        let course = CourseIdentity::new(NOT_AVAILABLE, "https://example.com/");
        let rows = build_tee_rows(&course, &HashMap::new());
        assert_eq!(rows.len(), 4);
        for (row, tee) in rows.iter().zip(Tee::ALL) {
            assert_eq!(row.tee, tee);
            assert_eq!(row.totals, NineTotals::default());
            assert!(row.holes.iter().all(|h| *h == HoleCells::default()));
        }
    }
}
