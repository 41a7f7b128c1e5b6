mod hole;
mod row;
mod tee;

pub use hole::{HoleRecord, ParsedHoleYardages, UNKNOWN_LABEL, hole_number_from_label};
pub use row::{Column, ColumnKind, CourseIdentity, HoleCells, NineTotals, TeeRow, columns};
pub use tee::Tee;

/// Written wherever the page doesn't give us a value.
pub const NOT_AVAILABLE: &str = "N/A";

pub const HOLE_COUNT: u8 = 18;
