use super::{HOLE_COUNT, NOT_AVAILABLE, Tee};

/// How a column is stored in the relational table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Integer,
    Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
}

impl Column {
    fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self { name: name.into(), kind }
    }
}

const IDENTITY_COLUMNS: [(&str, ColumnKind); 23] = [
    ("cCourseNumber", ColumnKind::Text),
    ("CourseTeeNumber", ColumnKind::Text),
    ("CourseName", ColumnKind::Text),
    ("StreetAddress", ColumnKind::Text),
    ("City", ColumnKind::Text),
    ("StateorRegion", ColumnKind::Text),
    ("Zip", ColumnKind::Text),
    ("County", ColumnKind::Text),
    ("Country", ColumnKind::Text),
    ("PhoneNumber", ColumnKind::Text),
    ("FaxNumber", ColumnKind::Text),
    ("URL", ColumnKind::Text),
    ("YearBuiltFounded", ColumnKind::Text),
    ("Architect", ColumnKind::Text),
    ("StatusPublicPrivateResort", ColumnKind::Text),
    ("GuestPolicy", ColumnKind::Text),
    ("TotalHoles", ColumnKind::Integer),
    ("TeeNumber", ColumnKind::Integer),
    ("TeeName", ColumnKind::Text),
    ("Par_Overall", ColumnKind::Integer),
    ("Holes_Total", ColumnKind::Integer),
    ("Rating", ColumnKind::Decimal),
    ("Slope", ColumnKind::Integer),
];

const TOTAL_COLUMNS: [&str; 5] = [
    "Tot_Out_Par",
    "Tot_Out_Ydg",
    "Tot_In_Par",
    "Tot_In_Ydg",
    "Length_Total",
];

/// Output columns in the order both sinks write them (no id / timestamp).
#[must_use]
pub fn columns() -> Vec<Column> {
    let mut cols: Vec<Column> = IDENTITY_COLUMNS
        .iter()
        .map(|(name, kind)| Column::new(*name, *kind))
        .collect();
    for hole in 1..=HOLE_COUNT {
        cols.push(Column::new(format!("Par_{hole}"), ColumnKind::Integer));
        cols.push(Column::new(format!("Hole_{hole}"), ColumnKind::Integer));
        cols.push(Column::new(format!("Hdcp_{hole}"), ColumnKind::Text));
    }
    cols.extend(TOTAL_COLUMNS.iter().map(|name| Column::new(*name, ColumnKind::Integer)));
    cols
}

/// Course level fields. The page only gives us the name and url; the rest
/// stay at the sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseIdentity {
    pub course_number: String,
    pub course_name: String,
    pub street_address: String,
    pub city: String,
    pub state_or_region: String,
    pub zip: String,
    pub county: String,
    pub country: String,
    pub phone_number: String,
    pub fax_number: String,
    pub url: String,
    pub year_built_founded: String,
    pub architect: String,
    pub status: String,
    pub guest_policy: String,
    pub total_holes: u8,
}

impl CourseIdentity {
    #[must_use]
    pub fn new(course_name: &str, url: &str) -> Self {
        let na = || NOT_AVAILABLE.to_string();
        Self {
            course_number: na(),
            course_name: course_name.to_string(),
            street_address: na(),
            city: na(),
            state_or_region: na(),
            zip: na(),
            county: na(),
            country: na(),
            phone_number: na(),
            fax_number: na(),
            url: url.to_string(),
            year_built_founded: na(),
            architect: na(),
            status: na(),
            guest_policy: na(),
            total_holes: HOLE_COUNT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoleCells {
    pub par: String,
    pub yardage: String,
    pub handicap: String,
}

impl Default for HoleCells {
    fn default() -> Self {
        Self {
            par: NOT_AVAILABLE.to_string(),
            yardage: NOT_AVAILABLE.to_string(),
            handicap: NOT_AVAILABLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NineTotals {
    pub out_par: i64,
    pub out_yardage: i64,
    pub in_par: i64,
    pub in_yardage: i64,
}

impl NineTotals {
    #[must_use]
    pub fn length_total(&self) -> i64 {
        self.out_yardage.saturating_add(self.in_yardage)
    }
}

/// One output row: a course played from one tee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeeRow {
    pub course: CourseIdentity,
    pub tee: Tee,
    pub par_overall: String,
    pub rating: String,
    pub slope: String,
    pub holes: [HoleCells; HOLE_COUNT as usize],
    pub totals: NineTotals,
}

impl TeeRow {
    #[must_use]
    pub fn course_tee_number(&self) -> String {
        format!("{}-{}", self.course.course_number, self.tee)
    }

    /// Cells for one hole, 1-based.
    #[must_use]
    pub fn hole(&self, hole_number: u8) -> Option<&HoleCells> {
        self.holes.get(usize::from(hole_number).checked_sub(1)?)
    }

    /// Cell values lined up with [`columns`].
    #[must_use]
    pub fn values(&self) -> Vec<String> {
        let c = &self.course;
        let mut out = vec![
            c.course_number.clone(),
            self.course_tee_number(),
            c.course_name.clone(),
            c.street_address.clone(),
            c.city.clone(),
            c.state_or_region.clone(),
            c.zip.clone(),
            c.county.clone(),
            c.country.clone(),
            c.phone_number.clone(),
            c.fax_number.clone(),
            c.url.clone(),
            c.year_built_founded.clone(),
            c.architect.clone(),
            c.status.clone(),
            c.guest_policy.clone(),
            c.total_holes.to_string(),
            self.tee.number().to_string(),
            self.tee.name().to_string(),
            self.par_overall.clone(),
            c.total_holes.to_string(),
            self.rating.clone(),
            self.slope.clone(),
        ];
        for cells in &self.holes {
            out.push(cells.par.clone());
            out.push(cells.yardage.clone());
            out.push(cells.handicap.clone());
        }
        out.extend([
            self.totals.out_par.to_string(),
            self.totals.out_yardage.to_string(),
            self.totals.in_par.to_string(),
            self.totals.in_yardage.to_string(),
            self.totals.length_total().to_string(),
        ]);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_line_up_with_columns() {
        let row = TeeRow {
            course: CourseIdentity::new("Lake Jovita South", "https://example.com/"),
            tee: Tee::Blue,
            par_overall: NOT_AVAILABLE.to_string(),
            rating: NOT_AVAILABLE.to_string(),
            slope: NOT_AVAILABLE.to_string(),
            holes: std::array::from_fn(|_| HoleCells::default()),
            totals: NineTotals {
                out_par: 36,
                out_yardage: 3100,
                in_par: 36,
                in_yardage: 3200,
            },
        };
        let cols = columns();
        let values = row.values();
        assert_eq!(cols.len(), 23 + 18 * 3 + 5);
        assert_eq!(values.len(), cols.len());

        let get = |name: &str| {
            let idx = cols.iter().position(|c| c.name == name).unwrap();
            values[idx].as_str()
        };
        assert_eq!(get("CourseTeeNumber"), "N/A-Blue");
        assert_eq!(get("TeeNumber"), "2");
        assert_eq!(get("TeeName"), "Blue");
        assert_eq!(get("Holes_Total"), "18");
        assert_eq!(get("Hdcp_18"), NOT_AVAILABLE);
        assert_eq!(get("Length_Total"), "6300");
        assert_eq!(row.hole(0), None);
        assert_eq!(row.hole(19), None);
        assert!(row.hole(18).is_some());
    }
}
