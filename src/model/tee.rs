use std::fmt;

/// The tee sets published for the course, in scorecard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tee {
    Gold,
    Blue,
    White,
    Red,
}

impl Tee {
    pub const ALL: [Tee; 4] = [Tee::Gold, Tee::Blue, Tee::White, Tee::Red];

    /// 1-based position in [`Tee::ALL`].
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Tee::Gold => 1,
            Tee::Blue => 2,
            Tee::White => 3,
            Tee::Red => 4,
        }
    }

    /// The name as it appears in the yardage line, e.g. `Gold: 450`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Tee::Gold => "Gold",
            Tee::Blue => "Blue",
            Tee::White => "White",
            Tee::Red => "Red",
        }
    }
}

impl fmt::Display for Tee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_follow_scorecard_order() {
        for (idx, tee) in Tee::ALL.iter().enumerate() {
            assert_eq!(usize::from(tee.number()), idx + 1);
        }
        assert_eq!(Tee::Red.to_string(), "Red");
    }
}
