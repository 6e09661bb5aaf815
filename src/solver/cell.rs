use std::fmt::Display;

/// Tri-state value of a single grid cell.
///
/// Every cell starts out `Unknown` and is driven towards `Filled` or `Empty`
/// by the propagation loop; a cell never changes once determined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Cell {
    #[default]
    Unknown,
    Empty,
    Filled,
}

impl Cell {
    #[must_use]
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }

    #[must_use]
    pub const fn is_filled(self) -> bool {
        matches!(self, Self::Filled)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "?"),
            Self::Empty => write!(f, "."),
            Self::Filled => write!(f, "#"),
        }
    }
}
