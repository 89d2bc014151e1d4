//! Integer grid coordinates.

/// A `(row, col)` grid coordinate. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Shift by a signed `(dr, dc)` delta.
    ///
    /// Returns `None` when either coordinate would become negative or
    /// overflow. Upper bounds are the grid's concern, not the position's.
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }

    /// Absolute row and column distance to `other`.
    #[must_use]
    pub fn abs_delta(self, other: Self) -> (usize, usize) {
        (self.row.abs_diff(other.row), self.col.abs_diff(other.col))
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
