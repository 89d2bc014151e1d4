//! Cell classification codes.

/// Canonical classification of a single grid position.
///
/// Codes: `0 = Empty`, `1 = Wall`, `2 = Start`, `3 = Goal`. Rendering-only
/// states (visited, path) are not part of the canonical grid; they live in
/// the search crate's overlay projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CellKind {
    Empty,
    Wall,
    Start,
    Goal,
}

impl CellKind {
    /// Decode a raw cell code. Returns `None` for codes outside `0..=3`.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Empty),
            1 => Some(Self::Wall),
            2 => Some(Self::Start),
            3 => Some(Self::Goal),
            _ => None,
        }
    }

    /// The raw cell code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Wall => 1,
            Self::Start => 2,
            Self::Goal => 3,
        }
    }

    /// Whether a search may step onto this cell.
    #[must_use]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Wall => "wall",
            Self::Start => "start",
            Self::Goal => "goal",
        }
    }
}

impl std::fmt::Display for CellKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
