//! Movement topology and step costs.

/// Cost of a north/south/east/west step.
pub const ORTHOGONAL_STEP_COST: f64 = 1.0;

/// Cost of a diagonal step.
///
/// Fixed literal, not `std::f64::consts::SQRT_2`: path costs must agree with
/// other implementations that use the same rounded constant.
pub const DIAGONAL_STEP_COST: f64 = 1.414;

/// A single move: signed row/column delta plus its cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub dr: isize,
    pub dc: isize,
    pub cost: f64,
}

impl Step {
    const fn orthogonal(dr: isize, dc: isize) -> Self {
        Self {
            dr,
            dc,
            cost: ORTHOGONAL_STEP_COST,
        }
    }

    const fn diagonal(dr: isize, dc: isize) -> Self {
        Self {
            dr,
            dc,
            cost: DIAGONAL_STEP_COST,
        }
    }

    #[must_use]
    pub const fn is_diagonal(&self) -> bool {
        self.dr != 0 && self.dc != 0
    }
}

/// Expansion order: N, S, W, E, then NW, NE, SW, SE.
///
/// The order is observable (it decides creation order, hence tie-breaks),
/// so it must not change.
static EIGHT_WAY_STEPS: [Step; 8] = [
    Step::orthogonal(-1, 0),
    Step::orthogonal(1, 0),
    Step::orthogonal(0, -1),
    Step::orthogonal(0, 1),
    Step::diagonal(-1, -1),
    Step::diagonal(-1, 1),
    Step::diagonal(1, -1),
    Step::diagonal(1, 1),
];

/// Movement topology, fixed for the duration of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Movement {
    /// N, S, W, E.
    #[default]
    FourWay,
    /// The four orthogonal moves plus the four diagonals.
    EightWay,
}

impl Movement {
    #[must_use]
    pub const fn from_allow_diagonal(allow_diagonal: bool) -> Self {
        if allow_diagonal {
            Self::EightWay
        } else {
            Self::FourWay
        }
    }

    #[must_use]
    pub const fn allows_diagonal(self) -> bool {
        matches!(self, Self::EightWay)
    }

    /// Steps in expansion order.
    #[must_use]
    pub fn steps(self) -> &'static [Step] {
        match self {
            Self::FourWay => &EIGHT_WAY_STEPS[..4],
            Self::EightWay => &EIGHT_WAY_STEPS,
        }
    }

    /// True iff `(dr, dc)` is a single legal move under this topology.
    #[must_use]
    pub fn permits(self, dr: isize, dc: isize) -> bool {
        self.steps().iter().any(|s| s.dr == dr && s.dc == dc)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FourWay => "4-way",
            Self::EightWay => "8-way",
        }
    }
}
