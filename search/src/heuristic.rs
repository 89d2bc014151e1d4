//! Heuristic distance estimates.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use wayfinder_kernel::grid::Position;

use crate::error::SearchError;

/// Distance estimate from a position to the goal, fixed for one search.
///
/// | Kind | Estimate | Admissible under |
/// |---|---|---|
/// | `Manhattan` | `dr + dc` | 4-way only |
/// | `Euclidean` | `sqrt(dr² + dc²)` | 4-way; 8-way up to the `√2 / 1.414` diagonal rounding |
/// | `Chebyshev` | `max(dr, dc)` | 4-way and 8-way |
///
/// Chebyshev is not tightened for the `1.414` diagonal cost. Explored-node
/// counts are part of the observable contract and depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicKind {
    #[default]
    Manhattan,
    Euclidean,
    Chebyshev,
}

impl HeuristicKind {
    /// Every supported heuristic, in reporting order.
    pub const ALL: [Self; 3] = [Self::Manhattan, Self::Euclidean, Self::Chebyshev];

    /// Estimated remaining cost from `from` to `to`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn estimate(self, from: Position, to: Position) -> f64 {
        let (dr, dc) = from.abs_delta(to);
        let (dr, dc) = (dr as f64, dc as f64);
        match self {
            Self::Manhattan => dr + dc,
            Self::Euclidean => (dr * dr + dc * dc).sqrt(),
            Self::Chebyshev => dr.max(dc),
        }
    }

    /// Stable lowercase name used in stats and artifacts.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Manhattan => "manhattan",
            Self::Euclidean => "euclidean",
            Self::Chebyshev => "chebyshev",
        }
    }
}

impl std::fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HeuristicKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|h| h.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SearchError::UnknownHeuristic {
                name: s.to_string(),
            })
    }
}
