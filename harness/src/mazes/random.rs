//! Seeded random maze generator.
//!
//! Each cell becomes a wall with probability `wall_density`, drawn in
//! row-major order from a `ChaCha8Rng` seeded with `seed`. Start is pinned to
//! the top-left corner and goal to the bottom-right; walls orthogonally
//! adjacent to either endpoint are cleared. The result is not guaranteed to
//! be solvable.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wayfinder_kernel::grid::{CellKind, Position};

use crate::contract::{MazeSourceError, MazeSourceV1};

/// Invalid generator parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerateError {
    #[error("maze dimensions must be at least 1x1 (got {rows}x{cols})")]
    ZeroDimension { rows: usize, cols: usize },
    #[error("a 1x1 maze cannot hold distinct start and goal cells")]
    SingleCell,
    #[error("wall density must lie in [0, 1] (got {density})")]
    DensityOutOfRange { density: f64 },
}

/// Generator parameters. Same parameters, same maze.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RandomMaze {
    pub rows: usize,
    pub cols: usize,
    /// Probability that a cell is a wall before endpoint clearing.
    pub wall_density: f64,
    pub seed: u64,
}

impl Default for RandomMaze {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 15,
            wall_density: 0.25,
            seed: 0,
        }
    }
}

impl RandomMaze {
    #[must_use]
    pub const fn new(rows: usize, cols: usize, wall_density: f64, seed: u64) -> Self {
        Self {
            rows,
            cols,
            wall_density,
            seed,
        }
    }

    /// The 15×20, 25%-wall layout shown alongside the predefined mazes.
    #[must_use]
    pub const fn large(seed: u64) -> Self {
        Self::new(15, 20, 0.25, seed)
    }

    /// Check the parameters without generating anything.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] for a zero dimension, a 1×1 maze, or a
    /// density outside `[0, 1]` (NaN included).
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GenerateError::ZeroDimension {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.rows == 1 && self.cols == 1 {
            return Err(GenerateError::SingleCell);
        }
        if !(0.0..=1.0).contains(&self.wall_density) {
            return Err(GenerateError::DensityOutOfRange {
                density: self.wall_density,
            });
        }
        Ok(())
    }

    /// Generate the cell codes.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if [`RandomMaze::validate`] fails.
    pub fn generate(&self) -> Result<Vec<Vec<u8>>, GenerateError> {
        self.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut codes: Vec<Vec<u8>> = (0..self.rows)
            .map(|_| {
                (0..self.cols)
                    .map(|_| {
                        if rng.random::<f64>() < self.wall_density {
                            CellKind::Wall.code()
                        } else {
                            CellKind::Empty.code()
                        }
                    })
                    .collect()
            })
            .collect();

        let start = Position::new(0, 0);
        let goal = Position::new(self.rows - 1, self.cols - 1);
        codes[start.row][start.col] = CellKind::Start.code();
        codes[goal.row][goal.col] = CellKind::Goal.code();

        for endpoint in [start, goal] {
            for (dr, dc) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
                let Some(n) = endpoint.offset(dr, dc) else {
                    continue;
                };
                if let Some(code) = codes.get_mut(n.row).and_then(|row| row.get_mut(n.col)) {
                    if *code == CellKind::Wall.code() {
                        *code = CellKind::Empty.code();
                    }
                }
            }
        }

        Ok(codes)
    }
}

impl MazeSourceV1 for RandomMaze {
    #[allow(clippy::unnecessary_literal_bound)]
    fn maze_id(&self) -> &str {
        "random"
    }

    fn cell_codes(&self) -> Result<Vec<Vec<u8>>, MazeSourceError> {
        self.generate().map_err(|e| MazeSourceError::EncodeFailure {
            detail: e.to_string(),
        })
    }
}
