//! Grid model: an immutable rectangular map of cell classifications.
//!
//! The grid is the only input the search layer reads. It has no mutation
//! API; annotated copies (visited/path overlays) are produced elsewhere from
//! [`Grid::to_codes`] or [`Grid::cell`].

pub mod cell;
pub mod error;
pub mod position;

pub use cell::CellKind;
pub use error::GridError;
pub use position::Position;

use crate::proof::hash::{canonical_hash, ContentHash};
use crate::proof::hash_domain::HashDomain;

/// A rectangular grid of [`CellKind`] values with located endpoints.
///
/// Invariants (enforced at construction):
/// - `rows >= 1` and `cols >= 1`
/// - every row has exactly `cols` cells
/// - at most one `Start` and at most one `Goal`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Row-major cell storage, `rows * cols` long.
    cells: Vec<CellKind>,
    start: Option<Position>,
    goal: Option<Position>,
}

impl Grid {
    /// Build a grid from raw cell codes (`0=empty, 1=wall, 2=start, 3=goal`).
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Empty`] or [`GridError::Ragged`] for malformed
    /// shapes, [`GridError::UnknownCellCode`] for codes outside `0..=3`, and
    /// [`GridError::DuplicateEndpoint`] for a second start or goal.
    pub fn from_codes(codes: &[Vec<u8>]) -> Result<Self, GridError> {
        let mut rows = Vec::with_capacity(codes.len());
        for (r, row) in codes.iter().enumerate() {
            let kinds = row
                .iter()
                .enumerate()
                .map(|(c, &code)| {
                    CellKind::from_code(code).ok_or(GridError::UnknownCellCode {
                        position: Position::new(r, c),
                        code,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(kinds);
        }
        Self::from_rows(rows)
    }

    /// Build a grid from already-classified rows.
    ///
    /// # Errors
    ///
    /// Same shape and endpoint errors as [`Grid::from_codes`].
    pub fn from_rows(rows: Vec<Vec<CellKind>>) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        let mut start = None;
        let mut goal = None;

        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            for (c, &kind) in row.iter().enumerate() {
                let here = Position::new(r, c);
                let slot = match kind {
                    CellKind::Start => Some(&mut start),
                    CellKind::Goal => Some(&mut goal),
                    CellKind::Empty | CellKind::Wall => None,
                };
                if let Some(slot) = slot {
                    if let Some(first) = *slot {
                        return Err(GridError::DuplicateEndpoint {
                            kind,
                            first,
                            second: here,
                        });
                    }
                    *slot = Some(here);
                }
                cells.push(kind);
            }
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
            start,
            goal,
        })
    }

    /// Parse whitespace-separated code rows, one row per non-blank line.
    ///
    /// ```text
    /// 2 0 0 1 0 3
    /// 0 1 0 1 0 0
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidToken`] for tokens that are not `u8`
    /// integers, plus every error [`Grid::from_codes`] can return.
    pub fn parse_text(text: &str) -> Result<Self, GridError> {
        let mut codes = Vec::new();
        for (line_no, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let row = line
                .split_whitespace()
                .map(|token| {
                    token.parse::<u8>().map_err(|_| GridError::InvalidToken {
                        line: line_no + 1,
                        token: token.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            codes.push(row);
        }
        Self::from_codes(&codes)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (`rows * cols`).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The start marker, located once at construction.
    #[must_use]
    pub fn start(&self) -> Option<Position> {
        self.start
    }

    /// The goal marker, located once at construction.
    #[must_use]
    pub fn goal(&self) -> Option<Position> {
        self.goal
    }

    /// True iff both a start and a goal are present.
    ///
    /// A grid without endpoints is valid input; the search layer reports it
    /// as a failed search rather than rejecting construction.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        self.start.is_some() && self.goal.is_some()
    }

    #[must_use]
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Row-major index of `pos`, or `None` if out of bounds.
    #[must_use]
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        self.in_bounds(pos).then(|| pos.row * self.cols + pos.col)
    }

    /// Classification at `pos`, or `None` if out of bounds.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<CellKind> {
        self.index_of(pos).map(|i| self.cells[i])
    }

    /// True iff `pos` is in bounds and not a wall.
    ///
    /// Out-of-bounds and wall are deliberately indistinguishable here.
    #[must_use]
    pub fn is_passable(&self, pos: Position) -> bool {
        self.cell(pos).is_some_and(CellKind::is_passable)
    }

    /// Iterate `(position, kind)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, CellKind)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &kind)| (Position::new(i / self.cols, i % self.cols), kind))
    }

    /// The raw code matrix this grid was built from.
    #[must_use]
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|k| k.code()).collect())
            .collect()
    }

    /// Identity bytes: `rows (u64 LE) || cols (u64 LE) || codes (row-major)`.
    #[must_use]
    pub fn identity_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(16 + self.cells.len());
        bytes.extend_from_slice(&(self.rows as u64).to_le_bytes());
        bytes.extend_from_slice(&(self.cols as u64).to_le_bytes());
        bytes.extend(self.cells.iter().map(|k| k.code()));
        bytes
    }

    /// Content hash of [`Grid::identity_bytes`] under the grid identity domain.
    #[must_use]
    pub fn fingerprint(&self) -> ContentHash {
        canonical_hash(HashDomain::GridIdentity, &self.identity_bytes())
    }

    /// JSON form: `{"rows": r, "cols": c, "cells": [[codes...], ...]}`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "cells": self.to_codes(),
            "cols": self.cols,
            "rows": self.rows,
        })
    }
}
