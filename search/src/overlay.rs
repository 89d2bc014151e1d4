//! Presentation overlay: the input grid annotated with visited and path cells.
//!
//! Observational only. Nothing in the search reads an overlay back.

use wayfinder_kernel::grid::{CellKind, Grid, Position};

/// Overlay cell. Codes 0..=3 mirror [`CellKind`]; 4 and 5 are annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayCellV1 {
    Empty,
    Wall,
    Start,
    Goal,
    /// On the returned path (start and goal excluded).
    Path,
    /// Closed during the search but not on the path.
    Visited,
}

impl OverlayCellV1 {
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Wall => 1,
            Self::Start => 2,
            Self::Goal => 3,
            Self::Path => 4,
            Self::Visited => 5,
        }
    }
}

impl From<CellKind> for OverlayCellV1 {
    fn from(kind: CellKind) -> Self {
        match kind {
            CellKind::Empty => Self::Empty,
            CellKind::Wall => Self::Wall,
            CellKind::Start => Self::Start,
            CellKind::Goal => Self::Goal,
        }
    }
}

/// Annotated copy of a grid, same shape as the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayGridV1 {
    cols: usize,
    cells: Vec<OverlayCellV1>,
}

impl OverlayGridV1 {
    #[must_use]
    pub fn rows(&self) -> usize {
        if self.cols == 0 {
            0
        } else {
            self.cells.len() / self.cols
        }
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn get(&self, pos: Position) -> Option<OverlayCellV1> {
        if pos.col >= self.cols {
            return None;
        }
        self.cells.get(pos.row * self.cols + pos.col).copied()
    }

    #[must_use]
    pub fn count(&self, cell: OverlayCellV1) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    /// Row-major numeric codes.
    #[must_use]
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        if self.cols == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|c| c.code()).collect())
            .collect()
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "cells": self.to_codes(),
            "cols": self.cols,
            "rows": self.rows(),
        })
    }

    fn slot_mut(&mut self, pos: Position) -> Option<&mut OverlayCellV1> {
        if pos.col >= self.cols {
            return None;
        }
        self.cells.get_mut(pos.row * self.cols + pos.col)
    }

    /// Only open floor becomes `Visited`.
    fn mark_visited(&mut self, pos: Position) {
        if let Some(slot) = self.slot_mut(pos) {
            if matches!(*slot, OverlayCellV1::Empty) {
                *slot = OverlayCellV1::Visited;
            }
        }
    }

    /// Start and goal markers are never overwritten.
    fn mark_path(&mut self, pos: Position) {
        if let Some(slot) = self.slot_mut(pos) {
            if !matches!(*slot, OverlayCellV1::Start | OverlayCellV1::Goal) {
                *slot = OverlayCellV1::Path;
            }
        }
    }
}

/// Build an overlay: visited cells first, then path cells on top.
///
/// Only `Empty` cells take the `Visited` marker; walls and endpoints named
/// in `visitation_order` keep their kind. Out-of-bounds positions are
/// ignored.
#[must_use]
pub fn project(grid: &Grid, visitation_order: &[Position], path: &[Position]) -> OverlayGridV1 {
    let mut overlay = OverlayGridV1 {
        cols: grid.cols(),
        cells: grid.iter().map(|(_, kind)| OverlayCellV1::from(kind)).collect(),
    };
    for &pos in visitation_order {
        overlay.mark_visited(pos);
    }
    for &pos in path {
        overlay.mark_path(pos);
    }
    overlay
}
