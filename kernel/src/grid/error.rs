//! Typed grid construction errors.

use thiserror::Error;

use super::cell::CellKind;
use super::position::Position;

/// Failure to construct a [`super::Grid`].
///
/// Construction errors are fatal for that input; a grid is never silently
/// repaired.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// No rows, or a zero-length first row.
    #[error("grid is empty")]
    Empty,
    /// A row's length differs from the first row's.
    #[error("grid is not rectangular: row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A cell code outside `0..=3`.
    #[error("unknown cell code {code} at {position}")]
    UnknownCellCode { position: Position, code: u8 },
    /// A second start or goal marker.
    #[error("duplicate {kind} marker at {second} (first at {first})")]
    DuplicateEndpoint {
        kind: CellKind,
        first: Position,
        second: Position,
    },
    /// A token in text input that is not a cell code.
    #[error("invalid token {token:?} on line {line}")]
    InvalidToken { line: usize, token: String },
}
