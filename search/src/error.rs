//! Typed search errors.
//!
//! `SearchError` represents pre-flight configuration failures only. Search
//! outcomes (including missing endpoints and an unreachable goal) are
//! expressed via [`crate::search::TerminationReasonV1`] and always come back
//! inside a `SearchResultV1`.

use thiserror::Error;

/// Typed failure for configuration parsing and validation.
///
/// These errors are returned before any search runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A heuristic name that is not one of the supported strategies.
    #[error("unknown heuristic {name:?} (expected manhattan, euclidean or chebyshev)")]
    UnknownHeuristic { name: String },
    /// A policy document that could not be decoded.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}
