//! Maze source contract: the minimal trait a maze provider must implement.
//!
//! Sources provide cell codes only. They may NOT build grids, run searches,
//! hash artifacts, or assemble bundles (those are kernel/runner concerns).

use thiserror::Error;

/// Typed failure for maze source operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeSourceError {
    /// The source could not produce its cell codes.
    #[error("maze encode failure: {detail}")]
    EncodeFailure { detail: String },
}

/// The contract a maze source must implement to be run by the harness runner.
///
/// A source provides:
/// - A unique identifier
/// - A rectangular array of cell codes (`0` empty, `1` wall, `2` start,
///   `3` goal)
///
/// A source does NOT provide:
/// - Grid validation (the kernel rejects malformed codes)
/// - Search configuration (the caller passes a `SearchPolicyV1`)
pub trait MazeSourceV1 {
    /// Unique maze identifier (e.g., `"simple_path"`).
    fn maze_id(&self) -> &str;

    /// Row-major cell codes.
    ///
    /// # Errors
    ///
    /// Returns [`MazeSourceError::EncodeFailure`] if the codes cannot be
    /// produced.
    fn cell_codes(&self) -> Result<Vec<Vec<u8>>, MazeSourceError>;
}
