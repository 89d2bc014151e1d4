//! Maze source backed by whitespace-separated code text.

use wayfinder_kernel::grid::Grid;

use crate::contract::{MazeSourceError, MazeSourceV1};

/// A maze supplied as text, one row per line (see [`Grid::parse_text`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMaze {
    pub id: String,
    pub text: String,
}

impl TextMaze {
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

impl MazeSourceV1 for TextMaze {
    fn maze_id(&self) -> &str {
        &self.id
    }

    fn cell_codes(&self) -> Result<Vec<Vec<u8>>, MazeSourceError> {
        Grid::parse_text(&self.text)
            .map(|grid| grid.to_codes())
            .map_err(|e| MazeSourceError::EncodeFailure {
                detail: e.to_string(),
            })
    }
}
