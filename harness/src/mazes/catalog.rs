//! Predefined demonstration mazes.
//!
//! Four fixed layouts covering the interesting outcomes: a straight run, a
//! detour around obstacles, a winding 10×10 maze, and a goal sealed off by a
//! wall column.

use crate::contract::{MazeSourceError, MazeSourceV1};

/// A compiled-in maze layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogMaze {
    id: &'static str,
    codes: &'static [&'static [u8]],
}

impl CatalogMaze {
    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.id
    }
}

impl MazeSourceV1 for CatalogMaze {
    fn maze_id(&self) -> &str {
        self.id
    }

    fn cell_codes(&self) -> Result<Vec<Vec<u8>>, MazeSourceError> {
        Ok(self.codes.iter().map(|row| row.to_vec()).collect())
    }
}

/// Start and goal on one row with open space below.
pub const SIMPLE_PATH: CatalogMaze = CatalogMaze {
    id: "simple_path",
    codes: &[
        &[2, 0, 0, 0, 3],
        &[0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0],
    ],
};

/// Wall segments forcing a detour.
pub const WITH_OBSTACLES: CatalogMaze = CatalogMaze {
    id: "with_obstacles",
    codes: &[
        &[2, 0, 1, 0, 0],
        &[0, 0, 1, 0, 0],
        &[0, 0, 0, 0, 0],
        &[1, 1, 1, 0, 0],
        &[0, 0, 0, 0, 3],
    ],
};

/// Winding 10×10 sample maze.
pub const COMPLEX_MAZE: CatalogMaze = CatalogMaze {
    id: "complex_maze",
    codes: &[
        &[2, 0, 0, 0, 1, 0, 0, 0, 0, 0],
        &[0, 1, 1, 0, 1, 0, 1, 1, 1, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 1, 1, 1, 1, 1, 1, 1, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 1, 0, 0],
        &[1, 1, 1, 1, 1, 0, 0, 1, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 1, 0, 0],
        &[0, 1, 1, 1, 1, 1, 0, 1, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 1, 1, 1, 1, 1, 0, 3],
    ],
};

/// Goal cut off by a full wall column.
pub const UNREACHABLE_GOAL: CatalogMaze = CatalogMaze {
    id: "unreachable_goal",
    codes: &[
        &[2, 0, 0, 1, 3],
        &[0, 0, 0, 1, 0],
        &[0, 0, 0, 1, 0],
        &[0, 0, 0, 1, 0],
    ],
};

/// Every predefined maze, in presentation order.
#[must_use]
pub fn catalog() -> &'static [CatalogMaze] {
    &[SIMPLE_PATH, WITH_OBSTACLES, COMPLEX_MAZE, UNREACHABLE_GOAL]
}

/// Look up a predefined maze by id.
#[must_use]
pub fn by_id(id: &str) -> Option<CatalogMaze> {
    catalog().iter().find(|m| m.id == id).copied()
}
