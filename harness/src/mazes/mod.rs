//! Maze sources for the harness runner.

pub mod catalog;
pub mod random;
pub mod text;
