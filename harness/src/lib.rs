//! Wayfinder Harness: maze-level orchestration for the search engine.
//!
//! The harness runs a maze source through the pipeline
//! (`cell_codes` → `Grid::from_codes` → `solve`) and packages the result as
//! a self-contained artifact bundle.
//!
//! The harness does NOT implement search or hashing; it delegates to the
//! search crate and the kernel. Maze sources provide cell codes only; the
//! harness owns orchestration.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bundle;
pub mod bundle_dir;
pub mod contract;
pub mod mazes;
pub mod runner;
