//! Wayfinder Search: deterministic A* over a [`wayfinder_kernel::grid::Grid`].
//!
//! This crate provides the search layer. It depends only on
//! `wayfinder_kernel`; it does NOT depend on `wayfinder_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! wayfinder_kernel  ←  wayfinder_search  ←  wayfinder_harness
//! (grid, hashing)      (A*, trace)          (mazes, runner, bundles)
//! ```
//!
//! # Key types
//!
//! - [`search::solve`] -- the single entry point; never fails
//! - [`SearchPolicyV1`] -- heuristic plus movement topology
//! - [`SearchResultV1`] -- path, stats and expansion trace
//! - [`SearchTraceV1`] -- per-expansion snapshots with a content digest
//! - [`OverlayGridV1`] -- presentation copy of the grid with visited/path cells

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod movement;
pub mod node;
pub mod overlay;
pub mod policy;
pub mod search;
pub mod trace;

pub use error::SearchError;
pub use heuristic::HeuristicKind;
pub use movement::Movement;
pub use overlay::{OverlayCellV1, OverlayGridV1};
pub use policy::SearchPolicyV1;
pub use search::{solve, SearchResultV1, SearchStatsV1, TerminationReasonV1};
pub use trace::{SearchTraceV1, TraceStepV1};
