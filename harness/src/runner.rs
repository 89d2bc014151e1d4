//! Harness runner: orchestrates kernel and search APIs to produce an artifact bundle.
//!
//! The runner does not implement search or hashing itself; it delegates to
//! `wayfinder_search::solve` and the kernel's canonical hashing.
//!
//! # Pipeline
//!
//! ```text
//! cell_codes() → Grid::from_codes() → solve()
//!   → canonical JSON artifacts → bind digests into result.json
//!   → build_bundle()
//! ```

use thiserror::Error;
use tracing::{info, info_span};
use wayfinder_kernel::grid::{Grid, GridError};
use wayfinder_kernel::proof::canon::canonical_json_bytes;
use wayfinder_kernel::proof::hash::canonical_hash;
use wayfinder_search::heuristic::HeuristicKind;
use wayfinder_search::policy::SearchPolicyV1;
use wayfinder_search::search::{solve, SearchResultV1};

use crate::bundle::{build_bundle, ArtifactBundleV1, DOMAIN_BUNDLE_ARTIFACT};
use crate::contract::{MazeSourceError, MazeSourceV1};

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    /// Maze source failed to produce cell codes.
    #[error("maze source {maze_id}: {source}")]
    Source {
        maze_id: String,
        source: MazeSourceError,
    },
    /// Cell codes did not form a valid grid.
    #[error("maze {maze_id}: {source}")]
    Grid { maze_id: String, source: GridError },
}

/// Everything one run produced: the inputs, the search result and the bundle.
#[derive(Debug, Clone)]
pub struct SolveBundleV1 {
    pub maze_id: String,
    pub grid: Grid,
    pub policy: SearchPolicyV1,
    pub result: SearchResultV1,
    pub bundle: ArtifactBundleV1,
}

/// Run a maze source through the full harness pipeline.
///
/// Produces an [`ArtifactBundleV1`] containing:
/// - `grid.json` (normative): the validated cell codes
/// - `policy.json` (normative): heuristic and movement
/// - `trace.json` (normative): per-expansion snapshots
/// - `result.json` (normative): stats, path, and the digests binding the above
/// - `overlay.json` (observational): visited/path annotation of the grid
///
/// Search failures (missing endpoints, unreachable goal) are not errors;
/// they are recorded in `result.json`.
///
/// # Errors
///
/// Returns [`RunError`] if the source fails or its codes are not a valid
/// grid. Fail-closed: partial bundles are not produced.
pub fn run_solve(
    source: &dyn MazeSourceV1,
    policy: &SearchPolicyV1,
) -> Result<SolveBundleV1, RunError> {
    let maze_id = source.maze_id().to_string();

    let codes = source.cell_codes().map_err(|source| RunError::Source {
        maze_id: maze_id.clone(),
        source,
    })?;
    let grid = Grid::from_codes(&codes).map_err(|source| RunError::Grid {
        maze_id: maze_id.clone(),
        source,
    })?;

    Ok(run_grid(maze_id, grid, *policy))
}

/// Solve an already-validated grid and bundle the artifacts.
#[must_use]
pub fn run_grid(maze_id: String, grid: Grid, policy: SearchPolicyV1) -> SolveBundleV1 {
    let span = info_span!("run", maze_id = %maze_id);
    let _enter = span.enter();

    let result = solve(&grid, &policy);

    let grid_json = canonical_json_bytes(&grid.to_json_value());
    let policy_json = canonical_json_bytes(&policy.to_json_value());
    let trace_json = canonical_json_bytes(&result.trace.to_json_value());
    let overlay_json = canonical_json_bytes(&result.project(&grid).to_json_value());

    let result_json = canonical_json_bytes(&serde_json::json!({
        "grid_fingerprint": grid.fingerprint().as_str(),
        "maze_id": maze_id,
        "policy_digest": policy.digest().as_str(),
        "result": result.to_json_value(),
        "trace_artifact_hash": canonical_hash(DOMAIN_BUNDLE_ARTIFACT, &trace_json).as_str(),
        "trace_digest": result.trace.digest().as_str(),
    }));

    let bundle = build_bundle(vec![
        ("grid.json".to_string(), grid_json, true),
        ("policy.json".to_string(), policy_json, true),
        ("result.json".to_string(), result_json, true),
        ("trace.json".to_string(), trace_json, true),
        ("overlay.json".to_string(), overlay_json, false),
    ]);

    info!(
        heuristic = policy.heuristic.name(),
        allow_diagonal = policy.allow_diagonal,
        termination = result.stats.termination_reason.as_str(),
        nodes_explored = result.stats.nodes_explored,
        digest = %bundle.digest,
        "solve bundled"
    );

    SolveBundleV1 {
        maze_id,
        grid,
        policy,
        result,
        bundle,
    }
}

/// One row of a heuristic comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicComparisonV1 {
    pub heuristic: HeuristicKind,
    pub path_found: bool,
    pub path_length: Option<usize>,
    pub path_cost: Option<f64>,
    pub nodes_explored: u64,
}

impl HeuristicComparisonV1 {
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "heuristic": self.heuristic.name(),
            "nodes_explored": self.nodes_explored,
            "path_cost": self.path_cost,
            "path_found": self.path_found,
            "path_length": self.path_length,
        })
    }
}

/// Solve `grid` once per heuristic under the same movement topology.
///
/// Rows follow [`HeuristicKind::ALL`].
#[must_use]
pub fn compare_heuristics(grid: &Grid, allow_diagonal: bool) -> Vec<HeuristicComparisonV1> {
    HeuristicKind::ALL
        .iter()
        .map(|&heuristic| {
            let result = solve(grid, &SearchPolicyV1::new(heuristic, allow_diagonal));
            let row = HeuristicComparisonV1 {
                heuristic,
                path_found: result.is_goal_reached(),
                path_length: result.path_length(),
                path_cost: result.path_cost(),
                nodes_explored: result.nodes_explored(),
            };
            info!(
                heuristic = heuristic.name(),
                allow_diagonal,
                path_found = row.path_found,
                nodes_explored = row.nodes_explored,
                "heuristic compared"
            );
            row
        })
        .collect()
}
