//! Search entry point and expansion loop.

use tracing::{debug, debug_span, trace};
use wayfinder_kernel::grid::{Grid, Position};

use crate::frontier::OpenSet;
use crate::heuristic::HeuristicKind;
use crate::movement::Movement;
use crate::node::SearchNodeV1;
use crate::overlay::{project, OverlayGridV1};
use crate::policy::SearchPolicyV1;
use crate::trace::{SearchTraceV1, TraceStepV1};

/// Error text reported when the grid lacks a start or goal marker.
pub const MISSING_ENDPOINTS_MESSAGE: &str = "Start or goal not found in maze";

/// Error text reported when the open set empties before the goal is closed.
pub const UNREACHABLE_MESSAGE: &str = "Goal is unreachable - no valid path exists";

/// Why the search terminated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TerminationReasonV1 {
    /// The goal was closed.
    GoalReached {
        /// Node count of the path, start and goal included.
        path_length: usize,
        /// `g` of the goal node.
        path_cost: f64,
    },
    /// The grid has no start or no goal; the search did not start.
    MissingEndpoints,
    /// The open set emptied without closing the goal.
    Unreachable,
}

impl TerminationReasonV1 {
    /// Stable snake-case tag for artifacts.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::MissingEndpoints => "missing_endpoints",
            Self::Unreachable => "unreachable",
        }
    }

    /// Human-readable failure text, `None` on success.
    #[must_use]
    pub const fn error(&self) -> Option<&'static str> {
        match self {
            Self::GoalReached { .. } => None,
            Self::MissingEndpoints => Some(MISSING_ENDPOINTS_MESSAGE),
            Self::Unreachable => Some(UNREACHABLE_MESSAGE),
        }
    }
}

/// Aggregate statistics for one search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchStatsV1 {
    pub heuristic: HeuristicKind,
    pub movement: Movement,
    /// Positions closed (equals the trace length).
    pub nodes_explored: u64,
    /// Nodes pushed onto the open set, start included.
    pub nodes_generated: u64,
    /// Largest open-set size observed, stale entries included.
    pub frontier_high_water: u64,
    pub termination_reason: TerminationReasonV1,
}

/// Result of a search execution.
///
/// Always carries stats and a trace regardless of how the search ended.
/// `path` is `Some` exactly when the termination reason is `GoalReached`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResultV1 {
    /// Positions from start to goal inclusive.
    pub path: Option<Vec<Position>>,
    pub stats: SearchStatsV1,
    pub trace: SearchTraceV1,
}

impl SearchResultV1 {
    fn missing_endpoints(heuristic: HeuristicKind, movement: Movement) -> Self {
        Self {
            path: None,
            stats: SearchStatsV1 {
                heuristic,
                movement,
                nodes_explored: 0,
                nodes_generated: 0,
                frontier_high_water: 0,
                termination_reason: TerminationReasonV1::MissingEndpoints,
            },
            trace: SearchTraceV1::new(),
        }
    }

    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(
            self.stats.termination_reason,
            TerminationReasonV1::GoalReached { .. }
        )
    }

    #[must_use]
    pub fn path_length(&self) -> Option<usize> {
        match self.stats.termination_reason {
            TerminationReasonV1::GoalReached { path_length, .. } => Some(path_length),
            _ => None,
        }
    }

    #[must_use]
    pub fn path_cost(&self) -> Option<f64> {
        match self.stats.termination_reason {
            TerminationReasonV1::GoalReached { path_cost, .. } => Some(path_cost),
            _ => None,
        }
    }

    #[must_use]
    pub fn nodes_explored(&self) -> u64 {
        self.stats.nodes_explored
    }

    #[must_use]
    pub fn error(&self) -> Option<&'static str> {
        self.stats.termination_reason.error()
    }

    /// Annotated copy of `grid` using this result's visitation order and path.
    #[must_use]
    pub fn project(&self, grid: &Grid) -> OverlayGridV1 {
        project(
            grid,
            &self.trace.visitation_order(),
            self.path.as_deref().unwrap_or_default(),
        )
    }

    /// The stats record as JSON.
    ///
    /// Success: `path_found`, `path_length`, `path_cost`, `nodes_explored`,
    /// `heuristic`. Failure: `path_found`, `nodes_explored`, `heuristic`,
    /// `error`.
    #[must_use]
    pub fn stats_json(&self) -> serde_json::Value {
        let s = &self.stats;
        match s.termination_reason {
            TerminationReasonV1::GoalReached {
                path_length,
                path_cost,
            } => serde_json::json!({
                "heuristic": s.heuristic.name(),
                "nodes_explored": s.nodes_explored,
                "path_cost": path_cost,
                "path_found": true,
                "path_length": path_length,
            }),
            reason => serde_json::json!({
                "error": reason.error(),
                "heuristic": s.heuristic.name(),
                "nodes_explored": s.nodes_explored,
                "path_found": false,
            }),
        }
    }

    /// Full result as JSON: stats, termination, counters and path.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let s = &self.stats;
        serde_json::json!({
            "allow_diagonal": s.movement.allows_diagonal(),
            "frontier_high_water": s.frontier_high_water,
            "nodes_generated": s.nodes_generated,
            "path": self
                .path
                .as_ref()
                .map(|p| p.iter().map(|pos| [pos.row, pos.col]).collect::<Vec<_>>()),
            "stats": self.stats_json(),
            "termination_reason": s.termination_reason.as_str(),
        })
    }
}

/// Row-major dense per-cell table; every search owns fresh ones.
struct CellTable<T> {
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> CellTable<T> {
    fn new(grid: &Grid, fill: T) -> Self {
        Self {
            cols: grid.cols(),
            cells: vec![fill; grid.cell_count()],
        }
    }

    /// Callers only pass in-bounds positions.
    fn get_mut(&mut self, pos: Position) -> &mut T {
        &mut self.cells[pos.row * self.cols + pos.col]
    }
}

/// Run A* over `grid` under `policy`.
///
/// Never fails: missing endpoints and an unreachable goal are reported
/// through [`TerminationReasonV1`] with the explored count as evidence.
///
/// The grid is only read. Every piece of search state (open set, closed
/// set, best-g table, node arena, trace) is private to this call, so
/// concurrent calls over one grid need no coordination.
#[must_use]
pub fn solve(grid: &Grid, policy: &SearchPolicyV1) -> SearchResultV1 {
    let heuristic = policy.heuristic;
    let movement = policy.movement();
    let span = debug_span!(
        "solve",
        heuristic = heuristic.name(),
        movement = movement.name(),
        rows = grid.rows(),
        cols = grid.cols(),
    );
    let _enter = span.enter();

    let (Some(start), Some(goal)) = (grid.start(), grid.goal()) else {
        debug!("start or goal missing; search not started");
        return SearchResultV1::missing_endpoints(heuristic, movement);
    };

    let mut frontier = OpenSet::new();
    let mut nodes: Vec<SearchNodeV1> = Vec::new();
    let mut closed = CellTable::new(grid, false);
    let mut best_g: CellTable<Option<f64>> = CellTable::new(grid, None);
    let mut search_trace = SearchTraceV1::new();
    let mut closed_count = 0usize;
    let mut nodes_explored = 0u64;

    *best_g.get_mut(start) = Some(0.0);
    push_node(
        &mut nodes,
        &mut frontier,
        start,
        None,
        0.0,
        heuristic.estimate(start, goal),
    );

    while let Some(node_id) = frontier.pop() {
        let current = nodes[node_id];

        // Lazy deletion: a stale duplicate of an already-closed position.
        let is_closed = closed.get_mut(current.position);
        if *is_closed {
            continue;
        }
        *is_closed = true;
        closed_count += 1;
        nodes_explored += 1;

        search_trace.push(TraceStepV1 {
            position: current.position,
            f_cost: current.f_cost(),
            g_cost: current.g_cost,
            h_cost: current.h_cost,
            open_count: frontier.len(),
            closed_count,
        });
        trace!(
            position = %current.position,
            f = current.f_cost(),
            g = current.g_cost,
            open = frontier.len(),
            "expand"
        );

        if current.position == goal {
            let path = reconstruct_path(&nodes, node_id);
            let termination_reason = TerminationReasonV1::GoalReached {
                path_length: path.len(),
                path_cost: current.g_cost,
            };
            debug!(
                nodes_explored,
                path_length = path.len(),
                path_cost = current.g_cost,
                "goal reached"
            );
            return SearchResultV1 {
                path: Some(path),
                stats: SearchStatsV1 {
                    heuristic,
                    movement,
                    nodes_explored,
                    nodes_generated: frontier.pushes(),
                    frontier_high_water: frontier.high_water(),
                    termination_reason,
                },
                trace: search_trace,
            };
        }

        for step in movement.steps() {
            let Some(next) = current.position.offset(step.dr, step.dc) else {
                continue;
            };
            if !grid.is_passable(next) || *closed.get_mut(next) {
                continue;
            }

            let tentative_g = current.g_cost + step.cost;
            let recorded = best_g.get_mut(next);
            // Strictly less: an equal-cost route never displaces the first one.
            if recorded.is_some_and(|g| tentative_g >= g) {
                continue;
            }
            *recorded = Some(tentative_g);

            push_node(
                &mut nodes,
                &mut frontier,
                next,
                Some(node_id),
                tentative_g,
                heuristic.estimate(next, goal),
            );
        }
    }

    debug!(nodes_explored, "open set exhausted; goal unreachable");
    SearchResultV1 {
        path: None,
        stats: SearchStatsV1 {
            heuristic,
            movement,
            nodes_explored,
            nodes_generated: frontier.pushes(),
            frontier_high_water: frontier.high_water(),
            termination_reason: TerminationReasonV1::Unreachable,
        },
        trace: search_trace,
    }
}

/// Append a node to the arena and push it onto the open set.
fn push_node(
    nodes: &mut Vec<SearchNodeV1>,
    frontier: &mut OpenSet,
    position: Position,
    parent_id: Option<usize>,
    g_cost: f64,
    h_cost: f64,
) {
    let node = SearchNodeV1 {
        node_id: nodes.len(),
        parent_id,
        position,
        g_cost,
        h_cost,
    };
    debug_assert_eq!(node.creation_order(), frontier.pushes());
    frontier.push(&node);
    nodes.push(node);
}

/// Reconstruct the path from the start node to `goal_node_id`.
///
/// Walks arena predecessors from the goal to the root, then reverses.
#[must_use]
pub fn reconstruct_path(nodes: &[SearchNodeV1], goal_node_id: usize) -> Vec<Position> {
    let mut path = Vec::new();
    let mut current_id = Some(goal_node_id);

    while let Some(id) = current_id {
        let Some(node) = nodes.get(id) else {
            break;
        };
        path.push(node.position);
        current_id = node.parent_id;
    }

    path.reverse();
    path
}
