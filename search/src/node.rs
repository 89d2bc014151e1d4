//! Core search node and frontier ordering key.

use std::cmp::Ordering;

use wayfinder_kernel::grid::Position;

/// A search node in the engine's flat node arena.
///
/// `parent_id` is an arena index, never a live reference: the parent links
/// form a tree rooted at the start node (parents are always created
/// earlier), so path reconstruction is a plain index walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchNodeV1 {
    /// Arena index assigned at creation. Nodes are only created when they
    /// are pushed, so this is also the node's push order.
    pub node_id: usize,
    /// Predecessor arena index (`None` for the start node).
    pub parent_id: Option<usize>,
    pub position: Position,
    /// Cost from start along this node's predecessor chain.
    pub g_cost: f64,
    /// Heuristic estimate from `position` to the goal.
    pub h_cost: f64,
}

impl SearchNodeV1 {
    /// Compute `f_cost = g_cost + h_cost` (the frontier ordering key).
    #[must_use]
    pub fn f_cost(&self) -> f64 {
        self.g_cost + self.h_cost
    }

    /// Tie-break rank among equal `f_cost` entries, derived from `node_id`.
    #[must_use]
    pub fn creation_order(&self) -> u64 {
        self.node_id as u64
    }
}

/// The frontier ordering key: `(f_cost, creation_order)`.
///
/// Lower `f_cost` first; ties go to the node pushed earliest. `f_cost` is
/// compared with [`f64::total_cmp`], so the order is total and the same on
/// every platform.
#[derive(Debug, Clone, Copy)]
pub struct FrontierKey {
    pub f_cost: f64,
    pub creation_order: u64,
}

impl PartialEq for FrontierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierKey {}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f_cost
            .total_cmp(&other.f_cost)
            .then(self.creation_order.cmp(&other.creation_order))
    }
}

impl From<&SearchNodeV1> for FrontierKey {
    fn from(node: &SearchNodeV1) -> Self {
        Self {
            f_cost: node.f_cost(),
            creation_order: node.creation_order(),
        }
    }
}
