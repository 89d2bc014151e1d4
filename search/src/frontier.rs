//! Best-first open set with lazy deletion.
//!
//! There is no decrease-key. An improved path to a position is pushed as a
//! new entry; the stale entry stays in the heap and is discarded by the
//! search loop when it pops a position that is already closed.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::node::{FrontierKey, SearchNodeV1};

/// A frontier entry: ordering key plus the node's arena index.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest `f_cost` first).
#[derive(Debug, PartialEq, Eq)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node_id: usize,
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Open set for one search.
///
/// Maintains:
/// - A `BinaryHeap` for O(log n) pop of the best entry
/// - A high-water mark of the heap size (stale entries included)
/// - A count of all pushes
#[derive(Debug, Default)]
pub struct OpenSet {
    heap: BinaryHeap<FrontierEntry>,
    high_water: u64,
    pushes: u64,
}

impl OpenSet {
    /// Create a new empty open set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a node. Duplicates of a position are allowed.
    pub fn push(&mut self, node: &SearchNodeV1) {
        self.heap.push(FrontierEntry {
            key: Reverse(FrontierKey::from(node)),
            node_id: node.node_id,
        });
        self.pushes += 1;
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Pop the arena index of the best (lowest `f_cost`, then oldest) entry.
    #[must_use]
    pub fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|e| e.node_id)
    }

    /// Current size, stale entries included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of the open-set size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }

    /// Total pushes since creation.
    #[must_use]
    pub fn pushes(&self) -> u64 {
        self.pushes
    }
}
