//! `SearchTraceV1`: per-expansion snapshots of one search.
//!
//! The trace is engine-scoped: `solve` creates it, appends one step per
//! closed position, and hands it back inside the result. Nothing outside the
//! engine appends to it, so concurrent searches never interleave entries.

use wayfinder_kernel::grid::Position;
use wayfinder_kernel::proof::hash::{canonical_hash, ContentHash};
use wayfinder_kernel::proof::hash_domain::HashDomain;

/// Bytes per step in the digest encoding (2 × u64 + 3 × f64 + 2 × u64).
const STEP_ENCODED_LEN: usize = 56;

/// Snapshot taken when a position is closed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceStepV1 {
    pub position: Position,
    pub f_cost: f64,
    pub g_cost: f64,
    pub h_cost: f64,
    /// Open-set size right after the pop, stale entries included.
    pub open_count: usize,
    /// Closed-set size including this position.
    pub closed_count: usize,
}

/// Ordered, append-only expansion log.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchTraceV1 {
    steps: Vec<TraceStepV1>,
}

impl SearchTraceV1 {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, step: TraceStepV1) {
        self.steps.push(step);
    }

    #[must_use]
    pub fn steps(&self) -> &[TraceStepV1] {
        &self.steps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Closed positions in expansion order.
    #[must_use]
    pub fn visitation_order(&self) -> Vec<Position> {
        self.steps.iter().map(|s| s.position).collect()
    }

    /// Fixed little-endian encoding of every step, in order.
    ///
    /// Per step: `row, col` (u64), `f, g, h` (IEEE-754 bits), then
    /// `open_count, closed_count` (u64).
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.steps.len() * STEP_ENCODED_LEN);
        for s in &self.steps {
            buf.extend_from_slice(&(s.position.row as u64).to_le_bytes());
            buf.extend_from_slice(&(s.position.col as u64).to_le_bytes());
            buf.extend_from_slice(&s.f_cost.to_bits().to_le_bytes());
            buf.extend_from_slice(&s.g_cost.to_bits().to_le_bytes());
            buf.extend_from_slice(&s.h_cost.to_bits().to_le_bytes());
            buf.extend_from_slice(&(s.open_count as u64).to_le_bytes());
            buf.extend_from_slice(&(s.closed_count as u64).to_le_bytes());
        }
        buf
    }

    /// Content hash of [`SearchTraceV1::to_bytes`].
    ///
    /// Bit-exact: two traces share a digest only if every position, cost
    /// and count matches.
    #[must_use]
    pub fn digest(&self) -> ContentHash {
        canonical_hash(HashDomain::SearchTrace, &self.to_bytes())
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::Array(self.steps.iter().map(step_to_json).collect())
    }
}

fn step_to_json(s: &TraceStepV1) -> serde_json::Value {
    serde_json::json!({
        "closed_count": s.closed_count,
        "f": s.f_cost,
        "g": s.g_cost,
        "h": s.h_cost,
        "open_count": s.open_count,
        "position": [s.position.row, s.position.col],
    })
}
