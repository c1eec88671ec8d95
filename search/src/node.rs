//! Core search node type and frontier ordering key.

use stacker_kernel::proof::hash::ContentHash;

/// An immutable search node.
///
/// Ordering for frontier extraction uses `(f_cost, creation_order)` where
/// `f_cost = g_cost + h_cost`. Lower is better; ties go to the node created
/// first, so equal-cost alternatives are explored in insertion order.
#[derive(Debug, Clone)]
pub struct SearchNode<S> {
    /// Identifier assigned by the search; equal to the node's index in
    /// [`crate::search::SearchResult::nodes`].
    pub node_id: u64,
    /// Parent node ID (`None` for root).
    pub parent_id: Option<u64>,
    /// Full immutable state at this node.
    pub state: S,
    /// Structural identity of `state`.
    pub fingerprint: ContentHash,
    /// Tree depth (root = 0).
    pub depth: u32,
    /// Cumulative path cost.
    pub g_cost: u64,
    /// Heuristic estimate of the remaining cost.
    pub h_cost: u64,
    /// Global counter for deterministic tie-breaking.
    pub creation_order: u64,
}

impl<S> SearchNode<S> {
    /// Compute `f_cost = g_cost + h_cost` (the frontier ordering key).
    #[must_use]
    pub fn f_cost(&self) -> u64 {
        self.g_cost.saturating_add(self.h_cost)
    }
}

/// The frontier ordering key: `(f_cost, creation_order)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f_cost: u64,
    pub creation_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f_cost
            .cmp(&other.f_cost)
            .then(self.creation_order.cmp(&other.creation_order))
    }
}

impl<S> From<&SearchNode<S>> for FrontierKey {
    fn from(node: &SearchNode<S>) -> Self {
        Self {
            f_cost: node.f_cost(),
            creation_order: node.creation_order,
        }
    }
}
