//! Heuristic estimates of remaining cost.

/// Estimate of the remaining cost from a state to the nearest goal.
///
/// Estimates must never overestimate the true remaining cost (admissible) for
/// the search to return optimal plans; they should also be consistent, or
/// the search may re-open nodes it has already expanded.
pub trait Heuristic<S> {
    fn estimate(&self, state: &S) -> u64;
}

/// Uniform-cost heuristic: estimates 0 everywhere.
///
/// Turns A* into Dijkstra; useful as a reference when checking that a real
/// heuristic does not change plan costs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<S> Heuristic<S> for ZeroHeuristic {
    fn estimate(&self, _state: &S) -> u64 {
        0
    }
}
