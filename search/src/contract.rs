//! Search world contract trait.

use stacker_kernel::proof::hash::ContentHash;

/// A successor state together with the cost of the edge leading to it.
#[derive(Debug, Clone)]
pub struct Successor<S> {
    pub state: S,
    pub cost: u64,
}

/// Trait for worlds that support search.
///
/// # Contract
///
/// - `successors` must be deterministic: same state → same successors in the
///   same order. Every successor must be a fresh value; the search never
///   mutates a state it has been handed.
/// - `fingerprint` must be a function of the state's structural content only.
///   Two independently built but structurally equal states must map to the
///   same fingerprint; this is the search's only notion of state identity.
/// - `is_goal` must be pure.
pub trait SearchWorld {
    /// The state type explored by the search.
    type State: Clone;

    /// Unique world identifier, echoed into the search report.
    fn world_id(&self) -> &str;

    /// Enumerate every legal successor of `state`.
    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State>>;

    /// Test whether `state` satisfies the world's goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Structural identity of `state`.
    fn fingerprint(&self, state: &Self::State) -> ContentHash;
}
