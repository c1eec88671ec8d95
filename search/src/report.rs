//! `SearchReport`: aggregate counters and the termination reason.
//!
//! Contains nothing time-dependent, so equal inputs yield byte-identical
//! canonical JSON.

use stacker_kernel::proof::canon::{canonical_json_bytes, CanonError};

/// Why the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// A goal state was popped from the frontier (or the root was a goal).
    GoalReached { node_id: u64, cost: u64 },
    /// The frontier emptied without reaching a goal.
    FrontierExhausted,
    /// The wall-clock deadline passed before a goal was reached.
    DeadlineExceeded,
    /// `max_expansions` was hit before a goal was reached.
    ExpansionBudgetExceeded,
}

impl TerminationReason {
    /// Stable lowercase tag used in serialized reports.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::DeadlineExceeded => "deadline_exceeded",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
        }
    }
}

/// Aggregate search statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub world_id: String,
    pub root_fingerprint: String,
    /// Frontier pops that were expanded (goal pops are not expansions).
    pub total_expansions: u64,
    /// Successors produced by the world across all expansions.
    pub total_successors_generated: u64,
    /// Successors dropped because an equal or cheaper path was known.
    pub total_duplicates_suppressed: u64,
    /// Successors that improved the cost of an already known state.
    pub total_cost_improvements: u64,
    pub frontier_high_water: u64,
    pub termination_reason: TerminationReason,
}

impl SearchReport {
    /// Serialize to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Convert to a `serde_json::Value` for embedding in larger reports.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let mut termination = serde_json::json!({ "type": self.termination_reason.tag() });
        if let TerminationReason::GoalReached { node_id, cost } = self.termination_reason {
            termination["node_id"] = node_id.into();
            termination["cost"] = cost.into();
        }
        serde_json::json!({
            "frontier_high_water": self.frontier_high_water,
            "root_fingerprint": self.root_fingerprint,
            "termination_reason": termination,
            "total_cost_improvements": self.total_cost_improvements,
            "total_duplicates_suppressed": self.total_duplicates_suppressed,
            "total_expansions": self.total_expansions,
            "total_successors_generated": self.total_successors_generated,
            "world_id": self.world_id,
        })
    }
}
