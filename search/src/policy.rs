//! Search policy types.

use std::time::{Duration, Instant};

use crate::error::SearchError;

/// Default wall-clock budget for one search.
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(5);

/// Search budgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Wall-clock budget, measured from the start of [`crate::search::search`].
    /// Polled once per loop iteration; a single expansion is never interrupted.
    pub time_budget: Duration,
    /// Hard cap on node expansions. `None` means unbounded.
    pub max_expansions: Option<u64>,
}

impl SearchPolicy {
    /// Validate that this policy can drive a search.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Deadline for a search started at `start`. `None` if the budget is too
    /// large to represent, which behaves as no deadline.
    #[must_use]
    pub fn deadline_from(&self, start: Instant) -> Option<Instant> {
        start.checked_add(self.time_budget)
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            time_budget: DEFAULT_TIME_BUDGET,
            max_expansions: None,
        }
    }
}
