//! Errors surfaced by grounding and planning.

use stacker_kernel::proof::canon::CanonError;
use stacker_kernel::snapshot::WorldError;
use stacker_search::error::SearchError;

use crate::policy::ConfigError;

/// Why a command could not be turned into a plan.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// A description matched nothing in the current world.
    #[error("no object matches \"{description}\"")]
    UnresolvedReference { description: String },

    /// Every candidate literal was physically impossible or self-referential.
    #[error("command has no physically possible interpretation")]
    NoInterpretation,

    /// The reachable state space holds no goal configuration.
    #[error("no plan reaches the goal")]
    NoPlanFound,

    #[error("search deadline exceeded after {expansions} expansions")]
    TimeoutExceeded { expansions: u64 },

    #[error("expansion budget of {budget} exhausted")]
    ExpansionBudgetExceeded { budget: u64 },

    /// Consecutive path states differ by something other than one edge.
    #[error("path step {index} is not a single pick or place transition")]
    InconsistentPath { index: usize },

    #[error("no candidate commands supplied")]
    NoCandidates,

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    World(#[from] WorldError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Canon(#[from] CanonError),
}
