//! Policy configuration and its auditable snapshot.
//!
//! A [`PolicyConfig`] is what a caller (or a JSON config file) supplies; the
//! [`PolicySnapshot`] is the canonical, hashed declaration of the budgets a
//! plan was produced under. Every plan report commits to the snapshot digest.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use stacker_kernel::proof::canon::canonical_json_bytes;
use stacker_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use stacker_search::policy::SearchPolicy;

/// Default wall-clock budget for one planning run.
pub const DEFAULT_TIME_BUDGET_MS: u64 = 5_000;

/// Which heuristic guides the planner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeuristicMode {
    /// Goal-directed estimate.
    #[default]
    Goal,
    /// Uniform-cost search.
    Zero,
}

impl HeuristicMode {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Goal => "goal",
            Self::Zero => "zero",
        }
    }
}

/// Caller-supplied policy. Absent fields take the documented defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Wall-clock budget in milliseconds. `None` uses `DEFAULT_TIME_BUDGET_MS`.
    #[serde(default)]
    pub time_budget_ms: Option<u64>,
    /// Cap on node expansions. `None` is unbounded.
    #[serde(default)]
    pub max_expansions: Option<u64>,
    /// `None` uses [`HeuristicMode::Goal`].
    #[serde(default)]
    pub heuristic: Option<HeuristicMode>,
}

/// Failure to obtain or snapshot a policy configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read policy file {path}: {detail}")]
    Io { path: String, detail: String },

    #[error("malformed policy config: {detail}")]
    Parse { detail: String },

    #[error("cannot canonicalize policy snapshot: {detail}")]
    Canon { detail: String },
}

impl PolicyConfig {
    /// Parse a config from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or mistyped fields.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse {
            detail: e.to_string(),
        })
    }

    /// Read and parse a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`Self::from_json_str`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            detail: e.to_string(),
        })?;
        Self::from_json_str(&text)
    }

    #[must_use]
    pub fn time_budget_ms(&self) -> u64 {
        self.time_budget_ms.unwrap_or(DEFAULT_TIME_BUDGET_MS)
    }

    #[must_use]
    pub fn heuristic_mode(&self) -> HeuristicMode {
        self.heuristic.unwrap_or_default()
    }

    /// Budgets in the form the search loop consumes.
    #[must_use]
    pub fn search_policy(&self) -> SearchPolicy {
        SearchPolicy {
            time_budget: Duration::from_millis(self.time_budget_ms()),
            max_expansions: self.max_expansions,
        }
    }

    /// Canonical snapshot with every default made explicit.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Canon`] if canonical serialization fails.
    pub fn snapshot(&self) -> Result<PolicySnapshot, ConfigError> {
        let value = serde_json::json!({
            "heuristic": self.heuristic_mode().name(),
            "max_expansions": self.max_expansions,
            "schema_version": "policy.v1",
            "time_budget_ms": self.time_budget_ms(),
        });
        let bytes = canonical_json_bytes(&value).map_err(|e| ConfigError::Canon {
            detail: e.to_string(),
        })?;
        Ok(PolicySnapshot { bytes })
    }
}

/// Canonical JSON bytes of an effective policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicySnapshot {
    pub bytes: Vec<u8>,
}

impl PolicySnapshot {
    #[must_use]
    pub fn digest(&self) -> ContentHash {
        canonical_hash(HashDomain::PolicySnapshot, &self.bytes)
    }
}
