//! Plan reports: canonical, content-addressed records of a planning run.
//!
//! A report carries nothing time-dependent. Two runs over the same world,
//! command and policy produce byte-identical reports and equal digests.

use stacker_kernel::proof::canon::{canonical_json_bytes, CanonError};
use stacker_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use stacker_kernel::snapshot::World;

use crate::error::PlanError;
use crate::runner::PlanOutcome;

pub const PLAN_REPORT_SCHEMA_VERSION: &str = "plan_report.v1";

/// Canonical JSON bytes of a plan report and their digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanReport {
    pub bytes: Vec<u8>,
    pub digest: ContentHash,
}

impl PlanReport {
    /// Build the report for `outcome`, which must have been planned in `world`.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Canon`] if any part fails canonical serialization.
    pub fn build(world: &World, outcome: &PlanOutcome) -> Result<Self, PlanError> {
        let final_configuration = serde_json::to_value(outcome.final_configuration())
            .map_err(|e| CanonError::Serialize {
                detail: e.to_string(),
            })?;
        let value = serde_json::json!({
            "actions": outcome.plan.encoded(),
            "cost": outcome.cost,
            "final_configuration": final_configuration,
            "goal": outcome.goal.to_string(),
            "goal_digest": outcome.goal.digest().as_str(),
            "narration": outcome.plan.narration,
            "policy_digest": outcome.policy.digest().as_str(),
            "schema_version": PLAN_REPORT_SCHEMA_VERSION,
            "search": outcome.search.to_json_value(),
            "world_digest": world.digest()?.as_str(),
        });
        let bytes = canonical_json_bytes(&value)?;
        let digest = canonical_hash(HashDomain::PlanReport, &bytes);
        Ok(Self { bytes, digest })
    }

    /// Parse the bytes back into a JSON value.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the bytes are not valid JSON.
    pub fn to_json_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_slice(&self.bytes)
    }
}
