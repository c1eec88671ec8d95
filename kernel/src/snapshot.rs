//! `World`: an object table plus a validated start configuration.
//!
//! The world is the input snapshot handed to grounding and planning. It is
//! validated once on construction; every configuration derived from it during
//! search preserves the placement invariants by construction.

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::laws::support::can_support;
use crate::proof::canon::{canonical_json_bytes, CanonError};
use crate::proof::hash::{canonical_hash, ContentHash, HashDomain};
use crate::world::configuration::Configuration;
use crate::world::object::{Form, ObjectDefinition, ObjectId, ObjectTable};

/// Typed failure for world construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error("object `{id}` is placed but has no definition")]
    UndefinedObject { id: ObjectId },
    #[error("object `{id}` appears more than once")]
    DuplicatePlacement { id: ObjectId },
    #[error("object `{id}` has reserved form `{form:?}`")]
    ReservedForm { id: ObjectId, form: Form },
    #[error("arm column {arm} is outside the {columns} columns")]
    ArmOutOfRange { arm: usize, columns: usize },
    #[error("object `{top}` cannot rest on `{base}`")]
    PhysicsViolation { top: ObjectId, base: ObjectId },
    #[error("world JSON is malformed: {detail}")]
    Malformed { detail: String },
}

/// Wire shape of a world snapshot.
#[derive(Debug, Deserialize)]
struct WorldJson {
    objects: ObjectTable,
    stacks: Vec<Vec<ObjectId>>,
    #[serde(default)]
    holding: Option<ObjectId>,
    #[serde(default)]
    arm: usize,
}

/// Object table and start configuration.
#[derive(Debug, Clone)]
pub struct World {
    objects: ObjectTable,
    configuration: Configuration,
}

impl World {
    /// Validate and assemble a world.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError`] if an object is placed twice or undefined, the
    /// arm is off the table, a definition uses a reserved form, or the start
    /// stacks break the physical laws.
    pub fn new(objects: ObjectTable, configuration: Configuration) -> Result<Self, WorldError> {
        for (id, definition) in objects.iter() {
            if matches!(definition.form, Form::Floor | Form::AnyForm) {
                return Err(WorldError::ReservedForm {
                    id: id.clone(),
                    form: definition.form,
                });
            }
        }

        let mut seen = BTreeSet::new();
        let placed = configuration
            .stacks()
            .iter()
            .flatten()
            .chain(configuration.holding());
        for id in placed {
            if !objects.contains(id) {
                return Err(WorldError::UndefinedObject { id: id.clone() });
            }
            if !seen.insert(id) {
                return Err(WorldError::DuplicatePlacement { id: id.clone() });
            }
        }

        let columns = configuration.column_count();
        if configuration.arm() >= columns.max(1) {
            return Err(WorldError::ArmOutOfRange {
                arm: configuration.arm(),
                columns,
            });
        }

        for stack in configuration.stacks() {
            for pair in stack.windows(2) {
                let (base, top) = (&pair[0], &pair[1]);
                let supported = match (objects.get(top), objects.get(base)) {
                    (Some(t), Some(b)) => can_support(t, b),
                    _ => false,
                };
                if !supported {
                    return Err(WorldError::PhysicsViolation {
                        top: top.clone(),
                        base: base.clone(),
                    });
                }
            }
        }

        Ok(Self {
            objects,
            configuration,
        })
    }

    /// Parse and validate a world from JSON:
    /// `{"objects": {id: definition}, "stacks": [[id]], "holding": id|null, "arm": n}`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::Malformed`] on bad JSON, otherwise as [`World::new`].
    pub fn from_json_str(json: &str) -> Result<Self, WorldError> {
        let raw: WorldJson = serde_json::from_str(json).map_err(|e| WorldError::Malformed {
            detail: e.to_string(),
        })?;
        Self::new(
            raw.objects,
            Configuration::new(raw.stacks, raw.holding, raw.arm),
        )
    }

    #[must_use]
    pub fn objects(&self) -> &ObjectTable {
        &self.objects
    }

    /// The start configuration.
    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    #[must_use]
    pub fn definition(&self, id: &ObjectId) -> Option<&ObjectDefinition> {
        self.objects.get(id)
    }

    /// Canonical digest of the object table and start configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonical serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let value = serde_json::json!({
            "arm": self.configuration.arm(),
            "holding": self.configuration.holding(),
            "objects": &self.objects,
            "stacks": self.configuration.stacks(),
        });
        let bytes = canonical_json_bytes(&value)?;
        Ok(canonical_hash(HashDomain::WorldSnapshot, &bytes))
    }
}
