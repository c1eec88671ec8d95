//! Object resolution: from descriptions to sets of referents.
//!
//! Resolution reads the current configuration only; it never mutates. An
//! ambiguous description resolves to a proper set, which the compiler turns
//! into a disjunction.

use std::collections::BTreeSet;

use stacker_kernel::laws::relation::{holds, Relation};
use stacker_kernel::snapshot::World;
use stacker_kernel::world::configuration::Configuration;
use stacker_kernel::world::object::{Form, ObjectDefinition, ObjectTable, Referent, Size};
use tracing::debug;

use crate::command::{Command, Entity, ObjectDescription, Quantifier};
use crate::error::PlanError;

/// Read-only view of the world that descriptions are resolved against.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    objects: &'a ObjectTable,
    configuration: &'a Configuration,
}

impl<'a> Resolver<'a> {
    #[must_use]
    pub fn new(objects: &'a ObjectTable, configuration: &'a Configuration) -> Self {
        Self {
            objects,
            configuration,
        }
    }

    #[must_use]
    pub fn for_world(world: &'a World) -> Self {
        Self::new(world.objects(), world.configuration())
    }

    #[must_use]
    pub fn objects(&self) -> &'a ObjectTable {
        self.objects
    }

    #[must_use]
    pub fn configuration(&self) -> &'a Configuration {
        self.configuration
    }

    /// Referents an entity denotes. The entity's own quantifier does not
    /// narrow the set; it is interpreted by the compiler.
    #[must_use]
    pub fn resolve(&self, entity: &Entity) -> BTreeSet<Referent> {
        self.resolve_description(&entity.object)
    }

    /// Referents matching a description, including its location qualifier.
    #[must_use]
    pub fn resolve_description(&self, description: &ObjectDescription) -> BTreeSet<Referent> {
        if description.form == Form::Floor {
            return BTreeSet::from([Referent::Floor]);
        }

        let mut candidates: BTreeSet<Referent> = self
            .objects
            .iter()
            .filter(|(id, def)| matches_description(def, description) && self.configuration.contains(id))
            .map(|(id, _)| Referent::Object(id.clone()))
            .collect();

        if let Some(location) = &description.location {
            let anchors = self.resolve(&location.entity);
            let every = location.entity.quantifier == Quantifier::All;
            candidates.retain(|c| self.related(location.relation, c, &anchors, every));
        }
        candidates
    }

    fn related(
        &self,
        relation: Relation,
        candidate: &Referent,
        anchors: &BTreeSet<Referent>,
        every: bool,
    ) -> bool {
        let test = |anchor: &Referent| holds(relation, candidate, anchor, self.configuration);
        if every {
            !anchors.is_empty() && anchors.iter().all(test)
        } else {
            anchors.iter().any(test)
        }
    }
}

fn matches_description(definition: &ObjectDefinition, description: &ObjectDescription) -> bool {
    let form_ok = description.form == Form::AnyForm || description.form == definition.form;
    let size_ok = match description.size {
        None | Some(Size::Unspecified) => true,
        Some(size) => size == definition.size,
    };
    let color_ok = match description.color.as_deref() {
        None => true,
        Some(color) => color == definition.color,
    };
    form_ok && size_ok && color_ok
}

/// A command with every description resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroundedCommand {
    Take {
        targets: BTreeSet<Referent>,
        quantifier: Quantifier,
    },
    Move {
        targets: BTreeSet<Referent>,
        quantifier: Quantifier,
        relation: Relation,
        destinations: BTreeSet<Referent>,
        destination_quantifier: Quantifier,
    },
}

/// Resolve every description in `command`.
///
/// `put` is grounded as a move of the held object.
///
/// # Errors
///
/// Returns [`PlanError::UnresolvedReference`] if any description matches
/// nothing, or if `put` is issued with an empty gripper.
pub fn ground(command: &Command, resolver: &Resolver<'_>) -> Result<GroundedCommand, PlanError> {
    let grounded = match command {
        Command::Take { entity } => GroundedCommand::Take {
            targets: resolve_nonempty(resolver, entity)?,
            quantifier: entity.quantifier,
        },
        Command::Move { entity, location } => GroundedCommand::Move {
            targets: resolve_nonempty(resolver, entity)?,
            quantifier: entity.quantifier,
            relation: location.relation,
            destinations: resolve_nonempty(resolver, &location.entity)?,
            destination_quantifier: location.entity.quantifier,
        },
        Command::Put { location } => {
            let held = resolver.configuration().holding().cloned().ok_or_else(|| {
                PlanError::UnresolvedReference {
                    description: "the object in the gripper".into(),
                }
            })?;
            GroundedCommand::Move {
                targets: BTreeSet::from([Referent::Object(held)]),
                quantifier: Quantifier::The,
                relation: location.relation,
                destinations: resolve_nonempty(resolver, &location.entity)?,
                destination_quantifier: location.entity.quantifier,
            }
        }
    };
    debug!(?grounded, "command grounded");
    Ok(grounded)
}

fn resolve_nonempty(
    resolver: &Resolver<'_>,
    entity: &Entity,
) -> Result<BTreeSet<Referent>, PlanError> {
    let referents = resolver.resolve(entity);
    if referents.is_empty() {
        return Err(PlanError::UnresolvedReference {
            description: entity.to_string(),
        });
    }
    Ok(referents)
}
