//! Plan synthesis: from a path of configurations to arm actions.
//!
//! Every edge of the path is one pick/place cycle, a lone pick, or a lone
//! drop. The arm walks to the source column, picks, walks to the destination
//! column and drops; the walking is free in the search but explicit here.

use stacker_kernel::arm::action::{encode, steps_between, Action};
use stacker_kernel::world::configuration::Configuration;
use stacker_kernel::world::object::{Form, ObjectDefinition, ObjectId, ObjectTable};

use crate::error::PlanError;

/// Executable actions plus one narration sentence per edge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    pub actions: Vec<Action>,
    pub narration: Vec<String>,
}

impl Plan {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Wire encoding of the actions, e.g. `"prd"`.
    #[must_use]
    pub fn encoded(&self) -> String {
        encode(&self.actions)
    }
}

/// What one edge of the path did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Move { source: usize, destination: usize },
    Pick { source: usize },
    Drop { destination: usize },
}

/// Translate a path into arm actions, starting from the first state's arm.
///
/// A one-state path yields an empty plan.
///
/// # Errors
///
/// Returns [`PlanError::InconsistentPath`] if two consecutive states are not
/// joined by a single edge of the blocks world.
pub fn synthesize(path: &[Configuration], objects: &ObjectTable) -> Result<Plan, PlanError> {
    let mut plan = Plan::default();
    let Some(first) = path.first() else {
        return Ok(plan);
    };
    let mut arm = first.arm();

    for (index, pair) in path.windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);
        let edge = classify(prev, next).ok_or(PlanError::InconsistentPath { index })?;
        match edge {
            Edge::Move {
                source,
                destination,
            } => {
                let moved = prev
                    .top_of(source)
                    .ok_or(PlanError::InconsistentPath { index })?;
                plan.actions.extend(steps_between(arm, source));
                plan.actions.push(Action::Pick);
                plan.actions.extend(steps_between(source, destination));
                plan.actions.push(Action::Drop);
                arm = destination;
                plan.narration.push(format!(
                    "Moving the {} {}.",
                    describe(objects, moved),
                    placement(objects, prev, destination)
                ));
            }
            Edge::Pick { source } => {
                let lifted = prev
                    .top_of(source)
                    .ok_or(PlanError::InconsistentPath { index })?;
                plan.actions.extend(steps_between(arm, source));
                plan.actions.push(Action::Pick);
                arm = source;
                plan.narration
                    .push(format!("Picking up the {}.", describe(objects, lifted)));
            }
            Edge::Drop { destination } => {
                let held = prev
                    .holding()
                    .ok_or(PlanError::InconsistentPath { index })?;
                plan.actions.extend(steps_between(arm, destination));
                plan.actions.push(Action::Drop);
                arm = destination;
                plan.narration.push(format!(
                    "Dropping the {} {}.",
                    describe(objects, held),
                    placement(objects, prev, destination)
                ));
            }
        }
    }
    Ok(plan)
}

/// Identify the single edge leading from `prev` to `next`.
fn classify(prev: &Configuration, next: &Configuration) -> Option<Edge> {
    if prev.column_count() != next.column_count() {
        return None;
    }
    let mut lost = Vec::new();
    let mut gained = Vec::new();
    for (column, (before, after)) in prev.stacks().iter().zip(next.stacks()).enumerate() {
        match after.len().cmp(&before.len()) {
            std::cmp::Ordering::Less => lost.push(column),
            std::cmp::Ordering::Greater => gained.push(column),
            std::cmp::Ordering::Equal => {}
        }
    }
    let edge = match (
        lost.as_slice(),
        gained.as_slice(),
        prev.holding().is_some(),
        next.holding().is_some(),
    ) {
        ([source], [destination], false, false) => Edge::Move {
            source: *source,
            destination: *destination,
        },
        ([source], [], false, true) => Edge::Pick { source: *source },
        ([], [destination], true, false) => Edge::Drop {
            destination: *destination,
        },
        _ => return None,
    };
    let expected = match edge {
        Edge::Move {
            source,
            destination,
        } => prev.with_picked(source)?.with_dropped(destination)?,
        Edge::Pick { source } => prev.with_picked(source)?,
        Edge::Drop { destination } => prev.with_dropped(destination)?,
    };
    expected.identity_eq(next).then_some(edge)
}

fn describe(objects: &ObjectTable, id: &ObjectId) -> String {
    objects
        .get(id)
        .map_or_else(|| id.to_string(), ObjectDefinition::noun_phrase)
}

/// "onto the floor", "into the large box", "onto the red brick".
fn placement(objects: &ObjectTable, before: &Configuration, column: usize) -> String {
    match before.top_of(column) {
        None => "onto the floor".to_string(),
        Some(id) => {
            let preposition = match objects.get(id) {
                Some(def) if def.form == Form::Box => "into",
                _ => "onto",
            };
            format!("{preposition} the {}", describe(objects, id))
        }
    }
}
