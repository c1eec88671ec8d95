//! `BlocksWorld`: the stacking world as a [`SearchWorld`].
//!
//! Edges are whole pick-and-place cycles (cost 1), plus drop-only edges when
//! the gripper starts full and pick-only edges so `holding` goals are
//! reachable. Arm travel is free and not part of the state identity.

use stacker_kernel::laws::relation::Relation;
use stacker_kernel::laws::support::can_support;
use stacker_kernel::proof::hash::ContentHash;
use stacker_kernel::world::configuration::Configuration;
use stacker_kernel::world::object::{ObjectDefinition, ObjectTable, Referent};
use stacker_search::contract::{SearchWorld, Successor};
use stacker_search::heuristic::Heuristic;

use crate::goal::{satisfies, Conjunction, GoalFormula, Literal};

/// Uniform edge cost.
pub const EDGE_COST: u64 = 1;

/// Search view of a blocks world with a fixed goal.
pub struct BlocksWorld<'a> {
    objects: &'a ObjectTable,
    goal: &'a GoalFormula,
}

impl<'a> BlocksWorld<'a> {
    #[must_use]
    pub fn new(objects: &'a ObjectTable, goal: &'a GoalFormula) -> Self {
        Self { objects, goal }
    }
}

impl SearchWorld for BlocksWorld<'_> {
    type State = Configuration;

    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "blocks"
    }

    fn successors(&self, state: &Configuration) -> Vec<Successor<Configuration>> {
        successors(state, self.objects)
    }

    fn is_goal(&self, state: &Configuration) -> bool {
        satisfies(self.goal, state)
    }

    fn fingerprint(&self, state: &Configuration) -> ContentHash {
        state.fingerprint()
    }
}

/// Every configuration one edge away from `configuration`, in a fixed order.
///
/// Holding an object: drop it on each column that can support it. Holding
/// nothing: for each source column, move its top onto every other column
/// that can support it, then lift it and keep holding it.
#[must_use]
pub fn successors(configuration: &Configuration, objects: &ObjectTable) -> Vec<Successor<Configuration>> {
    let columns = configuration.column_count();
    let edge = |state: Configuration| Successor {
        state,
        cost: EDGE_COST,
    };

    if configuration.holding().is_some() {
        return (0..columns)
            .filter_map(|j| drop_onto(configuration, objects, j))
            .map(edge)
            .collect();
    }

    let mut out = Vec::new();
    for i in 0..columns {
        let Some(lifted) = configuration.with_picked(i) else {
            continue;
        };
        out.extend(
            (0..columns)
                .filter(|&j| j != i)
                .filter_map(|j| drop_onto(&lifted, objects, j))
                .map(edge),
        );
        out.push(edge(lifted));
    }
    out
}

/// Drop the held object on `column` if the physical laws allow it.
fn drop_onto(configuration: &Configuration, objects: &ObjectTable, column: usize) -> Option<Configuration> {
    let top = objects.get(configuration.holding()?)?;
    let base = match configuration.top_of(column) {
        Some(id) => objects.get(id)?.clone(),
        None => ObjectDefinition::floor(),
    };
    if !can_support(top, &base) {
        return None;
    }
    configuration.with_dropped(column)
}

/// Goal-directed estimate of remaining pick/place edges.
///
/// Each literal is bounded below by the objects that must be moved out of
/// the way plus the final placement; a conjunction takes the largest of its
/// literal bounds and a formula the smallest conjunction bound, so the
/// estimate never exceeds the true cost.
#[derive(Debug, Clone, Copy)]
pub struct GoalHeuristic<'a> {
    goal: &'a GoalFormula,
}

impl<'a> GoalHeuristic<'a> {
    #[must_use]
    pub fn new(goal: &'a GoalFormula) -> Self {
        Self { goal }
    }
}

impl Heuristic<Configuration> for GoalHeuristic<'_> {
    fn estimate(&self, state: &Configuration) -> u64 {
        self.goal
            .conjunctions()
            .map(|c| conjunction_estimate(c, state))
            .min()
            .unwrap_or(0)
    }
}

fn conjunction_estimate(conjunction: &Conjunction, state: &Configuration) -> u64 {
    conjunction
        .literals()
        .map(|l| literal_estimate(l, state))
        .max()
        .unwrap_or(0)
}

fn literal_estimate(literal: &Literal, state: &Configuration) -> u64 {
    if literal.evaluate(state) {
        return 0;
    }
    if !literal.polarity {
        return 1;
    }
    let blockers = match (literal.relation, literal.args.as_slice()) {
        (Relation::Holding, [a]) => state.objects_above(a),
        (Relation::Ontop | Relation::Inside, [a, b]) => blockers_above(state, a, b),
        _ => 0,
    };
    1 + blockers as u64
}

/// Objects that must leave the stacks holding `a` or `b`, counted once even
/// when both share a column.
fn blockers_above(state: &Configuration, a: &Referent, b: &Referent) -> usize {
    let position = |r: &Referent| r.object().and_then(|id| state.position(id));
    match (position(a), position(b)) {
        (Some(pa), Some(pb)) if pa.column == pb.column => {
            state.objects_above(if pa.row < pb.row { a } else { b })
        }
        _ => state.objects_above(a) + state.objects_above(b),
    }
}
