//! Goal compilation: grounded commands to goal formulas.
//!
//! Candidate literals that are self-referential or physically impossible are
//! dropped silently; only a formula left with no conjunction at all is an
//! error.

use std::collections::BTreeSet;

use stacker_kernel::laws::relation::Relation;
use stacker_kernel::laws::support::can_support;
use stacker_kernel::world::object::{ObjectTable, Referent};
use tracing::debug;

use crate::command::Quantifier;
use crate::error::PlanError;
use crate::goal::{Conjunction, GoalFormula, Literal};
use crate::resolve::GroundedCommand;

/// Compile a grounded command into a goal formula.
///
/// # Errors
///
/// Returns [`PlanError::NoInterpretation`] if every candidate conjunction was
/// filtered out.
pub fn compile(grounded: &GroundedCommand, objects: &ObjectTable) -> Result<GoalFormula, PlanError> {
    let conjunctions = match grounded {
        GroundedCommand::Take {
            targets,
            quantifier,
        } => take_conjunctions(targets, *quantifier),
        GroundedCommand::Move {
            targets,
            quantifier,
            relation,
            destinations,
            destination_quantifier,
        } => move_groups(targets, *quantifier, destinations, *destination_quantifier)
            .into_iter()
            .filter(|group| {
                group
                    .iter()
                    .all(|(x, y)| literal_allowed(*relation, x, y, objects))
                    && support_consistent(*relation, group)
            })
            .map(|group| {
                group
                    .into_iter()
                    .map(|(x, y)| Literal::binary(*relation, x.clone(), y.clone()))
                    .collect::<Conjunction>()
            })
            .collect(),
    };
    let formula = GoalFormula::from_conjunctions(conjunctions).ok_or(PlanError::NoInterpretation)?;
    debug!(goal = %formula, "goal compiled");
    Ok(formula)
}

fn take_conjunctions(targets: &BTreeSet<Referent>, quantifier: Quantifier) -> Vec<Conjunction> {
    let held: Vec<Literal> = targets
        .iter()
        .filter_map(Referent::object)
        .map(|id| Literal::holding(id.clone()))
        .collect();
    match quantifier {
        // The gripper holds one object, so "all" only works for a single match.
        Quantifier::All if held.len() != 1 => Vec::new(),
        _ => held
            .into_iter()
            .map(|l| std::iter::once(l).collect())
            .collect(),
    }
}

type Pair<'a> = (&'a Referent, &'a Referent);

/// Group `(x, y)` pairs into would-be conjunctions according to quantifiers.
fn move_groups<'a>(
    xs: &'a BTreeSet<Referent>,
    qx: Quantifier,
    ys: &'a BTreeSet<Referent>,
    qy: Quantifier,
) -> Vec<Vec<Pair<'a>>> {
    match (qx == Quantifier::All, qy == Quantifier::All) {
        (false, false) => xs
            .iter()
            .flat_map(|x| ys.iter().map(move |y| vec![(x, y)]))
            .collect(),
        (true, false) => ys
            .iter()
            .map(|y| xs.iter().map(|x| (x, y)).collect())
            .collect(),
        (false, true) => xs
            .iter()
            .map(|x| ys.iter().map(|y| (x, y)).collect())
            .collect(),
        (true, true) => vec![xs
            .iter()
            .flat_map(|x| ys.iter().map(move |y| (x, y)))
            .collect()],
    }
}

fn literal_allowed(relation: Relation, x: &Referent, y: &Referent, objects: &ObjectTable) -> bool {
    if x == y || relation == Relation::Holding {
        return false;
    }
    let Some(top) = x.object().and_then(|_| objects.definition_of(x)) else {
        return false;
    };
    match y {
        Referent::Floor => relation.is_support(),
        Referent::Object(_) if relation.is_support() => objects
            .definition_of(y)
            .is_some_and(|base| can_support(&top, &base)),
        Referent::Object(_) => true,
    }
}

/// Rejects groups asking one object to rest directly on two bases, or two
/// objects to rest directly on the same non-floor base.
fn support_consistent(relation: Relation, group: &[Pair<'_>]) -> bool {
    if !relation.is_support() {
        return true;
    }
    let mut tops = BTreeSet::new();
    let mut bases = BTreeSet::new();
    group.iter().all(|(x, y)| {
        let base_free = match y {
            Referent::Floor => true,
            Referent::Object(_) => bases.insert(*y),
        };
        tops.insert(*x) && base_free
    })
}
