//! Goal formulas in disjunctive normal form, and their evaluation.
//!
//! A [`GoalFormula`] is a set of [`Conjunction`]s; it is satisfied when at
//! least one conjunction has every literal true. Sets are ordered, so the
//! textual form and the digest of a formula are deterministic.

use std::collections::BTreeSet;

use stacker_kernel::laws::relation::{holds, Relation};
use stacker_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use stacker_kernel::world::configuration::Configuration;
use stacker_kernel::world::object::{ObjectId, Referent};

/// A possibly negated relation over referents.
///
/// `holding` takes one argument; every other relation takes two
/// (`relation(parent, child)`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    pub polarity: bool,
    pub relation: Relation,
    pub args: Vec<Referent>,
}

impl Literal {
    /// Positive `holding(id)`.
    #[must_use]
    pub fn holding(id: ObjectId) -> Self {
        Self {
            polarity: true,
            relation: Relation::Holding,
            args: vec![Referent::Object(id)],
        }
    }

    /// Positive `relation(parent, child)`.
    #[must_use]
    pub fn binary(relation: Relation, parent: Referent, child: Referent) -> Self {
        Self {
            polarity: true,
            relation,
            args: vec![parent, child],
        }
    }

    #[must_use]
    pub fn negated(mut self) -> Self {
        self.polarity = !self.polarity;
        self
    }

    /// Truth of the literal in `configuration`, polarity applied.
    ///
    /// Literals with the wrong arity for their relation are never true.
    #[must_use]
    pub fn evaluate(&self, configuration: &Configuration) -> bool {
        let truth = match (self.relation, self.args.as_slice()) {
            (Relation::Holding, [Referent::Object(id)]) => configuration.holding() == Some(id),
            (Relation::Holding, _) => false,
            (relation, [parent, child]) => holds(relation, parent, child, configuration),
            _ => false,
        };
        truth == self.polarity
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.polarity {
            f.write_str("-")?;
        }
        write!(f, "{}(", self.relation)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(")")
    }
}

/// A set of literals that must all hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Conjunction(BTreeSet<Literal>);

impl Conjunction {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a literal; returns `false` if it was already present.
    pub fn insert(&mut self, literal: Literal) -> bool {
        self.0.insert(literal)
    }

    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn is_satisfied_by(&self, configuration: &Configuration) -> bool {
        self.0.iter().all(|l| l.evaluate(configuration))
    }
}

impl FromIterator<Literal> for Conjunction {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for Conjunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, literal) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" & ")?;
            }
            write!(f, "{literal}")?;
        }
        Ok(())
    }
}

/// A non-empty disjunction of non-empty conjunctions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GoalFormula(BTreeSet<Conjunction>);

impl GoalFormula {
    /// Build a formula, discarding empty conjunctions.
    ///
    /// Returns `None` if nothing remains: an empty formula is unsatisfiable
    /// and never a valid compilation result.
    pub fn from_conjunctions(conjunctions: impl IntoIterator<Item = Conjunction>) -> Option<Self> {
        let set: BTreeSet<Conjunction> = conjunctions
            .into_iter()
            .filter(|c| !c.is_empty())
            .collect();
        if set.is_empty() {
            None
        } else {
            Some(Self(set))
        }
    }

    pub fn conjunctions(&self) -> impl Iterator<Item = &Conjunction> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Content hash of the textual form.
    #[must_use]
    pub fn digest(&self) -> ContentHash {
        canonical_hash(HashDomain::GoalFormula, self.to_string().as_bytes())
    }
}

impl std::fmt::Display for GoalFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, conjunction) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{conjunction}")?;
        }
        Ok(())
    }
}

/// Does some conjunction of `goal` hold entirely in `configuration`?
#[must_use]
pub fn satisfies(goal: &GoalFormula, configuration: &Configuration) -> bool {
    goal.0.iter().any(|c| c.is_satisfied_by(configuration))
}
