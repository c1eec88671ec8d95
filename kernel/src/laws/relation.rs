//! Spatial relations evaluated against the *current* configuration.
//!
//! Distinct from [`crate::laws::support`], which judges hypothetical
//! placements. Used both to filter relation-qualified descriptions and to
//! decide goal satisfaction.

use serde::{Deserialize, Serialize};

use crate::world::configuration::Configuration;
use crate::world::object::Referent;

/// A spatial relation between two referents, or the unary `holding`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    Ontop,
    Inside,
    Above,
    Below,
    Leftof,
    Rightof,
    Beside,
    Holding,
}

impl Relation {
    /// Whether this relation means direct support (checked by physical laws).
    #[must_use]
    pub const fn is_support(self) -> bool {
        matches!(self, Self::Ontop | Self::Inside)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ontop => "ontop",
            Self::Inside => "inside",
            Self::Above => "above",
            Self::Below => "below",
            Self::Leftof => "leftof",
            Self::Rightof => "rightof",
            Self::Beside => "beside",
            Self::Holding => "holding",
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Does `relation(parent, child)` hold in `configuration`?
///
/// Objects without a position (held or unknown) make every relation false.
/// The floor is only meaningful as the child of `ontop`/`inside`. `holding`
/// is unary and always false here; the goal evaluator handles it.
#[must_use]
pub fn holds(
    relation: Relation,
    parent: &Referent,
    child: &Referent,
    configuration: &Configuration,
) -> bool {
    let Referent::Object(parent_id) = parent else {
        return false;
    };
    let Some(p) = configuration.position(parent_id) else {
        return false;
    };
    let c = match child {
        Referent::Floor => {
            return relation.is_support() && p.row == 0;
        }
        Referent::Object(child_id) => match configuration.position(child_id) {
            Some(c) => c,
            None => return false,
        },
    };
    match relation {
        Relation::Ontop | Relation::Inside => p.column == c.column && p.row == c.row + 1,
        Relation::Above => p.column == c.column && p.row > c.row,
        Relation::Below => p.column == c.column && p.row < c.row,
        Relation::Leftof => p.column + 1 == c.column,
        Relation::Rightof => p.column == c.column + 1,
        Relation::Beside => p.column.abs_diff(c.column) == 1,
        Relation::Holding => false,
    }
}
