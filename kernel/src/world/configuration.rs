//! `Configuration`: one snapshot of the stacks, the gripper and the arm.
//!
//! # Equality semantics
//!
//! `Configuration` intentionally does **not** derive `Eq` or `Hash`.
//!
//! - State equality (for search/dedup): stacks and held object only. The arm
//!   column is excluded because travel is free; use
//!   [`Configuration::identity_eq`] or compare [`Configuration::fingerprint`]s.
//! - Full equality including the arm: [`Configuration::bitwise_eq`].
//!
//! Configurations are values. Every transition clones first and mutates the
//! clone, so no two search branches ever share a stack vector.

use serde::{Deserialize, Serialize};

use crate::proof::hash::{canonical_hash, ContentHash, HashDomain};
use crate::world::object::{ObjectId, Referent};

/// Tag bytes for the identity serialization. A stack is written as
/// `STACK, len:u32le, (len:u32le, id bytes)*`; the gripper as `HOLD` + id or
/// `EMPTY`.
const TAG_STACK: u8 = 0x01;
const TAG_HOLD: u8 = 0x02;
const TAG_EMPTY: u8 = 0x03;

/// Where an object currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Stack (column) index, left to right.
    pub column: usize,
    /// Height within the stack; 0 rests on the floor.
    pub row: usize,
}

/// Stacks (bottom to top), held object and arm column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Configuration {
    stacks: Vec<Vec<ObjectId>>,
    #[serde(default)]
    holding: Option<ObjectId>,
    #[serde(default)]
    arm: usize,
}

impl Configuration {
    /// Build a configuration. Placement invariants are checked by
    /// [`crate::snapshot::World::new`], not here.
    #[must_use]
    pub fn new(stacks: Vec<Vec<ObjectId>>, holding: Option<ObjectId>, arm: usize) -> Self {
        Self {
            stacks,
            holding,
            arm,
        }
    }

    #[must_use]
    pub fn stacks(&self) -> &[Vec<ObjectId>] {
        &self.stacks
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.stacks.len()
    }

    #[must_use]
    pub fn holding(&self) -> Option<&ObjectId> {
        self.holding.as_ref()
    }

    #[must_use]
    pub const fn arm(&self) -> usize {
        self.arm
    }

    /// Top object of a column, `None` if the column is empty or out of range.
    #[must_use]
    pub fn top_of(&self, column: usize) -> Option<&ObjectId> {
        self.stacks.get(column).and_then(|s| s.last())
    }

    /// Position of a placed object. Held and unknown objects have none.
    #[must_use]
    pub fn position(&self, id: &ObjectId) -> Option<Position> {
        self.stacks.iter().enumerate().find_map(|(column, stack)| {
            stack
                .iter()
                .position(|o| o == id)
                .map(|row| Position { column, row })
        })
    }

    /// Whether the object is in some stack or in the gripper.
    #[must_use]
    pub fn contains(&self, id: &ObjectId) -> bool {
        self.holding.as_ref() == Some(id) || self.position(id).is_some()
    }

    /// Number of objects stacked above a referent.
    ///
    /// The floor and objects not in a stack have nothing above them.
    #[must_use]
    pub fn objects_above(&self, referent: &Referent) -> usize {
        let Referent::Object(id) = referent else {
            return 0;
        };
        self.position(id)
            .map_or(0, |p| self.stacks[p.column].len() - p.row - 1)
    }

    /// Clone with the top of `column` lifted into the (empty) gripper.
    ///
    /// Returns `None` if the gripper is occupied or the column is empty.
    #[must_use]
    pub fn with_picked(&self, column: usize) -> Option<Self> {
        if self.holding.is_some() {
            return None;
        }
        let mut next = self.clone();
        let object = next.stacks.get_mut(column)?.pop()?;
        next.holding = Some(object);
        next.arm = column;
        Some(next)
    }

    /// Clone with the held object dropped onto `column`.
    ///
    /// Returns `None` if nothing is held or the column does not exist.
    /// Physical legality is the caller's concern.
    #[must_use]
    pub fn with_dropped(&self, column: usize) -> Option<Self> {
        let mut next = self.clone();
        let object = next.holding.take()?;
        next.stacks.get_mut(column)?.push(object);
        next.arm = column;
        Some(next)
    }

    /// Clone with the arm moved to `column` (no bounds check).
    #[must_use]
    pub fn with_arm(&self, column: usize) -> Self {
        let mut next = self.clone();
        next.arm = column;
        next
    }

    /// Deterministic serialization of the stacks and the held object.
    #[must_use]
    pub fn identity_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        for stack in &self.stacks {
            buf.push(TAG_STACK);
            push_len(&mut buf, stack.len());
            for id in stack {
                push_id(&mut buf, id);
            }
        }
        match &self.holding {
            Some(id) => {
                buf.push(TAG_HOLD);
                push_id(&mut buf, id);
            }
            None => buf.push(TAG_EMPTY),
        }
        buf
    }

    /// Canonical hash of [`Self::identity_bytes`].
    #[must_use]
    pub fn fingerprint(&self) -> ContentHash {
        canonical_hash(HashDomain::ConfigurationIdentity, &self.identity_bytes())
    }

    /// Structural equality of stacks (per column, per position) and gripper.
    #[must_use]
    pub fn identity_eq(&self, other: &Self) -> bool {
        self.stacks == other.stacks && self.holding == other.holding
    }

    /// [`Self::identity_eq`] plus the arm column.
    #[must_use]
    pub fn bitwise_eq(&self, other: &Self) -> bool {
        self.identity_eq(other) && self.arm == other.arm
    }
}

/// Free-function spelling of [`Configuration::identity_eq`].
#[must_use]
pub fn same_configuration(a: &Configuration, b: &Configuration) -> bool {
    a.identity_eq(b)
}

#[allow(clippy::cast_possible_truncation)]
fn push_len(buf: &mut Vec<u8>, len: usize) {
    buf.extend_from_slice(&(len as u32).to_le_bytes());
}

fn push_id(buf: &mut Vec<u8>, id: &ObjectId) {
    push_len(buf, id.as_str().len());
    buf.extend_from_slice(id.as_str().as_bytes());
}
