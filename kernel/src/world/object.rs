//! Object definitions and referents.
//!
//! An object is keyed by a unique [`ObjectId`] and described by an immutable
//! [`ObjectDefinition`]. The floor is not an object: it is the [`Referent::Floor`]
//! sentinel, implicitly present under every stack.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Unique identifier of a real object.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Object shape.
///
/// `Floor` and `AnyForm` only appear in descriptions and in the floor
/// sentinel definition; a real object never carries either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Form {
    Ball,
    Box,
    Table,
    Brick,
    Plank,
    Pyramid,
    Floor,
    AnyForm,
}

impl Form {
    /// Lowercase name as used on the wire and in narration.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ball => "ball",
            Self::Box => "box",
            Self::Table => "table",
            Self::Brick => "brick",
            Self::Plank => "plank",
            Self::Pyramid => "pyramid",
            Self::Floor => "floor",
            Self::AnyForm => "object",
        }
    }
}

/// Object size.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Large,
    #[default]
    Unspecified,
}

impl Size {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Large => "large",
            Self::Unspecified => "",
        }
    }
}

/// Immutable description of a single object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectDefinition {
    pub form: Form,
    #[serde(default)]
    pub size: Size,
    #[serde(default)]
    pub color: String,
}

impl ObjectDefinition {
    #[must_use]
    pub fn new(form: Form, size: Size, color: impl Into<String>) -> Self {
        Self {
            form,
            size,
            color: color.into(),
        }
    }

    /// The definition standing in for the floor sentinel.
    #[must_use]
    pub fn floor() -> Self {
        Self {
            form: Form::Floor,
            size: Size::Unspecified,
            color: String::new(),
        }
    }

    /// Noun phrase without article, e.g. `"small red box"`.
    #[must_use]
    pub fn noun_phrase(&self) -> String {
        [self.size.name(), self.color.as_str(), self.form.name()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Something a description can denote and a literal can mention.
///
/// Ordered with the floor first so referent sets iterate deterministically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Referent {
    Floor,
    Object(ObjectId),
}

impl Referent {
    /// The object id, or `None` for the floor.
    #[must_use]
    pub fn object(&self) -> Option<&ObjectId> {
        match self {
            Self::Floor => None,
            Self::Object(id) => Some(id),
        }
    }
}

impl std::fmt::Display for Referent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Floor => f.write_str("floor"),
            Self::Object(id) => write!(f, "{id}"),
        }
    }
}

impl From<ObjectId> for Referent {
    fn from(id: ObjectId) -> Self {
        Self::Object(id)
    }
}

/// Definitions of every object in a world, ordered by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectTable(BTreeMap<ObjectId, ObjectDefinition>);

impl ObjectTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a definition, returning the previous one for this id.
    pub fn insert(
        &mut self,
        id: impl Into<ObjectId>,
        definition: ObjectDefinition,
    ) -> Option<ObjectDefinition> {
        self.0.insert(id.into(), definition)
    }

    #[must_use]
    pub fn get(&self, id: &ObjectId) -> Option<&ObjectDefinition> {
        self.0.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &ObjectId) -> bool {
        self.0.contains_key(id)
    }

    /// Definition of a referent; the floor maps to [`ObjectDefinition::floor`].
    #[must_use]
    pub fn definition_of(&self, referent: &Referent) -> Option<ObjectDefinition> {
        match referent {
            Referent::Floor => Some(ObjectDefinition::floor()),
            Referent::Object(id) => self.0.get(id).cloned(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ObjectId, &ObjectDefinition)> {
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
}

impl FromIterator<(ObjectId, ObjectDefinition)> for ObjectTable {
    fn from_iter<I: IntoIterator<Item = (ObjectId, ObjectDefinition)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
