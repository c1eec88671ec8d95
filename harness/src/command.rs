//! The parsed command tree handed over by the natural-language front end.
//!
//! Commands arrive either as typed values or as JSON, e.g.
//!
//! ```json
//! {"command": "move",
//!  "entity": {"quantifier": "any", "object": {"form": "ball", "color": "white"}},
//!  "location": {"relation": "inside",
//!               "entity": {"object": {"form": "box", "size": "large"}}}}
//! ```

use serde::{Deserialize, Serialize};

use stacker_kernel::laws::relation::Relation;
use stacker_kernel::world::object::{Form, Size};

/// How many of the matching objects an entity refers to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantifier {
    /// A definite reference; ambiguity is preserved as a disjunction.
    #[default]
    The,
    /// Any one of the matches.
    Any,
    /// Every match at once.
    All,
}

/// A (possibly relation-qualified) object description.
///
/// Absent filters are wildcards; `form: anyform` matches every form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectDescription {
    #[serde(default = "any_form")]
    pub form: Form,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Box<Location>>,
}

fn any_form() -> Form {
    Form::AnyForm
}

impl ObjectDescription {
    #[must_use]
    pub fn new(form: Form) -> Self {
        Self {
            form,
            size: None,
            color: None,
            location: None,
        }
    }

    #[must_use]
    pub fn floor() -> Self {
        Self::new(Form::Floor)
    }

    #[must_use]
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Qualify with "that is `relation` `entity`".
    #[must_use]
    pub fn located(mut self, relation: Relation, entity: Entity) -> Self {
        self.location = Some(Box::new(Location { relation, entity }));
        self
    }
}

impl std::fmt::Display for ObjectDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut words: Vec<String> = Vec::new();
        if let Some(size) = self.size {
            if size != Size::Unspecified {
                words.push(size.name().to_string());
            }
        }
        if let Some(color) = &self.color {
            words.push(color.clone());
        }
        words.push(self.form.name().to_string());
        write!(f, "{}", words.join(" "))?;
        if let Some(location) = &self.location {
            write!(f, " {location}")?;
        }
        Ok(())
    }
}

/// A quantified description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(default)]
    pub quantifier: Quantifier,
    pub object: ObjectDescription,
}

impl Entity {
    #[must_use]
    pub fn the(object: ObjectDescription) -> Self {
        Self {
            quantifier: Quantifier::The,
            object,
        }
    }

    #[must_use]
    pub fn any(object: ObjectDescription) -> Self {
        Self {
            quantifier: Quantifier::Any,
            object,
        }
    }

    #[must_use]
    pub fn all(object: ObjectDescription) -> Self {
        Self {
            quantifier: Quantifier::All,
            object,
        }
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let article = match self.quantifier {
            Quantifier::The => "the",
            Quantifier::Any => "any",
            Quantifier::All => "all",
        };
        write!(f, "{article} {}", self.object)
    }
}

/// A relation to a further entity: "inside the large box".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub relation: Relation,
    pub entity: Entity,
}

impl Location {
    #[must_use]
    pub fn new(relation: Relation, entity: Entity) -> Self {
        Self { relation, entity }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.relation, self.entity)
    }
}

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum Command {
    /// Pick up an object and keep holding it.
    Take { entity: Entity },
    /// Bring an object into a relation with another.
    Move { entity: Entity, location: Location },
    /// Place the object currently held.
    Put { location: Location },
}

impl Command {
    /// Parse a command from JSON.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed input.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
