//! `apply()`: execute one arm action on a configuration.
//!
//! Returns a new configuration; the input is never modified. Fail-closed:
//! an action the arm cannot perform is a typed [`ArmError`], never a no-op.

use crate::arm::action::Action;
use crate::laws::support::can_support;
use crate::world::configuration::Configuration;
use crate::world::object::{ObjectDefinition, ObjectId, ObjectTable};

/// Typed failure for arm execution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArmError {
    #[error("arm cannot step {direction} from column {column}")]
    OutOfBounds {
        column: usize,
        direction: &'static str,
    },
    #[error("arm already holds `{held}`")]
    GripperFull { held: ObjectId },
    #[error("arm holds nothing to drop")]
    GripperEmpty,
    #[error("column {column} has nothing to pick")]
    EmptyColumn { column: usize },
    #[error("column {column} does not exist")]
    NoSuchColumn { column: usize },
    #[error("object `{top}` cannot rest on {base}")]
    PhysicsViolation { top: ObjectId, base: String },
    #[error("object `{id}` has no definition")]
    UndefinedObject { id: ObjectId },
    #[error("action {index} ({action}) failed: {source}")]
    AtStep {
        index: usize,
        action: Action,
        #[source]
        source: Box<ArmError>,
    },
}

/// Execute a single action.
///
/// # Errors
///
/// Returns [`ArmError`] when the arm leaves the table, picks from an empty
/// column or with a full gripper, drops with an empty gripper, or drops an
/// object the physical laws reject.
pub fn apply(
    configuration: &Configuration,
    objects: &ObjectTable,
    action: Action,
) -> Result<Configuration, ArmError> {
    let arm = configuration.arm();
    match action {
        Action::StepLeft => {
            if arm == 0 {
                return Err(ArmError::OutOfBounds {
                    column: arm,
                    direction: "left",
                });
            }
            Ok(configuration.with_arm(arm - 1))
        }
        Action::StepRight => {
            if arm + 1 >= configuration.column_count() {
                return Err(ArmError::OutOfBounds {
                    column: arm,
                    direction: "right",
                });
            }
            Ok(configuration.with_arm(arm + 1))
        }
        Action::Pick => {
            if let Some(held) = configuration.holding() {
                return Err(ArmError::GripperFull { held: held.clone() });
            }
            configuration
                .with_picked(arm)
                .ok_or(ArmError::EmptyColumn { column: arm })
        }
        Action::Drop => {
            let held = configuration.holding().ok_or(ArmError::GripperEmpty)?;
            if arm >= configuration.column_count() {
                return Err(ArmError::NoSuchColumn { column: arm });
            }
            let top = definition(objects, held)?;
            let (base, base_name) = match configuration.top_of(arm) {
                Some(id) => (definition(objects, id)?.clone(), format!("`{id}`")),
                None => (ObjectDefinition::floor(), "the floor".to_string()),
            };
            if !can_support(top, &base) {
                return Err(ArmError::PhysicsViolation {
                    top: held.clone(),
                    base: base_name,
                });
            }
            configuration
                .with_dropped(arm)
                .ok_or(ArmError::NoSuchColumn { column: arm })
        }
    }
}

/// Execute a sequence of actions, stopping at the first failure.
///
/// # Errors
///
/// Returns [`ArmError::AtStep`] wrapping the failure of the offending action.
pub fn execute(
    configuration: &Configuration,
    objects: &ObjectTable,
    actions: &[Action],
) -> Result<Configuration, ArmError> {
    actions
        .iter()
        .enumerate()
        .try_fold(configuration.clone(), |current, (index, &action)| {
            apply(&current, objects, action).map_err(|e| ArmError::AtStep {
                index,
                action,
                source: Box::new(e),
            })
        })
}

fn definition<'a>(
    objects: &'a ObjectTable,
    id: &ObjectId,
) -> Result<&'a ObjectDefinition, ArmError> {
    objects
        .get(id)
        .ok_or_else(|| ArmError::UndefinedObject { id: id.clone() })
}
