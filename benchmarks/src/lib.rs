//! Shared world builders for the stacker benchmark suites.

use stacker_harness::command::{Command, Entity, Location, ObjectDescription};
use stacker_kernel::laws::relation::Relation;
use stacker_kernel::snapshot::World;
use stacker_kernel::world::configuration::Configuration;
use stacker_kernel::world::object::{Form, ObjectDefinition, ObjectId, ObjectTable, Size};

/// Object id of the `index`-th brick in a tower world.
#[must_use]
pub fn brick_id(index: usize) -> ObjectId {
    ObjectId::new(format!("b{index:02}"))
}

/// `columns` columns; the first holds a tower of `height` equal large bricks,
/// the rest are empty. Brick `b00` sits at the bottom.
///
/// # Panics
///
/// Panics if `columns` is zero. Benchmark setup failures are fatal.
#[must_use]
pub fn tower_world(columns: usize, height: usize) -> World {
    assert!(columns > 0, "a tower world needs a column");
    let objects: ObjectTable = (0..height)
        .map(|i| {
            (
                brick_id(i),
                ObjectDefinition::new(Form::Brick, Size::Large, format!("c{i}")),
            )
        })
        .collect();
    let mut stacks = vec![Vec::new(); columns];
    stacks[0] = (0..height).map(brick_id).collect();
    World::new(objects, Configuration::new(stacks, None, 0)).expect("tower world is valid")
}

/// "Put the bottom brick on the top brick", which forces the tower above it
/// to be dismantled.
#[must_use]
pub fn bottom_onto_top_command(height: usize) -> Command {
    let brick = |i: usize| Entity::the(ObjectDescription::new(Form::Brick).with_color(format!("c{i}")));
    Command::Move {
        entity: brick(0),
        location: Location::new(Relation::Ontop, brick(height.saturating_sub(1))),
    }
}

/// "Take the bottom brick."
#[must_use]
pub fn take_bottom_command() -> Command {
    Command::Take {
        entity: Entity::the(ObjectDescription::new(Form::Brick).with_color("c0")),
    }
}
