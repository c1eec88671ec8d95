//! Shared fixtures and assertions for the lock tests.
//!
//! `small_world()` is the canonical five-column world stored in
//! `tests/fixtures/small_world.json`:
//!
//! ```text
//! col 0: e (large white ball)
//! col 1: g (large blue table), l (large red box)
//! col 2: p (large green plank)
//! col 3: k (large yellow box), m (small blue box), f (small black ball)
//! col 4: empty
//! ```

use std::path::PathBuf;

use stacker_harness::command::{Entity, ObjectDescription};
use stacker_harness::goal::satisfies;
use stacker_harness::runner::PlanOutcome;
use stacker_kernel::arm::apply::execute;
use stacker_kernel::snapshot::World;
use stacker_kernel::world::configuration::Configuration;
use stacker_kernel::world::object::{Form, Size};

pub const SMALL_WORLD_JSON: &str = include_str!("../../fixtures/small_world.json");

/// Absolute path of a file under `tests/fixtures/`.
#[must_use]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../fixtures")
        .join(name)
}

/// # Panics
///
/// Panics if the fixture is invalid.
#[must_use]
pub fn small_world() -> World {
    World::from_json_str(SMALL_WORLD_JSON).expect("small_world fixture is valid")
}

/// # Panics
///
/// Panics if the world is invalid.
#[must_use]
pub fn world_from_stacks(objects_json: &str, stacks_json: &str, arm: usize) -> World {
    let json = format!(r#"{{"objects": {objects_json}, "stacks": {stacks_json}, "arm": {arm}}}"#);
    World::from_json_str(&json).expect("world is valid")
}

/// `the <size> <color> <form>`, with absent filters left open.
#[must_use]
pub fn the(form: Form, size: Option<Size>, color: Option<&str>) -> Entity {
    Entity::the(description(form, size, color))
}

#[must_use]
pub fn description(form: Form, size: Option<Size>, color: Option<&str>) -> ObjectDescription {
    let mut d = ObjectDescription::new(form);
    if let Some(size) = size {
        d = d.with_size(size);
    }
    if let Some(color) = color {
        d = d.with_color(color);
    }
    d
}

/// Execute the plan's actions from the world's start and check the goal.
///
/// Returns the configuration the arm ends in.
///
/// # Panics
///
/// Panics if any action is illegal, if the final configuration does not
/// satisfy the goal, or if it differs from the searched path's last state.
pub fn assert_sound(world: &World, outcome: &PlanOutcome) -> Configuration {
    let end = execute(world.configuration(), world.objects(), &outcome.plan.actions)
        .unwrap_or_else(|e| panic!("plan {} is not executable: {e}", outcome.plan.encoded()));
    assert!(
        satisfies(&outcome.goal, &end),
        "plan {} does not reach goal {}",
        outcome.plan.encoded(),
        outcome.goal
    );
    let searched = outcome.final_configuration().expect("path is never empty");
    assert!(
        end.identity_eq(searched),
        "executed plan diverges from the searched path"
    );
    end
}
