//! World snapshots: fixture loading, digest stability and validation.

use lock_tests::{small_world, SMALL_WORLD_JSON};
use stacker_kernel::snapshot::{World, WorldError};
use stacker_kernel::world::object::ObjectId;

#[test]
fn fixture_loads_with_expected_shape() {
    let world = small_world();
    assert_eq!(world.objects().len(), 7);
    assert_eq!(world.configuration().column_count(), 5);
    assert_eq!(world.configuration().holding(), None);
    assert_eq!(
        world.configuration().top_of(3),
        Some(&ObjectId::new("f"))
    );
}

#[test]
fn world_digest_is_stable_across_loads() {
    let first = small_world().digest().unwrap();
    for _ in 1..10 {
        assert_eq!(first, small_world().digest().unwrap());
    }
    assert!(first.as_str().starts_with("sha256:"));
}

#[test]
fn whitespace_does_not_change_the_digest() {
    let compact: serde_json::Value = serde_json::from_str(SMALL_WORLD_JSON).unwrap();
    let reparsed = World::from_json_str(&compact.to_string()).unwrap();
    assert_eq!(small_world().digest().unwrap(), reparsed.digest().unwrap());
}

#[test]
fn moving_an_object_changes_the_digest() {
    let moved = SMALL_WORLD_JSON.replace(r#"[["e"], ["g", "l"], ["p"]"#, r#"[[], ["g", "l"], ["p", "e"]"#);
    let other = World::from_json_str(&moved).unwrap();
    assert_ne!(small_world().digest().unwrap(), other.digest().unwrap());
}

const OBJECTS: &str = r#"{
    "a": {"form": "ball", "size": "small", "color": "white"},
    "b": {"form": "box", "size": "large", "color": "red"}
}"#;

fn load(stacks: &str, holding: &str, arm: usize) -> Result<World, WorldError> {
    World::from_json_str(&format!(
        r#"{{"objects": {OBJECTS}, "stacks": {stacks}, "holding": {holding}, "arm": {arm}}}"#
    ))
}

#[test]
fn invalid_worlds_are_rejected() {
    assert!(load(r#"[["b", "a"], []]"#, "null", 0).is_ok());
    assert!(load(r#"[["b"], []]"#, r#""a""#, 1).is_ok());

    assert_eq!(
        load(r#"[["a", "b"]]"#, "null", 0).unwrap_err(),
        WorldError::PhysicsViolation {
            top: ObjectId::new("b"),
            base: ObjectId::new("a")
        }
    );
    assert_eq!(
        load(r#"[["b", "a"]]"#, r#""a""#, 0).unwrap_err(),
        WorldError::DuplicatePlacement { id: ObjectId::new("a") }
    );
    assert_eq!(
        load(r#"[["z"]]"#, "null", 0).unwrap_err(),
        WorldError::UndefinedObject { id: ObjectId::new("z") }
    );
    assert_eq!(
        load(r#"[["b"], ["a"]]"#, "null", 2).unwrap_err(),
        WorldError::ArmOutOfRange { arm: 2, columns: 2 }
    );
    assert!(matches!(
        World::from_json_str("{\"objects\": 3}"),
        Err(WorldError::Malformed { .. })
    ));
}
