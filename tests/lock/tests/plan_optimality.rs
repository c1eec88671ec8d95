//! Optimality: the goal heuristic never changes the returned cost, which
//! equals the breadth-first distance to the nearest goal configuration.

use std::collections::{BTreeSet, VecDeque};

use lock_tests::{small_world, the, world_from_stacks};
use stacker_harness::command::{Command, Entity, Location, ObjectDescription};
use stacker_harness::goal::{satisfies, GoalFormula};
use stacker_harness::policy::{HeuristicMode, PolicyConfig};
use stacker_harness::runner::{interpret, plan_goal};
use stacker_harness::worlds::blocks::{successors, GoalHeuristic};
use stacker_kernel::laws::relation::Relation;
use stacker_kernel::snapshot::World;
use stacker_kernel::world::object::{Form, Size};
use stacker_search::heuristic::Heuristic;

fn config(mode: HeuristicMode) -> PolicyConfig {
    PolicyConfig {
        time_budget_ms: Some(120_000),
        max_expansions: None,
        heuristic: Some(mode),
    }
}

/// Plain breadth-first search over identity bytes.
fn bfs_distance(world: &World, goal: &GoalFormula) -> Option<u64> {
    let root = world.configuration().clone();
    let mut seen = BTreeSet::from([root.identity_bytes()]);
    let mut queue = VecDeque::from([(root, 0_u64)]);
    while let Some((state, depth)) = queue.pop_front() {
        if satisfies(goal, &state) {
            return Some(depth);
        }
        for next in successors(&state, world.objects()) {
            if seen.insert(next.state.identity_bytes()) {
                queue.push_back((next.state, depth + 1));
            }
        }
    }
    None
}

fn tower_world() -> World {
    let objects = r#"{
        "a": {"form": "brick", "size": "large", "color": "red"},
        "b": {"form": "brick", "size": "large", "color": "green"},
        "c": {"form": "brick", "size": "small", "color": "blue"},
        "d": {"form": "box", "size": "large", "color": "yellow"}
    }"#;
    world_from_stacks(objects, r#"[["a", "b", "c"], ["d"], []]"#, 1)
}

fn tower_commands() -> Vec<Command> {
    vec![
        Command::Move {
            entity: the(Form::Brick, None, Some("blue")),
            location: Location::new(Relation::Ontop, the(Form::Brick, None, Some("red"))),
        },
        Command::Take {
            entity: the(Form::Brick, None, Some("red")),
        },
        Command::Move {
            entity: the(Form::Brick, None, Some("green")),
            location: Location::new(Relation::Inside, the(Form::Box, None, None)),
        },
        Command::Move {
            entity: Entity::all(ObjectDescription::new(Form::Brick)),
            location: Location::new(Relation::Ontop, Entity::the(ObjectDescription::floor())),
        },
        Command::Move {
            entity: the(Form::Box, None, None),
            location: Location::new(Relation::Below, the(Form::Brick, Some(Size::Small), None)),
        },
    ]
}

#[test]
fn goal_heuristic_matches_breadth_first_distance() {
    let world = tower_world();
    for command in tower_commands() {
        let goal = interpret(&world, &command).unwrap();
        let expected = bfs_distance(&world, &goal).expect("goal is reachable");
        let guided = plan_goal(&world, &goal, &config(HeuristicMode::Goal)).unwrap();
        let uniform = plan_goal(&world, &goal, &config(HeuristicMode::Zero)).unwrap();
        assert_eq!(guided.cost, expected, "goal {goal}");
        assert_eq!(uniform.cost, expected, "goal {goal}");
    }
}

#[test]
fn heuristic_is_admissible_at_the_root() {
    let world = tower_world();
    for command in tower_commands() {
        let goal = interpret(&world, &command).unwrap();
        let exact = bfs_distance(&world, &goal).unwrap();
        let estimate = GoalHeuristic::new(&goal).estimate(world.configuration());
        assert!(estimate <= exact, "goal {goal}: {estimate} > {exact}");
    }
}

#[test]
fn guided_search_expands_no_more_than_uniform_cost() {
    let world = small_world();
    let cmd = Command::Move {
        entity: the(Form::Ball, Some(Size::Large), None),
        location: Location::new(Relation::Inside, the(Form::Box, None, Some("yellow"))),
    };
    let goal = interpret(&world, &cmd).unwrap();
    let guided = plan_goal(&world, &goal, &config(HeuristicMode::Goal)).unwrap();
    let uniform = plan_goal(&world, &goal, &config(HeuristicMode::Zero)).unwrap();
    assert_eq!(guided.cost, uniform.cost);
    assert!(guided.search.total_expansions <= uniform.search.total_expansions);
}
