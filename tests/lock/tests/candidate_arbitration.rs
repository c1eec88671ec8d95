//! Candidate parses are planned independently: any success suppresses every
//! failure, and total failure surfaces the first error in input order.

use lock_tests::{small_world, the};
use stacker_harness::command::{Command, Location};
use stacker_harness::error::PlanError;
use stacker_harness::policy::PolicyConfig;
use stacker_harness::runner::run_candidates;
use stacker_kernel::laws::relation::Relation;
use stacker_kernel::world::object::Form;

fn ball_on_table() -> Command {
    Command::Move {
        entity: the(Form::Ball, None, Some("white")),
        location: Location::new(Relation::Ontop, the(Form::Table, None, None)),
    }
}

fn take_pyramid() -> Command {
    Command::Take {
        entity: the(Form::Pyramid, None, None),
    }
}

fn take_plank() -> Command {
    Command::Take {
        entity: the(Form::Plank, None, None),
    }
}

#[test]
fn one_success_among_failures() {
    let outcomes = run_candidates(
        &small_world(),
        &[ball_on_table(), take_plank(), take_pyramid()],
        &PolicyConfig::default(),
    )
    .unwrap();
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].goal.to_string(), "holding(p)");
}

#[test]
fn every_success_is_returned_in_input_order() {
    let take_ball = Command::Take {
        entity: the(Form::Ball, None, Some("black")),
    };
    let outcomes = run_candidates(
        &small_world(),
        &[take_plank(), take_ball],
        &PolicyConfig::default(),
    )
    .unwrap();
    let goals: Vec<String> = outcomes.iter().map(|o| o.goal.to_string()).collect();
    assert_eq!(goals, vec!["holding(p)", "holding(f)"]);
}

#[test]
fn first_error_wins_when_all_fail() {
    let world = small_world();
    let config = PolicyConfig::default();
    assert_eq!(
        run_candidates(&world, &[ball_on_table(), take_pyramid()], &config).unwrap_err(),
        PlanError::NoInterpretation
    );
    assert!(matches!(
        run_candidates(&world, &[take_pyramid(), ball_on_table()], &config).unwrap_err(),
        PlanError::UnresolvedReference { .. }
    ));
}

#[test]
fn empty_candidate_list_is_an_error() {
    assert_eq!(
        run_candidates(&small_world(), &[], &PolicyConfig::default()).unwrap_err(),
        PlanError::NoCandidates
    );
}
