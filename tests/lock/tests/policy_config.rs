//! Policy configuration files drive the planner.

use std::io::Write;

use lock_tests::{small_world, the};
use stacker_harness::command::{Command, Location};
use stacker_harness::error::PlanError;
use stacker_harness::policy::{ConfigError, HeuristicMode, PolicyConfig};
use stacker_harness::runner::run_command;
use stacker_kernel::laws::relation::Relation;
use stacker_kernel::world::object::{Form, Size};

fn write_config(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

fn three_step_command() -> Command {
    Command::Move {
        entity: the(Form::Ball, Some(Size::Large), None),
        location: Location::new(Relation::Inside, the(Form::Box, None, Some("yellow"))),
    }
}

#[test]
fn loaded_config_selects_uniform_cost_search() {
    let file = write_config(r#"{"heuristic": "zero", "time_budget_ms": 120000}"#);
    let config = PolicyConfig::load(file.path()).unwrap();
    assert_eq!(config.heuristic_mode(), HeuristicMode::Zero);

    let outcome = run_command(&small_world(), &three_step_command(), &config).unwrap();
    assert_eq!(outcome.cost, 3);
    let snapshot: serde_json::Value = serde_json::from_slice(&outcome.policy.bytes).unwrap();
    assert_eq!(snapshot["heuristic"], "zero");
    assert_eq!(snapshot["time_budget_ms"], 120_000);
}

#[test]
fn loaded_expansion_budget_is_enforced() {
    let file = write_config(r#"{"max_expansions": 2}"#);
    let config = PolicyConfig::load(file.path()).unwrap();
    assert_eq!(
        run_command(&small_world(), &three_step_command(), &config).unwrap_err(),
        PlanError::ExpansionBudgetExceeded { budget: 2 }
    );
}

#[test]
fn zero_expansion_budget_is_a_search_error() {
    let file = write_config(r#"{"max_expansions": 0}"#);
    let config = PolicyConfig::load(file.path()).unwrap();
    assert!(matches!(
        run_command(&small_world(), &three_step_command(), &config),
        Err(PlanError::Search(_))
    ));
}

#[test]
fn unreadable_and_malformed_configs_are_config_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        PolicyConfig::load(&dir.path().join("missing.json")),
        Err(ConfigError::Io { .. })
    ));

    let file = write_config("{not json");
    assert!(matches!(
        PolicyConfig::load(file.path()),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn config_error_converts_into_plan_error() {
    let file = write_config(r#"{"heuristic": "greedy"}"#);
    let err: PlanError = PolicyConfig::load(file.path()).unwrap_err().into();
    assert!(matches!(err, PlanError::Config(ConfigError::Parse { .. })));
}
