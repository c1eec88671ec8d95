//! Binary that plans a command against a world fixture and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `plan_fixture <world.json> <command.json>`
//!
//! Output: key=value lines (see source for format).

use stacker_harness::command::Command;
use stacker_harness::policy::PolicyConfig;
use stacker_harness::report::PlanReport;
use stacker_harness::runner::run_command;
use stacker_kernel::snapshot::World;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    assert!(args.len() == 3, "usage: plan_fixture <world.json> <command.json>");

    let world_json = std::fs::read_to_string(&args[1]).expect("cannot read world fixture");
    let command_json = std::fs::read_to_string(&args[2]).expect("cannot read command fixture");
    let world = World::from_json_str(&world_json).expect("invalid world fixture");
    let command = Command::from_json_str(&command_json).expect("invalid command fixture");

    let outcome = run_command(&world, &command, &PolicyConfig::default()).expect("planning failed");
    let report = PlanReport::build(&world, &outcome).expect("report build failed");

    println!("world_digest={}", world.digest().expect("world digest").as_str());
    println!("goal={}", outcome.goal);
    println!("goal_digest={}", outcome.goal.digest().as_str());
    println!("actions={}", outcome.plan.encoded());
    println!("cost={}", outcome.cost);
    println!("total_expansions={}", outcome.search.total_expansions);
    println!("policy_digest={}", outcome.policy.digest().as_str());
    println!("report_digest={}", report.digest.as_str());
}
