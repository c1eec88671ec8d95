//! Runner: orchestrates grounding, search and plan synthesis.
//!
//! # Pipeline
//!
//! ```text
//! ground() → compile()                      (interpret)
//!   → search(BlocksWorld, heuristic) → goal_path()
//!   → synthesize()                          (plan_goal)
//! ```
//!
//! The runner owns no world logic. Resolution, compilation, the state graph
//! and the heuristic live in their own modules; the runner maps search
//! terminations onto [`PlanError`] and arbitrates between candidate parses.

use stacker_kernel::snapshot::World;
use stacker_kernel::world::configuration::Configuration;
use stacker_search::heuristic::ZeroHeuristic;
use stacker_search::report::{SearchReport, TerminationReason};
use stacker_search::search::search;
use tracing::{debug, info, warn};

use crate::command::Command;
use crate::compile::compile;
use crate::error::PlanError;
use crate::goal::GoalFormula;
use crate::plan::{synthesize, Plan};
use crate::policy::{HeuristicMode, PolicyConfig, PolicySnapshot};
use crate::resolve::{ground, Resolver};
use crate::worlds::blocks::{BlocksWorld, GoalHeuristic};

/// A successful planning run.
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    pub goal: GoalFormula,
    pub plan: Plan,
    /// Number of pick/place edges on the path.
    pub cost: u64,
    /// Configurations from the start to the goal, inclusive.
    pub path: Vec<Configuration>,
    pub search: SearchReport,
    pub policy: PolicySnapshot,
}

impl PlanOutcome {
    /// The configuration the plan ends in.
    #[must_use]
    pub fn final_configuration(&self) -> Option<&Configuration> {
        self.path.last()
    }
}

/// Ground and compile a command against the world's current configuration.
///
/// # Errors
///
/// Returns [`PlanError::UnresolvedReference`] or
/// [`PlanError::NoInterpretation`].
pub fn interpret(world: &World, command: &Command) -> Result<GoalFormula, PlanError> {
    let resolver = Resolver::for_world(world);
    let grounded = ground(command, &resolver)?;
    compile(&grounded, world.objects())
}

/// Search for a cheapest configuration satisfying `goal` and turn the path
/// into arm actions.
///
/// # Errors
///
/// Returns [`PlanError::NoPlanFound`], [`PlanError::TimeoutExceeded`] or
/// [`PlanError::ExpansionBudgetExceeded`] for the corresponding search
/// terminations, and [`PlanError::Search`] / [`PlanError::Config`] for
/// policy problems.
pub fn plan_goal(
    world: &World,
    goal: &GoalFormula,
    config: &PolicyConfig,
) -> Result<PlanOutcome, PlanError> {
    let policy = config.search_policy();
    let snapshot = config.snapshot()?;
    let blocks = BlocksWorld::new(world.objects(), goal);
    let root = world.configuration().clone();

    let result = match config.heuristic_mode() {
        HeuristicMode::Goal => search(root, &blocks, &GoalHeuristic::new(goal), &policy)?,
        HeuristicMode::Zero => search(root, &blocks, &ZeroHeuristic, &policy)?,
    };
    let report = &result.report;
    debug!(
        termination = report.termination_reason.tag(),
        expansions = report.total_expansions,
        "search finished"
    );

    let cost = match report.termination_reason {
        TerminationReason::GoalReached { cost, .. } => cost,
        TerminationReason::FrontierExhausted => return Err(PlanError::NoPlanFound),
        TerminationReason::DeadlineExceeded => {
            return Err(PlanError::TimeoutExceeded {
                expansions: report.total_expansions,
            })
        }
        TerminationReason::ExpansionBudgetExceeded => {
            return Err(PlanError::ExpansionBudgetExceeded {
                budget: config.max_expansions.unwrap_or(report.total_expansions),
            })
        }
    };

    let path = result.goal_path().ok_or(PlanError::NoPlanFound)?;
    let plan = synthesize(&path, world.objects())?;
    info!(goal = %goal, cost, actions = %plan.encoded(), "plan found");

    Ok(PlanOutcome {
        goal: goal.clone(),
        plan,
        cost,
        path,
        search: result.report,
        policy: snapshot,
    })
}

/// [`interpret`] followed by [`plan_goal`].
///
/// # Errors
///
/// Any error of either stage.
pub fn run_command(
    world: &World,
    command: &Command,
    config: &PolicyConfig,
) -> Result<PlanOutcome, PlanError> {
    let goal = interpret(world, command)?;
    plan_goal(world, &goal, config)
}

/// Run every candidate parse independently.
///
/// Any success suppresses every failure. If all candidates fail, the first
/// error in input order is returned.
///
/// # Errors
///
/// The first candidate's error when none succeeds, or
/// [`PlanError::NoCandidates`] for an empty input.
pub fn run_candidates(
    world: &World,
    commands: &[Command],
    config: &PolicyConfig,
) -> Result<Vec<PlanOutcome>, PlanError> {
    let mut outcomes = Vec::new();
    let mut first_error = None;
    for (index, command) in commands.iter().enumerate() {
        match run_command(world, command, config) {
            Ok(outcome) => outcomes.push(outcome),
            Err(error) => {
                warn!(index, %error, "candidate failed");
                first_error.get_or_insert(error);
            }
        }
    }
    if outcomes.is_empty() {
        return Err(first_error.unwrap_or(PlanError::NoCandidates));
    }
    Ok(outcomes)
}
