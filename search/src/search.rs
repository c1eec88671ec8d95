//! Search entry point and A* expansion loop.

use std::time::Instant;

use tracing::{debug, trace};

use crate::contract::SearchWorld;
use crate::error::SearchError;
use crate::frontier::{AStarFrontier, OfferOutcome};
use crate::heuristic::Heuristic;
use crate::node::SearchNode;
use crate::policy::SearchPolicy;
use crate::report::{SearchReport, TerminationReason};

/// Result of a search execution.
///
/// Always carries a [`SearchReport`] regardless of how the search terminated.
/// Check [`SearchResult::is_goal_reached`] or inspect
/// `report.termination_reason` to determine the outcome.
#[derive(Debug)]
pub struct SearchResult<S> {
    /// The goal node (if found).
    pub goal_node: Option<SearchNode<S>>,
    /// All nodes created during search, indexed by `node_id`.
    pub nodes: Vec<SearchNode<S>>,
    pub report: SearchReport,
}

impl<S: Clone> SearchResult<S> {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(
            self.report.termination_reason,
            TerminationReason::GoalReached { .. }
        )
    }

    /// Cost of the path to the goal, if one was found.
    #[must_use]
    pub fn cost(&self) -> Option<u64> {
        self.goal_node.as_ref().map(|n| n.g_cost)
    }

    /// States from the root to the goal (inclusive), if a goal was found.
    ///
    /// A root that already satisfies the goal yields a one-state path.
    #[must_use]
    pub fn goal_path(&self) -> Option<Vec<S>> {
        let goal = self.goal_node.as_ref()?;
        reconstruct_path(&self.nodes, goal.node_id)
            .into_iter()
            .map(|id| {
                usize::try_from(id)
                    .ok()
                    .and_then(|i| self.nodes.get(i))
                    .map(|n| n.state.clone())
            })
            .collect()
    }
}

/// Run A* from `root` toward any state the world accepts as a goal.
///
/// The root is goal-tested before anything else, so a satisfied root returns
/// cost 0 even with a zero time budget. Afterwards, each iteration checks, in
/// order: frontier exhaustion, the deadline, the expansion budget. Goal tests
/// happen when a node is popped, which keeps returned costs optimal under an
/// admissible heuristic.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] only for pre-flight policy
/// validation failures. Every runtime termination returns `Ok`.
pub fn search<W, H>(
    root: W::State,
    world: &W,
    heuristic: &H,
    policy: &SearchPolicy,
) -> Result<SearchResult<W::State>, SearchError>
where
    W: SearchWorld + ?Sized,
    H: Heuristic<W::State> + ?Sized,
{
    policy.validate()?;
    let deadline = policy.deadline_from(Instant::now());

    let mut frontier = AStarFrontier::new();
    let mut all_nodes: Vec<SearchNode<W::State>> = Vec::new();
    let mut next_node_id: u64 = 0;
    let mut total_expansions: u64 = 0;
    let mut total_successors_generated: u64 = 0;
    let mut total_duplicates_suppressed: u64 = 0;
    let mut total_cost_improvements: u64 = 0;

    let root_fp = world.fingerprint(&root);
    let root_fp_hex = root_fp.hex_digest().to_string();
    let root_node = SearchNode {
        node_id: next_node_id,
        parent_id: None,
        h_cost: heuristic.estimate(&root),
        state: root,
        fingerprint: root_fp,
        depth: 0,
        g_cost: 0,
        creation_order: next_node_id,
    };
    next_node_id += 1;

    let root_is_goal = world.is_goal(&root_node.state);
    all_nodes.push(root_node.clone());

    let termination_reason = if root_is_goal {
        TerminationReason::GoalReached {
            node_id: 0,
            cost: 0,
        }
    } else {
        frontier.offer(root_node);
        loop {
            if frontier.is_empty() {
                break TerminationReason::FrontierExhausted;
            }
            if deadline.is_some_and(|d| Instant::now() >= d) {
                break TerminationReason::DeadlineExceeded;
            }
            if policy
                .max_expansions
                .is_some_and(|max| total_expansions >= max)
            {
                break TerminationReason::ExpansionBudgetExceeded;
            }

            let Some(current) = frontier.pop() else {
                break TerminationReason::FrontierExhausted;
            };

            if world.is_goal(&current.state) {
                break TerminationReason::GoalReached {
                    node_id: current.node_id,
                    cost: current.g_cost,
                };
            }

            trace!(
                node_id = current.node_id,
                g_cost = current.g_cost,
                f_cost = current.f_cost(),
                "expanding node"
            );
            total_expansions += 1;

            let successors = world.successors(&current.state);
            total_successors_generated += successors.len() as u64;

            for successor in successors {
                let g_cost = current.g_cost.saturating_add(successor.cost);
                let fingerprint = world.fingerprint(&successor.state);

                // Cheap rejection before the heuristic is evaluated.
                if frontier
                    .best_cost(fingerprint.hex_digest())
                    .is_some_and(|best| g_cost >= best)
                {
                    total_duplicates_suppressed += 1;
                    continue;
                }

                let child = SearchNode {
                    node_id: next_node_id,
                    parent_id: Some(current.node_id),
                    h_cost: heuristic.estimate(&successor.state),
                    state: successor.state,
                    fingerprint,
                    depth: current.depth + 1,
                    g_cost,
                    creation_order: next_node_id,
                };

                match frontier.offer(child.clone()) {
                    OfferOutcome::Suppressed => {
                        total_duplicates_suppressed += 1;
                        continue;
                    }
                    OfferOutcome::Improved => total_cost_improvements += 1,
                    OfferOutcome::Opened => {}
                }
                all_nodes.push(child);
                next_node_id += 1;
            }
        }
    };

    let goal_node = match termination_reason {
        TerminationReason::GoalReached { node_id, .. } => usize::try_from(node_id)
            .ok()
            .and_then(|i| all_nodes.get(i))
            .cloned(),
        _ => None,
    };

    debug!(
        world_id = world.world_id(),
        reason = termination_reason.tag(),
        expansions = total_expansions,
        nodes = all_nodes.len(),
        "search terminated"
    );

    let report = SearchReport {
        world_id: world.world_id().to_string(),
        root_fingerprint: root_fp_hex,
        total_expansions,
        total_successors_generated,
        total_duplicates_suppressed,
        total_cost_improvements,
        frontier_high_water: frontier.high_water(),
        termination_reason,
    };

    Ok(SearchResult {
        goal_node,
        nodes: all_nodes,
        report,
    })
}

/// Reconstruct the node ids from root to `goal_node_id`.
#[must_use]
pub fn reconstruct_path<S>(nodes: &[SearchNode<S>], goal_node_id: u64) -> Vec<u64> {
    let mut path = Vec::new();
    let mut current_id = Some(goal_node_id);

    while let Some(id) = current_id {
        path.push(id);
        current_id = usize::try_from(id)
            .ok()
            .and_then(|i| nodes.get(i))
            .and_then(|n| n.parent_id);
    }

    path.reverse();
    path
}
