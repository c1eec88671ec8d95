//! Stacker Search: deterministic A* over any [`SearchWorld`](contract::SearchWorld).
//!
//! This crate provides the search layer. It depends only on `stacker_kernel`
//! (for fingerprints and canonical JSON); it does NOT depend on
//! `stacker_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! stacker_kernel  ←  stacker_search  ←  stacker_harness
//! (world model)      (frontier, A*)     (grounding, planning, reports)
//! ```
//!
//! # Key types
//!
//! - [`SearchNode`](node::SearchNode): immutable node with deterministic ordering
//! - [`AStarFrontier`](frontier::AStarFrontier): open set keyed by state fingerprint
//! - [`SearchPolicy`](policy::SearchPolicy): time and expansion budgets
//! - [`Heuristic`](heuristic::Heuristic): remaining-cost estimate
//! - [`SearchReport`](report::SearchReport): counters and termination reason

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod policy;
pub mod report;
pub mod search;
