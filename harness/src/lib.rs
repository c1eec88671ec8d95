//! Stacker Harness: from parsed commands to executable arm plans.
//!
//! The harness grounds a command against the current world
//! (`ground` → `compile`), searches the blocks state graph with the kernel's
//! physical laws (`search` over [`worlds::blocks::BlocksWorld`]), and turns
//! the cheapest path into arm actions (`synthesize`).
//!
//! The harness does NOT implement search or physics. It delegates to
//! `stacker-search` and `stacker-kernel`; it owns grounding and orchestration.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod compile;
pub mod error;
pub mod goal;
pub mod plan;
pub mod policy;
pub mod report;
pub mod resolve;
pub mod runner;
pub mod worlds;
