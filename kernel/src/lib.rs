//! Stacker Kernel: the pure blocks-world model.
//!
//! # API Surface
//!
//! - [`snapshot::World`] -- validated object table + start configuration
//! - [`laws::support::can_support`] -- may one object rest on another?
//! - [`laws::relation::holds`] -- does a spatial relation hold right now?
//! - [`arm::apply::apply`] -- execute one arm action, producing a new configuration
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256
//!
//! # Module Dependency Direction
//!
//! `proof` ← `world` ← `laws` ← `arm`, `snapshot`
//!
//! One-way only. No cycles.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arm;
pub mod laws;
pub mod proof;
pub mod snapshot;
pub mod world;
