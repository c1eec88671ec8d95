//! Proof module: canonical hashing and canonical JSON.
//!
//! Depends on nothing internal. `world` uses it to fingerprint configurations;
//! the harness uses it to bind reports to their inputs.

pub mod canon;
pub mod hash;
pub mod hash_domain;
