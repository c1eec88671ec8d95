//! World model: object definitions and configurations.
//!
//! Depends only on `proof` (for configuration fingerprints).

pub mod configuration;
pub mod object;
