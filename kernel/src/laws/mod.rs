//! Static physics and spatial relations over a configuration.

pub mod relation;
pub mod support;
