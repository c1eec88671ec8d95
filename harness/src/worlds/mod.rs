//! Search worlds driven by the runner.

pub mod blocks;
