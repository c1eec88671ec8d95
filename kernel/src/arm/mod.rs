//! The gripper arm: action alphabet and action execution.

pub mod action;
pub mod apply;
