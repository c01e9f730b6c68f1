//! Enemy AI for SKIRMISH.
//!
//! Decides when, what and where the enemy deploys. Pure planning over plain
//! data; the simulation crate commits the resulting orders.

pub mod planner;
pub mod roster;

pub use skirmish_core as core;
