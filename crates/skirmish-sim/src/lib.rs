//! Battle simulation engine for SKIRMISH.
//!
//! Owns the hecs ECS world, advances it by caller-supplied time steps,
//! gates deployments and publishes `GameState` snapshots to observers.

pub mod battlefield;
pub mod config;
pub mod deployment;
pub mod economy;
pub mod engine;
pub mod observers;
pub mod systems;
pub mod world_setup;

pub use engine::BattleEngine;
pub use skirmish_core as core;

#[cfg(test)]
mod tests;
