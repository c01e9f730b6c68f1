//! SKIRMISH headless host.
//!
//! Runs a `BattleEngine` on its own thread, feeds it commands over a
//! channel and keeps the latest published state for polling.

pub mod autopilot;
pub mod game_loop;
pub mod state;

pub use skirmish_core as core;
