//! ECS systems that operate on the battle world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only)
//! plus whatever engine-owned state they touch. They do not own state.

pub mod cleanup;
pub mod combat;
pub mod enemy_spawner;
pub mod energy;
pub mod movement;
pub mod outcome;
pub mod snapshot;
pub mod targeting;
