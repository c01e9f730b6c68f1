//! Fundamental geometric and simulation types.

use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 3D position in arena space.
/// x = across the lanes (negative = left), y = up, z = along the lanes
/// (negative = player half, positive = enemy half).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of non-empty simulation steps since battle start.
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

/// Identifier of a unit, unique for the lifetime of a battle.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UnitId(pub u32);

/// Identifier of a tower, fixed at battle setup.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TowerId(pub u32);

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Projection onto the ground plane (x, z).
    pub fn ground(&self) -> DVec2 {
        DVec2::new(self.x, self.z)
    }

    /// Ground-plane distance to another position. Height is ignored.
    pub fn ground_range_to(&self, other: &Position) -> f64 {
        self.ground().distance(other.ground())
    }

    /// Move toward `goal` on the ground plane by at most `max_step`.
    /// Never passes the goal; height is preserved.
    pub fn step_toward(&self, goal: &Position, max_step: f64) -> Position {
        let from = self.ground();
        let offset = goal.ground() - from;
        let distance = offset.length();
        if max_step <= 0.0 || distance <= f64::EPSILON {
            return *self;
        }
        let next = if max_step >= distance {
            goal.ground()
        } else {
            from + offset / distance * max_step
        };
        Position::new(next.x, self.y, next.y)
    }
}

impl SimTime {
    /// Advance by one step of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unit-{}", self.0)
    }
}

impl fmt::Display for TowerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tower-{}", self.0)
    }
}
