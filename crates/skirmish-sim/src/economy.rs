//! Player energy and running score.
//!
//! Stored in `BattleEngine` directly, NOT as ECS entities.

use crate::config::BattleConfig;

/// Player energy, always within `[0, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyPool {
    current: f64,
    max: f64,
    regen_rate: f64,
}

/// Running score. Only ever increases within a battle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreState {
    pub points: u32,
}

impl EnergyPool {
    pub fn new(starting: f64, max: f64, regen_rate: f64) -> Self {
        let max = max.max(0.0);
        Self {
            current: starting.clamp(0.0, max),
            max,
            regen_rate: regen_rate.max(0.0),
        }
    }

    pub fn from_config(config: &BattleConfig) -> Self {
        Self::new(
            config.starting_energy,
            config.max_energy,
            config.energy_regen_rate,
        )
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn regen_rate(&self) -> f64 {
        self.regen_rate
    }

    /// `energy = min(max, energy + rate * dt)`.
    pub fn regenerate(&mut self, dt: f64) {
        self.current = (self.current + self.regen_rate * dt).clamp(0.0, self.max);
    }

    pub fn can_afford(&self, cost: u32) -> bool {
        self.current >= f64::from(cost)
    }

    /// Deduct `cost` if affordable. Returns whether it was.
    pub fn spend(&mut self, cost: u32) -> bool {
        if !self.can_afford(cost) {
            return false;
        }
        self.current = (self.current - f64::from(cost)).max(0.0);
        true
    }

    #[cfg(test)]
    pub(crate) fn set_current(&mut self, value: f64) {
        self.current = value.clamp(0.0, self.max);
    }
}

impl ScoreState {
    pub fn award(&mut self, points: u32) {
        self.points = self.points.saturating_add(points);
    }
}
