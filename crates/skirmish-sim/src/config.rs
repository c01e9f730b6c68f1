//! Battle configuration.
//!
//! Every field has a default, so a JSON document only needs to name what it
//! overrides.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use skirmish_core::characters::{CharacterCatalog, CharacterId};
use skirmish_core::constants::*;
use skirmish_core::enums::Lane;
use skirmish_enemy_ai::planner::PlannerTiming;
use skirmish_enemy_ai::roster::{EnemyRoster, RosterError};

/// Configuration for a battle engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// RNG seed for determinism. Same seed = same battle.
    pub seed: u64,
    pub starting_energy: f64,
    pub max_energy: f64,
    /// Energy per second.
    pub energy_regen_rate: f64,
    pub king_tower_health: f64,
    pub side_tower_health: f64,
    /// Lanes that get a side tower, per faction.
    pub side_towers: Vec<Lane>,
    pub tower_damage: f64,
    pub tower_range: f64,
    pub tower_attack_cooldown_secs: f64,
    pub enemy_ai: EnemyAiConfig,
}

/// Enemy deployment pacing and roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyAiConfig {
    pub enabled: bool,
    pub initial_delay_secs: f64,
    pub min_interval_secs: f64,
    pub max_interval_secs: f64,
    pub roster: Vec<CharacterId>,
}

/// A configuration that cannot drive a battle.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
    #[error(transparent)]
    Roster(#[from] RosterError),
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            starting_energy: DEFAULT_STARTING_ENERGY,
            max_energy: DEFAULT_MAX_ENERGY,
            energy_regen_rate: DEFAULT_ENERGY_REGEN_RATE,
            king_tower_health: DEFAULT_KING_TOWER_HEALTH,
            side_tower_health: DEFAULT_SIDE_TOWER_HEALTH,
            side_towers: vec![Lane::Left, Lane::Right],
            tower_damage: DEFAULT_TOWER_DAMAGE,
            tower_range: DEFAULT_TOWER_RANGE,
            tower_attack_cooldown_secs: DEFAULT_TOWER_ATTACK_COOLDOWN_SECS,
            enemy_ai: EnemyAiConfig::default(),
        }
    }
}

impl Default for EnemyAiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            initial_delay_secs: DEFAULT_AI_INITIAL_DELAY_SECS,
            min_interval_secs: DEFAULT_AI_MIN_INTERVAL_SECS,
            max_interval_secs: DEFAULT_AI_MAX_INTERVAL_SECS,
            roster: EnemyRoster::default_ids(),
        }
    }
}

impl BattleConfig {
    /// Parse and validate a JSON config against the builtin catalog.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: BattleConfig = serde_json::from_str(json)?;
        config.validate(&CharacterCatalog::builtin())?;
        Ok(config)
    }

    pub fn validate(&self, catalog: &CharacterCatalog) -> Result<(), ConfigError> {
        ensure(
            self.max_energy.is_finite() && self.max_energy >= 0.0,
            "max_energy",
            "must be a non-negative number",
        )?;
        ensure(
            self.starting_energy >= 0.0 && self.starting_energy <= self.max_energy,
            "starting_energy",
            "must lie within 0..=max_energy",
        )?;
        ensure(
            self.energy_regen_rate.is_finite() && self.energy_regen_rate >= 0.0,
            "energy_regen_rate",
            "must be a non-negative number",
        )?;
        ensure(
            positive(self.king_tower_health),
            "king_tower_health",
            "must be positive",
        )?;
        ensure(
            positive(self.side_tower_health),
            "side_tower_health",
            "must be positive",
        )?;
        ensure(
            !(self.side_towers.len() == 2 && self.side_towers[0] == self.side_towers[1])
                && self.side_towers.len() <= 2,
            "side_towers",
            "at most one tower per lane",
        )?;
        ensure(
            self.tower_damage.is_finite() && self.tower_damage >= 0.0,
            "tower_damage",
            "must be a non-negative number",
        )?;
        ensure(
            self.tower_range.is_finite() && self.tower_range >= 0.0,
            "tower_range",
            "must be a non-negative number",
        )?;
        ensure(
            positive(self.tower_attack_cooldown_secs),
            "tower_attack_cooldown_secs",
            "must be positive",
        )?;
        self.enemy_ai.validate(catalog)
    }
}

impl EnemyAiConfig {
    pub fn validate(&self, catalog: &CharacterCatalog) -> Result<(), ConfigError> {
        ensure(
            self.initial_delay_secs.is_finite() && self.initial_delay_secs >= 0.0,
            "enemy_ai.initial_delay_secs",
            "must be a non-negative number",
        )?;
        ensure(
            positive(self.min_interval_secs),
            "enemy_ai.min_interval_secs",
            "must be positive",
        )?;
        ensure(
            self.max_interval_secs.is_finite() && self.max_interval_secs >= self.min_interval_secs,
            "enemy_ai.max_interval_secs",
            "must be at least min_interval_secs",
        )?;
        EnemyRoster::from_ids(catalog, &self.roster)?;
        Ok(())
    }

    pub fn timing(&self) -> PlannerTiming {
        PlannerTiming {
            initial_delay_secs: self.initial_delay_secs,
            min_interval_secs: self.min_interval_secs,
            max_interval_secs: self.max_interval_secs,
        }
    }
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn ensure(ok: bool, field: &'static str, reason: &'static str) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason })
    }
}
