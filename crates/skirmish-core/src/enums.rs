//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level battle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Menu,
    Playing,
    Paused,
    Victory,
    Defeat,
}

/// Which side an entity fights for. Never changes after spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Faction {
    Player,
    Enemy,
}

/// Deployment corridor. Absolute arena side, shared by both factions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lane {
    Left,
    Right,
}

/// Descriptive behavior of a unit during the last tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitState {
    #[default]
    Idle,
    Moving,
    Attacking,
}

/// Tower role. Exactly one king per faction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TowerKind {
    King,
    Left,
    Right,
}

/// Elemental affinity of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Water,
    Electric,
    Light,
    Shadow,
    Nature,
}

/// Card rarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// Combat archetype of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterKind {
    Melee,
    Ranged,
    Tank,
    Support,
}

impl Faction {
    pub fn opponent(self) -> Faction {
        match self {
            Faction::Player => Faction::Enemy,
            Faction::Enemy => Faction::Player,
        }
    }

    /// Sign of the z axis pointing from this faction's home edge toward the enemy.
    pub fn forward(self) -> f64 {
        match self {
            Faction::Player => 1.0,
            Faction::Enemy => -1.0,
        }
    }
}

impl Lane {
    /// Sign of the x axis for this lane.
    pub fn side(self) -> f64 {
        match self {
            Lane::Left => -1.0,
            Lane::Right => 1.0,
        }
    }

    /// Side tower guarding this lane.
    pub fn tower_kind(self) -> TowerKind {
        match self {
            Lane::Left => TowerKind::Left,
            Lane::Right => TowerKind::Right,
        }
    }

    /// Lane containing the given x coordinate.
    pub fn from_x(x: f64) -> Lane {
        if x < 0.0 {
            Lane::Left
        } else {
            Lane::Right
        }
    }
}

impl GameStatus {
    /// Victory and defeat freeze the battle until reset.
    pub fn is_finished(self) -> bool {
        matches!(self, GameStatus::Victory | GameStatus::Defeat)
    }
}
