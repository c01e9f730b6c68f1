//! Game state snapshot: the complete visible state handed to observers.

use serde::{Deserialize, Serialize};

use crate::characters::{Character, CharacterId};
use crate::components::TargetRef;
use crate::enums::*;
use crate::events::BattleEvent;
use crate::types::{Position, SimTime, TowerId, UnitId};

/// Complete battle state published after every engine operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub player_units: Vec<GameUnit>,
    pub enemy_units: Vec<GameUnit>,
    pub player_towers: Vec<Tower>,
    pub enemy_towers: Vec<Tower>,
    pub energy: f64,
    pub max_energy: f64,
    /// Energy per second.
    pub energy_regen_rate: f64,
    /// Simulated seconds since battle start.
    pub battle_timer: f64,
    pub score: u32,
    pub selected_deck: Vec<CharacterId>,
    pub game_status: GameStatus,
    pub time: SimTime,
    /// Events raised by the operation that produced this snapshot.
    pub events: Vec<BattleEvent>,
}

/// A live unit on the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameUnit {
    pub id: UnitId,
    pub character: Character,
    pub is_player_unit: bool,
    pub health: f64,
    pub max_health: f64,
    pub position: Position,
    pub state: UnitState,
    pub lane: Lane,
    pub target: Option<TargetRef>,
}

/// A tower, live or destroyed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tower {
    pub id: TowerId,
    pub kind: TowerKind,
    pub position: Position,
    pub health: f64,
    pub max_health: f64,
    pub is_destroyed: bool,
}

impl GameState {
    pub fn units(&self, faction: Faction) -> &[GameUnit] {
        match faction {
            Faction::Player => &self.player_units,
            Faction::Enemy => &self.enemy_units,
        }
    }

    pub fn towers(&self, faction: Faction) -> &[Tower] {
        match faction {
            Faction::Player => &self.player_towers,
            Faction::Enemy => &self.enemy_towers,
        }
    }

    pub fn tower(&self, faction: Faction, kind: TowerKind) -> Option<&Tower> {
        self.towers(faction).iter().find(|t| t.kind == kind)
    }

    pub fn king_tower(&self, faction: Faction) -> Option<&Tower> {
        self.tower(faction, TowerKind::King)
    }

    pub fn unit(&self, id: UnitId) -> Option<&GameUnit> {
        self.player_units
            .iter()
            .chain(&self.enemy_units)
            .find(|u| u.id == id)
    }
}
