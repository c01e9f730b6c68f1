//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::characters::CharacterId;
use crate::enums::*;
use crate::types::{TowerId, UnitId};

/// Something noteworthy that happened during one engine operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BattleEvent {
    /// A unit entered the arena.
    UnitDeployed {
        unit_id: UnitId,
        character_id: CharacterId,
        faction: Faction,
        lane: Lane,
    },
    /// A unit was killed and removed.
    UnitDestroyed { unit_id: UnitId, faction: Faction },
    /// A tower fell.
    TowerDestroyed {
        tower_id: TowerId,
        faction: Faction,
        kind: TowerKind,
    },
    /// The enemy king tower fell.
    BattleWon,
    /// The player king tower fell.
    BattleLost,
}
