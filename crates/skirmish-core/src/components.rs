//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::characters::Character;
use crate::enums::*;
use crate::types::{TowerId, UnitId};

/// Identity of a deployed unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitInfo {
    pub id: UnitId,
    pub faction: Faction,
    /// Lane the unit was deployed in. Decides which side tower it marches on.
    pub lane: Lane,
    pub character: Character,
}

/// Identity and destruction flag of a tower.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TowerInfo {
    pub id: TowerId,
    pub faction: Faction,
    pub kind: TowerKind,
    /// Monotonic: once set, never cleared.
    pub destroyed: bool,
}

/// Hit points, clamped to `[0, max]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

/// Something a unit or tower can aim at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id")]
pub enum TargetRef {
    Unit(UnitId),
    Tower(TowerId),
}

/// Current target selection.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Targeting {
    pub target: Option<TargetRef>,
}

/// Time banked toward the next hit.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AttackClock {
    pub since_last_attack_secs: f64,
}

/// Tower armament. Units take theirs from the character definition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TowerWeapon {
    pub damage: f64,
    pub range: f64,
    pub cooldown_secs: f64,
}
