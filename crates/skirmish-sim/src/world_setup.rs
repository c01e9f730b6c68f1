//! Entity spawn factories for setting up the arena.
//!
//! Creates towers and unit entities with appropriate component bundles.

use hecs::{Entity, World};

use skirmish_core::characters::Character;
use skirmish_core::components::*;
use skirmish_core::constants::*;
use skirmish_core::enums::*;
use skirmish_core::types::{Position, TowerId, UnitId};

use crate::config::BattleConfig;

/// Clear the world and raise both factions' towers.
/// Tower ids are assigned player-first, king-first, so they are stable
/// across battles with the same config.
pub fn setup_battle(world: &mut World, config: &BattleConfig) {
    world.clear();
    let mut next_tower_id = 0;
    for faction in [Faction::Player, Faction::Enemy] {
        spawn_tower(world, config, TowerId(next_tower_id), faction, TowerKind::King);
        next_tower_id += 1;
        for lane in [Lane::Left, Lane::Right] {
            if config.side_towers.contains(&lane) {
                spawn_tower(world, config, TowerId(next_tower_id), faction, lane.tower_kind());
                next_tower_id += 1;
            }
        }
    }
}

/// Spawn one tower at its fixed position.
pub fn spawn_tower(
    world: &mut World,
    config: &BattleConfig,
    id: TowerId,
    faction: Faction,
    kind: TowerKind,
) -> Entity {
    let max = match kind {
        TowerKind::King => config.king_tower_health,
        TowerKind::Left | TowerKind::Right => config.side_tower_health,
    };
    world.spawn((
        TowerInfo {
            id,
            faction,
            kind,
            destroyed: false,
        },
        tower_position(faction, kind),
        Health { current: max, max },
        TowerWeapon {
            damage: config.tower_damage,
            range: config.tower_range,
            cooldown_secs: config.tower_attack_cooldown_secs,
        },
        Targeting::default(),
        AttackClock {
            since_last_attack_secs: config.tower_attack_cooldown_secs,
        },
    ))
}

/// Spawn a unit. The attack clock starts full so the first hit lands as
/// soon as the unit engages.
pub fn spawn_unit(
    world: &mut World,
    id: UnitId,
    faction: Faction,
    lane: Lane,
    character: &Character,
    position: Position,
) -> Entity {
    world.spawn((
        UnitInfo {
            id,
            faction,
            lane,
            character: character.clone(),
        },
        position,
        Health {
            current: character.health,
            max: character.health,
        },
        UnitState::Idle,
        Targeting::default(),
        AttackClock {
            since_last_attack_secs: character.attack_cooldown_secs,
        },
    ))
}

/// Fixed tower placement. The player's towers sit on the negative-z half.
pub fn tower_position(faction: Faction, kind: TowerKind) -> Position {
    let home = -faction.forward();
    match kind {
        TowerKind::King => Position::new(0.0, 0.0, home * KING_TOWER_Z),
        TowerKind::Left => Position::new(-LANE_X, 0.0, home * SIDE_TOWER_Z),
        TowerKind::Right => Position::new(LANE_X, 0.0, home * SIDE_TOWER_Z),
    }
}

/// Where a faction's deployments enter a lane: on its own home edge.
pub fn deploy_position(faction: Faction, lane: Lane) -> Position {
    Position::new(
        lane.side() * LANE_X,
        0.0,
        -faction.forward() * DEPLOY_EDGE_Z,
    )
}
