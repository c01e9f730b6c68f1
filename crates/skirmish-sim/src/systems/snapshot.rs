//! Snapshot system: queries the ECS world and builds a complete GameState.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use skirmish_core::characters::CharacterId;
use skirmish_core::components::*;
use skirmish_core::enums::*;
use skirmish_core::events::BattleEvent;
use skirmish_core::state::*;
use skirmish_core::types::{Position, SimTime};

use crate::economy::{EnergyPool, ScoreState};

/// Engine-owned state that lives outside the ECS world.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotContext<'a> {
    pub status: GameStatus,
    pub time: SimTime,
    pub energy: &'a EnergyPool,
    pub score: ScoreState,
    pub deck: &'a [CharacterId],
}

/// Build a complete GameState from the current world state.
pub fn build_snapshot(
    world: &World,
    ctx: &SnapshotContext<'_>,
    events: Vec<BattleEvent>,
) -> GameState {
    GameState {
        player_units: build_units(world, Faction::Player),
        enemy_units: build_units(world, Faction::Enemy),
        player_towers: build_towers(world, Faction::Player),
        enemy_towers: build_towers(world, Faction::Enemy),
        energy: ctx.energy.current(),
        max_energy: ctx.energy.max(),
        energy_regen_rate: ctx.energy.regen_rate(),
        battle_timer: ctx.time.elapsed_secs,
        score: ctx.score.points,
        selected_deck: ctx.deck.to_vec(),
        game_status: ctx.status,
        time: ctx.time,
        events,
    }
}

/// Build the GameUnit list for one faction, ordered by id.
fn build_units(world: &World, faction: Faction) -> Vec<GameUnit> {
    let mut units: Vec<GameUnit> = world
        .query::<(&UnitInfo, &Position, &Health, &UnitState, &Targeting)>()
        .iter()
        .filter(|(_, (info, ..))| info.faction == faction)
        .map(|(_, (info, pos, health, state, targeting))| GameUnit {
            id: info.id,
            character: info.character.clone(),
            is_player_unit: info.faction == Faction::Player,
            health: health.current,
            max_health: health.max,
            position: *pos,
            state: *state,
            lane: info.lane,
            target: targeting.target,
        })
        .collect();

    units.sort_by_key(|u| u.id);
    units
}

/// Build the Tower list for one faction, ordered by id.
fn build_towers(world: &World, faction: Faction) -> Vec<Tower> {
    let mut towers: Vec<Tower> = world
        .query::<(&TowerInfo, &Position, &Health)>()
        .iter()
        .filter(|(_, (tower, ..))| tower.faction == faction)
        .map(|(_, (tower, pos, health))| Tower {
            id: tower.id,
            kind: tower.kind,
            position: *pos,
            health: health.current,
            max_health: health.max,
            is_destroyed: tower.destroyed,
        })
        .collect();

    towers.sort_by_key(|t| t.id);
    towers
}
