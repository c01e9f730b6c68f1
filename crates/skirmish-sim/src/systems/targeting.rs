//! Targeting system: validates and (re)assigns targets for units and towers.
//!
//! Units: a live target is kept while it is within attack range. Otherwise
//! the unit picks, in order of preference:
//! 1. the best live enemy (unit or tower) within attack range,
//! 2. the nearest enemy unit anywhere, as a movement goal,
//! 3. the live side tower on its lane, else the enemy king.
//!
//! Towers only ever aim at enemy units inside their own range.

use hecs::World;

use skirmish_core::components::{TargetRef, Targeting, TowerInfo, TowerWeapon, UnitInfo};
use skirmish_core::enums::{Faction, Lane, TowerKind};
use skirmish_core::types::Position;

use crate::battlefield::{best_candidate, Battlefield};

pub fn run(world: &mut World, field: &Battlefield) {
    for (_entity, (info, pos, targeting)) in
        world.query_mut::<(&UnitInfo, &Position, &mut Targeting)>()
    {
        let range = info.character.range;
        let kept = targeting
            .target
            .and_then(|t| field.live(t))
            .filter(|c| c.faction != info.faction && c.within(pos, range))
            .map(|c| c.target_ref);

        targeting.target = kept.or_else(|| select_for_unit(field, info.faction, info.lane, pos, range));
    }

    for (_entity, (tower, weapon, pos, targeting)) in
        world.query_mut::<(&TowerInfo, &TowerWeapon, &Position, &mut Targeting)>()
    {
        if tower.destroyed {
            targeting.target = None;
            continue;
        }
        let kept = targeting
            .target
            .and_then(|t| field.live(t))
            .filter(|c| c.faction != tower.faction && c.within(pos, weapon.range))
            .map(|c| c.target_ref);

        targeting.target = kept.or_else(|| select_for_tower(field, tower.faction, pos, weapon.range));
    }
}

/// Choose a fresh target for a unit.
pub fn select_for_unit(
    field: &Battlefield,
    faction: Faction,
    lane: Lane,
    pos: &Position,
    range: f64,
) -> Option<TargetRef> {
    let in_range = best_candidate(
        pos,
        field
            .live_enemies_of(faction)
            .filter(|c| c.within(pos, range)),
    );
    if let Some(c) = in_range {
        return Some(c.target_ref);
    }

    let nearest_unit = best_candidate(
        pos,
        field.live_enemies_of(faction).filter(|c| !c.is_tower()),
    );
    if let Some(c) = nearest_unit {
        return Some(c.target_ref);
    }

    let enemy = faction.opponent();
    field
        .live_tower(enemy, lane.tower_kind())
        .or_else(|| field.live_tower(enemy, TowerKind::King))
        .map(|c| c.target_ref)
}

/// Choose a fresh target for a tower: enemy units in range only.
pub fn select_for_tower(
    field: &Battlefield,
    faction: Faction,
    pos: &Position,
    range: f64,
) -> Option<TargetRef> {
    best_candidate(
        pos,
        field
            .live_enemies_of(faction)
            .filter(|c| !c.is_tower() && c.within(pos, range)),
    )
    .map(|c| c.target_ref)
}
