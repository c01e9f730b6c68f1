//! Read-only survey of everything that can fight or be fought.
//!
//! Built once per tick from the ECS world so targeting, movement and combat
//! all reason about the same positions and health values, independent of
//! query iteration order.

use std::cmp::Ordering;
use std::collections::HashMap;

use hecs::{Entity, World};

use skirmish_core::components::{Health, TargetRef, TowerInfo, UnitInfo};
use skirmish_core::constants::{RANGE_EPSILON, TOWER_RADIUS};
use skirmish_core::enums::{Faction, TowerKind};
use skirmish_core::types::Position;

/// A unit or tower as seen at the start of a tick.
#[derive(Debug, Clone, Copy)]
pub struct Combatant {
    pub entity: Entity,
    pub target_ref: TargetRef,
    pub faction: Faction,
    pub position: Position,
    pub health: f64,
    /// Footprint radius; attackers reach the rim, not the centre.
    pub radius: f64,
    /// Tower kind, `None` for units.
    pub tower_kind: Option<TowerKind>,
    pub alive: bool,
}

/// Snapshot of all combatants, sorted by (units first, id).
#[derive(Debug, Clone, Default)]
pub struct Battlefield {
    combatants: Vec<Combatant>,
    index: HashMap<TargetRef, usize>,
}

impl Combatant {
    pub fn is_tower(&self) -> bool {
        self.tower_kind.is_some()
    }

    /// Distance from `from` to this combatant's rim.
    pub fn reach_from(&self, from: &Position) -> f64 {
        (from.ground_range_to(&self.position) - self.radius).max(0.0)
    }

    pub fn within(&self, from: &Position, range: f64) -> bool {
        self.reach_from(from) <= range + RANGE_EPSILON
    }
}

impl Battlefield {
    pub fn survey(world: &World) -> Self {
        let mut combatants = Vec::new();

        for (entity, (info, pos, health)) in world.query::<(&UnitInfo, &Position, &Health)>().iter()
        {
            combatants.push(Combatant {
                entity,
                target_ref: TargetRef::Unit(info.id),
                faction: info.faction,
                position: *pos,
                health: health.current,
                radius: 0.0,
                tower_kind: None,
                alive: health.current > 0.0,
            });
        }

        for (entity, (tower, pos, health)) in
            world.query::<(&TowerInfo, &Position, &Health)>().iter()
        {
            combatants.push(Combatant {
                entity,
                target_ref: TargetRef::Tower(tower.id),
                faction: tower.faction,
                position: *pos,
                health: health.current,
                radius: TOWER_RADIUS,
                tower_kind: Some(tower.kind),
                alive: !tower.destroyed && health.current > 0.0,
            });
        }

        combatants.sort_by_key(|c| sort_key(c.target_ref));
        let index = combatants
            .iter()
            .enumerate()
            .map(|(i, c)| (c.target_ref, i))
            .collect();

        Self { combatants, index }
    }

    pub fn get(&self, target: TargetRef) -> Option<&Combatant> {
        self.index
            .get(&target)
            .and_then(|&i| self.combatants.get(i))
    }

    /// A target that still exists and is alive.
    pub fn live(&self, target: TargetRef) -> Option<&Combatant> {
        self.get(target).filter(|c| c.alive)
    }

    /// Live combatants of the faction opposing `faction`.
    pub fn live_enemies_of(&self, faction: Faction) -> impl Iterator<Item = &Combatant> {
        self.combatants
            .iter()
            .filter(move |c| c.alive && c.faction != faction)
    }

    pub fn live_tower(&self, faction: Faction, kind: TowerKind) -> Option<&Combatant> {
        self.combatants
            .iter()
            .find(|c| c.alive && c.faction == faction && c.tower_kind == Some(kind))
    }

    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }
}

/// Order candidates seen from `from`: nearer first, then weaker, then towers
/// before units, then lower id.
pub fn compare_candidates(from: &Position, a: &Combatant, b: &Combatant) -> Ordering {
    a.reach_from(from)
        .total_cmp(&b.reach_from(from))
        .then(a.health.total_cmp(&b.health))
        .then(b.is_tower().cmp(&a.is_tower()))
        .then(sort_key(a.target_ref).1.cmp(&sort_key(b.target_ref).1))
}

/// Best candidate under [`compare_candidates`].
pub fn best_candidate<'a>(
    from: &Position,
    candidates: impl Iterator<Item = &'a Combatant>,
) -> Option<&'a Combatant> {
    candidates.min_by(|a, b| compare_candidates(from, a, b))
}

fn sort_key(target: TargetRef) -> (u8, u32) {
    match target {
        TargetRef::Unit(id) => (0, id.0),
        TargetRef::Tower(id) => (1, id.0),
    }
}
