//! Cleanup system: removes dead units and flags fallen towers.
//!
//! Runs after combat so no later system, and no published snapshot, ever
//! sees a zero-health unit.

use hecs::{Entity, World};
use tracing::info;

use skirmish_core::components::{Health, Targeting, TowerInfo, UnitInfo};
use skirmish_core::constants::{SCORE_PER_KING_TOWER, SCORE_PER_SIDE_TOWER, SCORE_PER_UNIT_KILL};
use skirmish_core::enums::{Faction, TowerKind};
use skirmish_core::events::BattleEvent;

use crate::economy::ScoreState;

/// Remove dead units, flag destroyed towers, award score and raise events.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<BattleEvent>,
    score: &mut ScoreState,
) {
    despawn_buffer.clear();

    let mut dead_units = Vec::new();
    for (entity, (info, health)) in world.query_mut::<(&UnitInfo, &Health)>() {
        if health.current <= 0.0 {
            dead_units.push((info.id, info.faction, entity));
        }
    }
    dead_units.sort_by_key(|(id, _, _)| *id);

    for (unit_id, faction, entity) in dead_units {
        if faction == Faction::Enemy {
            score.award(SCORE_PER_UNIT_KILL);
        }
        events.push(BattleEvent::UnitDestroyed { unit_id, faction });
        despawn_buffer.push(entity);
    }

    let mut fallen = Vec::new();
    for (_entity, (tower, health, targeting)) in
        world.query_mut::<(&mut TowerInfo, &mut Health, &mut Targeting)>()
    {
        if tower.destroyed || health.current > 0.0 {
            continue;
        }
        tower.destroyed = true;
        health.current = 0.0;
        targeting.target = None;
        fallen.push(*tower);
    }
    fallen.sort_by_key(|t| t.id);

    for tower in fallen {
        info!(tower_id = %tower.id, faction = ?tower.faction, kind = ?tower.kind, "tower destroyed");
        if tower.faction == Faction::Enemy {
            score.award(match tower.kind {
                TowerKind::King => SCORE_PER_KING_TOWER,
                TowerKind::Left | TowerKind::Right => SCORE_PER_SIDE_TOWER,
            });
        }
        events.push(BattleEvent::TowerDestroyed {
            tower_id: tower.id,
            faction: tower.faction,
            kind: tower.kind,
        });
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
