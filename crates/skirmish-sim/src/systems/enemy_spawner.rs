//! Enemy spawning system: runs the deployment planner and commits its
//! orders through the shared deployment path.

use hecs::World;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use skirmish_core::components::UnitInfo;
use skirmish_core::enums::Faction;
use skirmish_core::events::BattleEvent;
use skirmish_core::types::Position;
use skirmish_enemy_ai::planner::SpawnPlanner;
use skirmish_enemy_ai::roster::EnemyRoster;

use crate::deployment;

/// Advance the planner by `dt` and deploy the enemy unit that came due, if any.
/// Enemy deployments are paced by time alone; they draw no energy.
pub fn run(
    world: &mut World,
    planner: &mut SpawnPlanner,
    roster: &EnemyRoster,
    rng: &mut ChaCha8Rng,
    dt: f64,
    next_unit_id: &mut u32,
    events: &mut Vec<BattleEvent>,
) {
    let mut player_units: Vec<(u32, Position)> = world
        .query::<(&UnitInfo, &Position)>()
        .iter()
        .filter(|(_, (info, _))| info.faction == Faction::Player)
        .map(|(_, (info, pos))| (info.id.0, *pos))
        .collect();
    player_units.sort_by_key(|(id, _)| *id);
    let positions: Vec<Position> = player_units.into_iter().map(|(_, pos)| pos).collect();

    if let Some(order) = planner.advance(dt, roster, &positions, rng) {
        let unit_id = deployment::deploy(
            world,
            next_unit_id,
            Faction::Enemy,
            order.lane,
            &order.character,
            events,
        );
        debug!(%unit_id, character = %order.character.id, lane = ?order.lane, "enemy deployed");
    }
}
