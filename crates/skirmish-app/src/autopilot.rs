//! Scripted player for the demo binary.
//!
//! Deploys the most expensive affordable deck card once energy is nearly
//! full, or immediately when an enemy unit has crossed the river.

use skirmish_core::characters::{Character, CharacterCatalog};
use skirmish_core::commands::BattleCommand;
use skirmish_core::enums::{Faction, GameStatus, Lane, TowerKind};
use skirmish_core::state::GameState;

/// Energy headroom below max at which the autopilot stops saving up.
const SAVE_UP_MARGIN: f64 = 1.0;

/// Decide the next deployment, if any.
pub fn next_command(state: &GameState, catalog: &CharacterCatalog) -> Option<BattleCommand> {
    if state.game_status != GameStatus::Playing {
        return None;
    }

    let threat_lane = defend_lane(state);
    let saved_up = state.energy >= state.max_energy - SAVE_UP_MARGIN;
    if threat_lane.is_none() && !saved_up {
        return None;
    }

    let card = best_affordable(state, catalog)?;
    Some(BattleCommand::PlaceCharacter {
        character_id: card.id.clone(),
        lane: threat_lane.unwrap_or_else(|| attack_lane(state)),
    })
}

fn best_affordable<'a>(state: &GameState, catalog: &'a CharacterCatalog) -> Option<&'a Character> {
    state
        .selected_deck
        .iter()
        .filter_map(|id| catalog.get(id.as_str()))
        .filter(|c| f64::from(c.cost) <= state.energy)
        .max_by_key(|c| c.cost)
}

/// Lane of the enemy unit deepest into the player's half.
fn defend_lane(state: &GameState) -> Option<Lane> {
    state
        .enemy_units
        .iter()
        .filter(|u| u.position.z < 0.0)
        .min_by(|a, b| a.position.z.total_cmp(&b.position.z))
        .map(|u| u.lane)
}

/// Lane whose enemy side tower is closest to falling.
fn attack_lane(state: &GameState) -> Lane {
    let remaining = |kind: TowerKind| {
        state
            .tower(Faction::Enemy, kind)
            .map_or(f64::INFINITY, |t| t.health / t.max_health)
    };
    if remaining(TowerKind::Right) < remaining(TowerKind::Left) {
        Lane::Right
    } else {
        Lane::Left
    }
}
