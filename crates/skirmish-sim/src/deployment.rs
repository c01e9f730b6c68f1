//! Deployment gate: deck validation, affordability checks and the single
//! unit-creation path shared by the player and the enemy AI.

use std::collections::HashSet;

use hecs::World;

use skirmish_core::characters::{Character, CharacterId};
use skirmish_core::constants::MAX_DECK_SIZE;
use skirmish_core::enums::{Faction, GameStatus, Lane};
use skirmish_core::error::{DeckError, DeployError};
use skirmish_core::events::BattleEvent;
use skirmish_core::types::UnitId;

use crate::economy::EnergyPool;
use crate::world_setup;

/// A deck must hold 1..=MAX_DECK_SIZE distinct ids.
pub fn validate_deck(deck: &[CharacterId]) -> Result<(), DeckError> {
    if deck.is_empty() {
        return Err(DeckError::Empty);
    }
    if deck.len() > MAX_DECK_SIZE {
        return Err(DeckError::TooLarge {
            size: deck.len(),
            max: MAX_DECK_SIZE,
        });
    }
    let mut seen = HashSet::with_capacity(deck.len());
    for id in deck {
        if !seen.insert(id) {
            return Err(DeckError::Duplicate(id.clone()));
        }
    }
    Ok(())
}

/// Pure affordability predicate.
pub fn can_place(status: GameStatus, energy: &EnergyPool, character: &Character) -> bool {
    status == GameStatus::Playing && energy.can_afford(character.cost)
}

/// Full player-side validation, in the order a player would care about.
pub fn check(
    status: GameStatus,
    energy: &EnergyPool,
    deck: &[CharacterId],
    character: &Character,
) -> Result<(), DeployError> {
    if status != GameStatus::Playing {
        return Err(DeployError::NotPlaying);
    }
    if !deck.contains(&character.id) {
        return Err(DeployError::NotInDeck(character.id.clone()));
    }
    if !energy.can_afford(character.cost) {
        return Err(DeployError::InsufficientEnergy {
            required: character.cost,
            available: energy.current(),
        });
    }
    Ok(())
}

/// Create a unit at the faction's home edge of `lane` and record the event.
/// Callers are responsible for any resource accounting.
pub fn deploy(
    world: &mut World,
    next_unit_id: &mut u32,
    faction: Faction,
    lane: Lane,
    character: &Character,
    events: &mut Vec<BattleEvent>,
) -> UnitId {
    let id = UnitId(*next_unit_id);
    *next_unit_id += 1;

    let position = world_setup::deploy_position(faction, lane);
    world_setup::spawn_unit(world, id, faction, lane, character, position);
    events.push(BattleEvent::UnitDeployed {
        unit_id: id,
        character_id: character.id.clone(),
        faction,
        lane,
    });
    id
}
