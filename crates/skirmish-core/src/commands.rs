//! Host commands sent to the simulation.
//!
//! Characters are referenced by id and resolved against the engine's catalog.

use serde::{Deserialize, Serialize};

use crate::characters::CharacterId;
use crate::enums::Lane;

/// All possible player/host actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BattleCommand {
    /// Start a new battle with the given deck.
    StartGame { deck: Vec<CharacterId> },
    /// Deploy a character from the deck into a lane.
    PlaceCharacter { character_id: CharacterId, lane: Lane },
    /// Pause the battle.
    Pause,
    /// Resume a paused battle.
    Resume,
    /// Discard the battle and return to the menu.
    Reset,
}
