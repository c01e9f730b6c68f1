//! Error types for invalid definitions and rejected requests.
//!
//! None of these are fatal to a running battle: the engine reports them and
//! leaves its state untouched.

use thiserror::Error;

use crate::characters::CharacterId;

/// A character definition with out-of-range stats.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CharacterError {
    #[error("character id must not be empty")]
    EmptyId,
    #[error("character {id}: {stat} must be {requirement}, got {value}")]
    InvalidStat {
        id: CharacterId,
        stat: &'static str,
        requirement: &'static str,
        value: f64,
    },
}

/// A deck that cannot start a battle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("deck is empty")]
    Empty,
    #[error("deck holds {size} cards, at most {max} allowed")]
    TooLarge { size: usize, max: usize },
    #[error("deck lists {0} more than once")]
    Duplicate(CharacterId),
}

/// Why a deployment was refused.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeployError {
    #[error("battle is not in progress")]
    NotPlaying,
    #[error("not enough energy: need {required}, have {available:.2}")]
    InsufficientEnergy { required: u32, available: f64 },
    #[error("{0} is not in the selected deck")]
    NotInDeck(CharacterId),
    #[error("unknown character {0}")]
    UnknownCharacter(CharacterId),
}

/// A host command that could not be carried out.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Deploy(#[from] DeployError),
}
