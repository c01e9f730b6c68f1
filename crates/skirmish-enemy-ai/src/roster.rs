//! The fixed set of characters the enemy may deploy.

use rand::Rng;
use thiserror::Error;

use skirmish_core::characters::{Character, CharacterCatalog, CharacterId};

/// Characters the enemy draws from when no roster is configured.
pub const DEFAULT_ROSTER: [&str; 4] = ["ember-knight", "tide-archer", "volt-runner", "grove-warden"];

/// A roster that cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("enemy roster is empty")]
    Empty,
    #[error("enemy roster references unknown character {0}")]
    UnknownCharacter(CharacterId),
}

/// Resolved enemy roster.
#[derive(Debug, Clone)]
pub struct EnemyRoster {
    characters: Vec<Character>,
}

impl EnemyRoster {
    /// Resolve roster ids against a catalog.
    pub fn from_ids(catalog: &CharacterCatalog, ids: &[CharacterId]) -> Result<Self, RosterError> {
        if ids.is_empty() {
            return Err(RosterError::Empty);
        }
        let characters = ids
            .iter()
            .map(|id| {
                catalog
                    .get(id.as_str())
                    .cloned()
                    .ok_or_else(|| RosterError::UnknownCharacter(id.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { characters })
    }

    pub fn default_ids() -> Vec<CharacterId> {
        DEFAULT_ROSTER.iter().map(|id| CharacterId::from(*id)).collect()
    }

    /// Uniform draw. `None` only for an empty roster.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Character> {
        if self.characters.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.characters.len());
        self.characters.get(index)
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}
