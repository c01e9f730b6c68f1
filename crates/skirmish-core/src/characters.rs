//! Static character definitions and the built-in catalog.
//!
//! A [`Character`] can only be obtained through validation, so every system
//! downstream may assume positive health, speed and attack cooldown.

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::enums::{CharacterKind, Element, Rarity};
use crate::error::CharacterError;

/// Stable identifier of a character definition (e.g. `"ember-knight"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(String);

/// Raw, unvalidated character stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterDef {
    pub id: CharacterId,
    pub name: String,
    /// Energy cost to deploy.
    pub cost: u32,
    pub health: f64,
    /// Damage per hit.
    pub damage: f64,
    /// Movement speed (arena units per second).
    pub speed: f64,
    /// Attack range (arena units).
    pub range: f64,
    /// Seconds between hits.
    pub attack_cooldown_secs: f64,
    pub element: Element,
    pub rarity: Rarity,
    pub kind: CharacterKind,
}

/// A validated character definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CharacterDef", into = "CharacterDef")]
pub struct Character(CharacterDef);

/// Lookup table of known characters.
#[derive(Debug, Clone, Default)]
pub struct CharacterCatalog {
    characters: Vec<Character>,
}

impl CharacterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CharacterId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CharacterId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Character {
    /// Validate a definition.
    pub fn new(def: CharacterDef) -> Result<Self, CharacterError> {
        if def.id.as_str().is_empty() {
            return Err(CharacterError::EmptyId);
        }
        let checks: [(&'static str, f64, bool, &'static str); 5] = [
            ("health", def.health, def.health > 0.0, "positive"),
            ("speed", def.speed, def.speed > 0.0, "positive"),
            (
                "attack_cooldown_secs",
                def.attack_cooldown_secs,
                def.attack_cooldown_secs > 0.0,
                "positive",
            ),
            ("damage", def.damage, def.damage >= 0.0, "non-negative"),
            ("range", def.range, def.range >= 0.0, "non-negative"),
        ];
        for (stat, value, ok, requirement) in checks {
            if !ok || !value.is_finite() {
                return Err(CharacterError::InvalidStat {
                    id: def.id.clone(),
                    stat,
                    requirement,
                    value,
                });
            }
        }
        Ok(Self(def))
    }

    pub fn def(&self) -> &CharacterDef {
        &self.0
    }
}

impl Deref for Character {
    type Target = CharacterDef;

    fn deref(&self) -> &CharacterDef {
        &self.0
    }
}

impl TryFrom<CharacterDef> for Character {
    type Error = CharacterError;

    fn try_from(def: CharacterDef) -> Result<Self, Self::Error> {
        Character::new(def)
    }
}

impl From<Character> for CharacterDef {
    fn from(character: Character) -> Self {
        character.0
    }
}

impl CharacterCatalog {
    /// The eight characters shipped with the game.
    pub fn builtin() -> Self {
        let characters = builtin_defs()
            .into_iter()
            .filter_map(|def| Character::new(def).ok())
            .collect();
        Self { characters }
    }

    pub fn from_characters(characters: impl IntoIterator<Item = Character>) -> Self {
        Self {
            characters: characters.into_iter().collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.id.as_str() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter()
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

#[allow(clippy::too_many_arguments)]
fn def(
    id: &str,
    name: &str,
    cost: u32,
    health: f64,
    damage: f64,
    speed: f64,
    range: f64,
    attack_cooldown_secs: f64,
    element: Element,
    rarity: Rarity,
    kind: CharacterKind,
) -> CharacterDef {
    CharacterDef {
        id: CharacterId::from(id),
        name: name.to_owned(),
        cost,
        health,
        damage,
        speed,
        range,
        attack_cooldown_secs,
        element,
        rarity,
        kind,
    }
}

fn builtin_defs() -> Vec<CharacterDef> {
    use CharacterKind::*;
    use Element::*;
    use Rarity::*;

    vec![
        def("ember-knight", "Ember Knight", 3, 600.0, 90.0, 1.5, 1.0, 1.1, Fire, Common, Melee),
        def("tide-archer", "Tide Archer", 3, 280.0, 60.0, 1.4, 5.0, 1.0, Water, Common, Ranged),
        def("volt-runner", "Volt Runner", 2, 260.0, 55.0, 2.5, 1.0, 0.7, Electric, Rare, Melee),
        def("sun-guardian", "Sun Guardian", 5, 1800.0, 120.0, 0.9, 1.2, 1.5, Light, Epic, Tank),
        def("shade-assassin", "Shade Assassin", 4, 420.0, 160.0, 2.2, 1.0, 0.9, Shadow, Epic, Melee),
        def("grove-warden", "Grove Warden", 4, 700.0, 45.0, 1.2, 3.5, 0.8, Nature, Rare, Support),
        def("spark-mage", "Spark Mage", 4, 320.0, 110.0, 1.3, 5.5, 1.4, Electric, Rare, Ranged),
        def("dawn-dragon", "Dawn Dragon", 6, 1200.0, 150.0, 1.6, 4.0, 1.6, Fire, Legendary, Ranged),
    ]
}
