//! Win/loss evaluation.

use hecs::World;

use skirmish_core::components::TowerInfo;
use skirmish_core::enums::{Faction, GameStatus, TowerKind};

/// `Victory` if the enemy king has fallen, else `Defeat` if the player
/// king has, else `None`. Victory wins a same-tick double knockout.
pub fn evaluate(world: &World) -> Option<GameStatus> {
    let mut enemy_king_down = false;
    let mut player_king_down = false;

    for (_entity, tower) in world.query::<&TowerInfo>().iter() {
        if tower.kind != TowerKind::King || !tower.destroyed {
            continue;
        }
        match tower.faction {
            Faction::Enemy => enemy_king_down = true,
            Faction::Player => player_king_down = true,
        }
    }

    if enemy_king_down {
        Some(GameStatus::Victory)
    } else if player_king_down {
        Some(GameStatus::Defeat)
    } else {
        None
    }
}
