//! Movement system.
//!
//! Units in range of their target stop and attack; the rest walk toward it
//! by `speed * dt`, never past the point where the target comes into range.
//! All units move against the same start-of-tick survey.

use hecs::World;

use skirmish_core::components::{Targeting, UnitInfo};
use skirmish_core::enums::UnitState;
use skirmish_core::types::Position;

use crate::battlefield::Battlefield;

pub fn run(world: &mut World, field: &Battlefield, dt: f64) {
    for (_entity, (info, pos, targeting, state)) in
        world.query_mut::<(&UnitInfo, &mut Position, &Targeting, &mut UnitState)>()
    {
        let Some(target) = targeting.target.and_then(|t| field.live(t)) else {
            *state = UnitState::Idle;
            continue;
        };

        let range = info.character.range;
        if target.within(pos, range) {
            *state = UnitState::Attacking;
            continue;
        }

        *state = UnitState::Moving;
        let gap = target.reach_from(pos) - range;
        let step = (info.character.speed * dt).min(gap);
        *pos = pos.step_toward(&target.position, step);
    }
}
