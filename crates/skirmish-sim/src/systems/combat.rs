//! Combat system: attack clocks, hit collection and damage application.
//!
//! Hits are gathered from every attacker first and applied afterwards, so the
//! outcome of a tick does not depend on iteration order and two units can
//! trade fatal blows.

use hecs::World;

use skirmish_core::components::{
    AttackClock, Health, TargetRef, Targeting, TowerInfo, TowerWeapon, UnitInfo,
};
use skirmish_core::enums::UnitState;

use crate::battlefield::Battlefield;

/// Damage dealt to one target during a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub target: TargetRef,
    pub damage: f64,
}

/// Advance attack clocks, resolve hits and apply damage. Returns the hits
/// that landed.
pub fn run(world: &mut World, field: &Battlefield, dt: f64) -> Vec<Hit> {
    let mut hits = Vec::new();

    for (_entity, (info, state, targeting, clock)) in
        world.query_mut::<(&UnitInfo, &UnitState, &Targeting, &mut AttackClock)>()
    {
        let engaged = *state == UnitState::Attacking;
        let strikes = tick_clock(clock, info.character.attack_cooldown_secs, dt, engaged);
        if let Some(target) = targeting.target.filter(|_| strikes > 0) {
            hits.push(Hit {
                target,
                damage: info.character.damage * f64::from(strikes),
            });
        }
    }

    for (_entity, (tower, weapon, targeting, clock)) in
        world.query_mut::<(&TowerInfo, &TowerWeapon, &Targeting, &mut AttackClock)>()
    {
        let engaged = !tower.destroyed && targeting.target.is_some();
        let strikes = tick_clock(clock, weapon.cooldown_secs, dt, engaged);
        if let Some(target) = targeting.target.filter(|_| strikes > 0) {
            hits.push(Hit {
                target,
                damage: weapon.damage * f64::from(strikes),
            });
        }
    }

    apply_hits(world, field, &hits);
    hits
}

/// Bank `dt` on the clock. While engaged, every full cooldown becomes one
/// strike. While idle the clock saturates at one cooldown, so the first
/// strike of an engagement is immediate but strikes cannot be stockpiled.
pub fn tick_clock(clock: &mut AttackClock, cooldown: f64, dt: f64, engaged: bool) -> u32 {
    let banked = clock.since_last_attack_secs + dt;
    if !engaged {
        clock.since_last_attack_secs = banked.min(cooldown);
        return 0;
    }
    let strikes = (banked / cooldown).floor();
    clock.since_last_attack_secs = banked - strikes * cooldown;
    // Saturating float-to-int conversion.
    strikes as u32
}

/// Subtract damage from live targets, clamping at zero. Targets that were
/// already dead or destroyed at the start of the tick take nothing.
pub fn apply_hits(world: &mut World, field: &Battlefield, hits: &[Hit]) {
    for hit in hits {
        let Some(target) = field.live(hit.target) else {
            continue;
        };
        if let Ok(mut health) = world.get::<&mut Health>(target.entity) {
            health.current = (health.current - hit.damage).clamp(0.0, health.max);
        }
    }
}
