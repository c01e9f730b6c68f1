//! Energy regeneration system.

use crate::economy::EnergyPool;

/// Regenerate player energy for a step of `dt` seconds, capped at max.
pub fn run(pool: &mut EnergyPool, dt: f64) {
    pool.regenerate(dt);
}
