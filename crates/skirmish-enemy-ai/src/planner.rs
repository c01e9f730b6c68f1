//! Enemy deployment planner.
//!
//! A countdown in simulated seconds. Each expiry yields one [`SpawnOrder`]
//! and draws the next interval. No ECS dependency: operates on plain data
//! and a caller-supplied RNG, so identical seeds replay identically.

use rand::Rng;

use skirmish_core::characters::Character;
use skirmish_core::enums::Lane;
use skirmish_core::types::Position;

use crate::roster::EnemyRoster;

/// Floor on any drawn interval so a degenerate config cannot spin.
pub const MIN_SPAWN_INTERVAL_SECS: f64 = 0.1;

/// Timing parameters for the planner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannerTiming {
    /// Delay before the first deployment of a battle.
    pub initial_delay_secs: f64,
    pub min_interval_secs: f64,
    pub max_interval_secs: f64,
}

/// A decision to deploy one enemy unit.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnOrder {
    pub character: Character,
    pub lane: Lane,
}

/// Enemy deployment countdown.
#[derive(Debug, Clone)]
pub struct SpawnPlanner {
    timing: PlannerTiming,
    countdown_secs: f64,
}

impl SpawnPlanner {
    pub fn new(timing: PlannerTiming) -> Self {
        Self {
            timing,
            countdown_secs: timing.initial_delay_secs.max(0.0),
        }
    }

    /// Seconds until the next deployment.
    pub fn countdown_secs(&self) -> f64 {
        self.countdown_secs
    }

    /// Advance by `dt` simulated seconds and return the deployment that
    /// came due, if any. At most one order is issued per call; a step long
    /// enough to cover several intervals drops the backlog and restarts the
    /// countdown from a fresh interval.
    ///
    /// `player_units` are the positions of the live player units; they steer
    /// the lane choice.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        dt: f64,
        roster: &EnemyRoster,
        player_units: &[Position],
        rng: &mut R,
    ) -> Option<SpawnOrder> {
        if !dt.is_finite() || dt <= 0.0 || roster.is_empty() {
            return None;
        }

        self.countdown_secs -= dt;
        if self.countdown_secs > 0.0 {
            return None;
        }

        let character = roster.pick(rng)?.clone();
        let lane = choose_lane(player_units, rng);
        let interval = self.next_interval(rng);
        self.countdown_secs = if self.countdown_secs + interval > 0.0 {
            self.countdown_secs + interval
        } else {
            interval
        };
        Some(SpawnOrder { character, lane })
    }

    fn next_interval<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let min = self.timing.min_interval_secs.max(MIN_SPAWN_INTERVAL_SECS);
        let max = self.timing.max_interval_secs.max(min);
        if max > min {
            rng.gen_range(min..=max)
        } else {
            min
        }
    }
}

/// Defend the lane of the most advanced player unit past the river,
/// otherwise pick a lane at random.
pub fn choose_lane<R: Rng + ?Sized>(player_units: &[Position], rng: &mut R) -> Lane {
    let pressing = player_units
        .iter()
        .filter(|p| p.z > 0.0)
        .max_by(|a, b| a.z.total_cmp(&b.z));
    match pressing {
        Some(position) => Lane::from_x(position.x),
        None if rng.gen_bool(0.5) => Lane::Left,
        None => Lane::Right,
    }
}
