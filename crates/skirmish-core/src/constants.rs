//! Simulation constants and tuning parameters.

// --- Arena geometry ---

/// Half the arena width (x spans -HALF_WIDTH..HALF_WIDTH).
pub const ARENA_HALF_WIDTH: f64 = 8.0;

/// Half the arena length (z spans -HALF_LENGTH..HALF_LENGTH).
pub const ARENA_HALF_LENGTH: f64 = 12.0;

/// Lateral offset of each lane centre from the arena midline.
pub const LANE_X: f64 = 4.0;

/// Distance of the deployment edge from the river.
pub const DEPLOY_EDGE_Z: f64 = 9.0;

/// Distance of the king tower from the river.
pub const KING_TOWER_Z: f64 = 11.0;

/// Distance of the side towers from the river.
pub const SIDE_TOWER_Z: f64 = 7.5;

/// Footprint radius of a tower; attackers reach it from this far out.
pub const TOWER_RADIUS: f64 = 1.0;

/// Slack used when comparing distances against attack ranges.
pub const RANGE_EPSILON: f64 = 1e-6;

// --- Energy ---

pub const DEFAULT_STARTING_ENERGY: f64 = 5.0;
pub const DEFAULT_MAX_ENERGY: f64 = 10.0;

/// Energy per second.
pub const DEFAULT_ENERGY_REGEN_RATE: f64 = 1.0;

// --- Towers ---

pub const DEFAULT_KING_TOWER_HEALTH: f64 = 2000.0;
pub const DEFAULT_SIDE_TOWER_HEALTH: f64 = 1400.0;
pub const DEFAULT_TOWER_DAMAGE: f64 = 50.0;
pub const DEFAULT_TOWER_RANGE: f64 = 6.0;
pub const DEFAULT_TOWER_ATTACK_COOLDOWN_SECS: f64 = 0.8;

// --- Deck ---

/// Maximum number of cards in a battle deck.
pub const MAX_DECK_SIZE: usize = 4;

// --- Enemy AI ---

pub const DEFAULT_AI_INITIAL_DELAY_SECS: f64 = 3.0;
pub const DEFAULT_AI_MIN_INTERVAL_SECS: f64 = 4.0;
pub const DEFAULT_AI_MAX_INTERVAL_SECS: f64 = 7.0;

// --- Score ---

pub const SCORE_PER_UNIT_KILL: u32 = 10;
pub const SCORE_PER_SIDE_TOWER: u32 = 100;
pub const SCORE_PER_KING_TOWER: u32 = 300;
