//! Simulation constants and tuning parameters.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

/// Nominal period of the tick loop in milliseconds.
pub const TICK_PERIOD_MS: u64 = 30;

// --- World ---

/// Arena width in world units.
pub const WORLD_WIDTH: f64 = 1000.0;

/// Arena height in world units.
pub const WORLD_HEIGHT: f64 = 600.0;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;

// --- Steering ---

/// Heading error below which AutoMove snaps to the target (5°).
pub const AUTO_MOVE_TOLERANCE: f64 = 5.0 * PI / 180.0;

// --- Player ---

pub const PLAYER_MAX_VELOCITY: f64 = 50.0;
pub const PLAYER_MAX_ANGULAR_VELOCITY: f64 = 10.0;
pub const PLAYER_FRICTION: f64 = 30.0;
pub const PLAYER_SIZE: f64 = 30.0;

/// Seconds a dead player lingers before removal.
pub const PLAYER_DECAY_TTL: f64 = 10.0;

/// Length of the external player handle.
pub const PLAYER_HANDLE_LEN: usize = 12;

// --- Bullet ---

pub const BULLET_SIZE: f64 = 10.0;

// --- Tower ---

pub const TOWER_SIZE: f64 = 30.0;
pub const TOWER_DECAY_TTL: f64 = 30.0;
pub const TOWER_MAX_ANGULAR_VELOCITY: f64 = FRAC_PI_2;

/// Pause between bursts (uniform, seconds).
pub const TOWER_WAIT_MIN: f64 = 5.0;
pub const TOWER_WAIT_MAX: f64 = 10.0;

/// Seconds between shots within a burst.
pub const TOWER_BURST_INTERVAL: f64 = 0.3;

/// Shots per burst (uniform, inclusive).
pub const TOWER_BURST_MIN: u32 = 3;
pub const TOWER_BURST_MAX: u32 = 6;

pub const TOWER_BULLET_SPEED: f64 = 70.0;
pub const TOWER_BULLET_TTL: f64 = 10.0;

/// Half-width of the random angular spread applied to each shot (radians).
pub const TOWER_BULLET_SPREAD: f64 = 0.02;

// --- Tank ---

pub const TANK_SIZE: f64 = 30.0;
pub const TANK_TTL: f64 = 30.0;
pub const TANK_DECAY_TTL: f64 = 15.0;
pub const TANK_SPEED: f64 = 30.0;
pub const TANK_MAX_ANGULAR_VELOCITY: f64 = PI;
pub const TANK_SENSING_RANGE: f64 = 150.0;

/// Distance from a wall at which tanks turn away.
pub const TANK_BOUNDARY_MARGIN: f64 = 50.0;

/// Delay before a fresh tank starts wandering.
pub const TANK_WANDER_INITIAL_WAIT: f64 = 5.0;
pub const TANK_WANDER_WAIT_MIN: f64 = 2.0;
pub const TANK_WANDER_WAIT_MAX: f64 = 4.0;

/// Maximum heading change of one wander step.
pub const TANK_WANDER_OFFSET: f64 = FRAC_PI_4;

// --- Tank shelter ---

pub const SHELTER_SIZE: f64 = 30.0;
pub const SHELTER_DELAY_MIN: f64 = 2.0;
pub const SHELTER_DELAY_MAX: f64 = 4.0;

// --- Speed power-up ---

pub const SPEED_POWER_UP_SIZE: f64 = 20.0;
pub const SPEED_POWER_UP_TTL: f64 = 30.0;

/// Power-ups never spawn closer than this to a wall.
pub const SPEED_POWER_UP_INSET: f64 = 70.0;

pub const SPEED_POWER_UP_WAIT_MIN: f64 = 5.0;
pub const SPEED_POWER_UP_WAIT_MAX: f64 = 7.0;

/// Max velocity gained per pickup.
pub const SPEED_POWER_UP_DELTA: f64 = 5.0;

/// Population cap for live power-ups.
pub const MAX_SPEED_POWER_UPS: usize = 5;

// --- World setup ---

/// Edge length of one raster placement cell.
pub const RASTER_CELL: f64 = 100.0;

pub const INITIAL_TOWERS: usize = 4;
pub const INITIAL_SHELTERS: usize = 2;
