//! Fundamental identifier and timing types.

use serde::{Deserialize, Serialize};

/// Handle to an entity: a slot index plus the generation of that slot.
///
/// Slots are recycled once an entity is removed; the generation makes a
/// stale handle resolve to nothing instead of to the slot's new occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Entity {
    pub index: u32,
    pub generation: u32,
}

impl Entity {
    pub fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "E{}g{}", self.index, self.generation)
    }
}

/// Bookkeeping for the tick loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TickStats {
    /// Number of completed ticks.
    pub tick: u64,
    /// Elapsed simulation time in seconds (sum of measured deltas).
    pub elapsed_secs: f64,
    /// Wall-clock delta fed into the most recent tick.
    pub last_dt: f64,
    /// Instantaneous tick rate derived from `last_dt`.
    pub fps: f64,
}

impl TickStats {
    /// Record one tick that advanced the world by `dt` seconds.
    pub fn record(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
        self.last_dt = dt;
        self.fps = if dt > 0.0 { 1.0 / dt } else { 0.0 };
    }
}
