//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Kind of actor an entity represents.
///
/// Attached once when the entity is created and never changed afterwards.
/// Collision handlers are keyed by pairs of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityType {
    Player,
    Bullet,
    Tank,
    TankShelter,
    Tower,
    SpeedPowerUp,
}

impl EntityType {
    pub const ALL: [EntityType; 6] = [
        EntityType::Player,
        EntityType::Bullet,
        EntityType::Tank,
        EntityType::TankShelter,
        EntityType::Tower,
        EntityType::SpeedPowerUp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Player => "player",
            EntityType::Bullet => "bullet",
            EntityType::Tank => "tank",
            EntityType::TankShelter => "tankShelter",
            EntityType::Tower => "tower",
            EntityType::SpeedPowerUp => "speedPowerUp",
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
