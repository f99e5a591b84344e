//! ECS component types.
//!
//! Components are plain data. Attachment is sparse: an entity only carries
//! the components that mean something for it.

use std::collections::HashMap;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::EntityType;
use crate::types::Entity;

/// Location and heading in world units / radians.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub direction: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, direction: f64) -> Self {
        Self { x, y, direction }
    }

    pub fn xy(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub current: f64,
    pub max: f64,
    pub angular_current: f64,
    pub angular_max: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Acceleration {
    pub current: f64,
    pub max: f64,
    pub angular_current: f64,
    pub angular_max: f64,
}

/// Deceleration magnitudes applied every tick. Friction brings motion to
/// rest but never reverses it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Friction {
    pub current: f64,
    pub angular_current: f64,
}

/// Axis-aligned box anchored at the entity's position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn square(size: f64) -> Self {
        Self {
            width: size,
            height: size,
        }
    }
}

/// Alive → dead → decayed lifecycle.
///
/// `ttl` only runs down when `ages` is set; `decay_ttl` only runs down once
/// the entity is dead and `decays` is set. Flags never flip back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub ages: bool,
    pub ttl: f64,
    pub dead: bool,
    pub decays: bool,
    pub decay_ttl: f64,
    pub decayed: bool,
}

impl Health {
    /// Lives for `ttl` seconds, then is removed immediately.
    pub fn aging(ttl: f64) -> Self {
        Self {
            ages: true,
            ttl,
            ..Default::default()
        }
    }

    /// Lives until killed, then lingers for `decay_ttl` seconds.
    pub fn decaying(decay_ttl: f64) -> Self {
        Self {
            decays: true,
            decay_ttl,
            ..Default::default()
        }
    }

    /// Lives for `ttl` seconds, then lingers for `decay_ttl` seconds.
    pub fn aging_and_decaying(ttl: f64, decay_ttl: f64) -> Self {
        Self {
            ages: true,
            ttl,
            decays: true,
            decay_ttl,
            ..Default::default()
        }
    }

    /// Whether the world should drop the entity at the end of this tick.
    pub fn is_removable(&self) -> bool {
        self.dead && (!self.decays || self.decayed)
    }
}

/// Steering target consumed by the AutoMove system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AutoMove {
    pub target_direction: f64,
    pub active: bool,
}

impl AutoMove {
    pub fn set_target_direction(&mut self, direction: f64) {
        self.target_direction = direction;
        self.active = true;
    }
}

/// An entity picked up by a sensor this tick.
///
/// Only the handle is stored; readers look the position up in storage so
/// they always see the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensedEntity {
    pub entity: Entity,
    pub entity_type: EntityType,
}

/// Proximity sensor with a detection radius per entity type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sensing {
    pub ranges: HashMap<EntityType, f64>,
    pub sensed: Vec<SensedEntity>,
}

impl Sensing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_range(mut self, entity_type: EntityType, range: f64) -> Self {
        self.ranges.insert(entity_type, range);
        self
    }

    pub fn range_for(&self, entity_type: EntityType) -> Option<f64> {
        self.ranges.get(&entity_type).copied()
    }
}
