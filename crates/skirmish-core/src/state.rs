//! World snapshot: the read-only view handed to the projection layer.

use serde::{Deserialize, Serialize};

use crate::enums::EntityType;
use crate::types::{Entity, TickStats};

/// Complete renderable state, captured after a tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub stats: TickStats,
    pub width: f64,
    pub height: f64,
    pub entities: Vec<EntityView>,
}

/// One renderable entity. Only entities with a position inside the arena
/// and a bounding box appear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub entity: Entity,
    pub entity_type: EntityType,
    pub x: f64,
    pub y: f64,
    pub direction: f64,
    pub width: f64,
    pub height: f64,
    /// Selects the dead sprite variant and drops the z-order by one.
    pub dead: bool,
}

impl WorldSnapshot {
    pub fn count_of(&self, entity_type: EntityType) -> usize {
        self.entities
            .iter()
            .filter(|view| view.entity_type == entity_type)
            .count()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
