//! Snapshot system: reads the world and builds a `WorldSnapshot`.
//!
//! This system is read-only; it never modifies the world.

use skirmish_core::state::{EntityView, WorldSnapshot};
use skirmish_core::types::{Entity, TickStats};

use crate::world::World;

/// Build a snapshot of every renderable entity.
///
/// Entities lacking a position or bounding box, or sitting outside the
/// world bounds, are skipped.
pub fn build_snapshot(world: &World, stats: TickStats) -> WorldSnapshot {
    WorldSnapshot {
        stats,
        width: world.width(),
        height: world.height(),
        entities: world
            .entities()
            .iter()
            .filter_map(|&entity| build_view(world, entity))
            .collect(),
    }
}

fn build_view(world: &World, entity: Entity) -> Option<EntityView> {
    let components = &world.components;
    let entity_type = components.entity_type(entity)?;
    let position = components.positions.get(entity)?;
    let bounding_box = components.bounding_boxes.get(entity)?;

    let in_bounds = (0.0..=world.width()).contains(&position.x)
        && (0.0..=world.height()).contains(&position.y);
    if !in_bounds {
        return None;
    }

    Some(EntityView {
        entity,
        entity_type,
        x: position.x,
        y: position.y,
        direction: position.direction,
        width: bounding_box.width,
        height: bounding_box.height,
        dead: components.is_dead(entity),
    })
}
