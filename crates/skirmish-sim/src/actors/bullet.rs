use skirmish_core::components::{BoundingBox, Health, Position, Velocity};
use skirmish_core::constants::BULLET_SIZE;
use skirmish_core::enums::EntityType;
use skirmish_core::types::Entity;

use crate::world::World;

/// A bullet flying straight at `speed` until it hits something or its
/// `ttl` runs out.
pub fn spawn_bullet(
    world: &mut World,
    x: f64,
    y: f64,
    direction: f64,
    speed: f64,
    ttl: f64,
) -> Entity {
    let entity = world.add_entity(EntityType::Bullet);
    let components = &mut world.components;
    components
        .positions
        .insert(entity, Position::new(x, y, direction));
    components.velocities.insert(
        entity,
        Velocity {
            current: speed,
            max: speed,
            ..Default::default()
        },
    );
    components
        .bounding_boxes
        .insert(entity, BoundingBox::square(BULLET_SIZE));
    components.healths.insert(entity, Health::aging(ttl));
    entity
}
