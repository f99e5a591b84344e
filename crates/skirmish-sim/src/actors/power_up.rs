use std::f64::consts::FRAC_PI_2;

use skirmish_core::components::{BoundingBox, Health, Position};
use skirmish_core::constants::{SPEED_POWER_UP_SIZE, SPEED_POWER_UP_TTL};
use skirmish_core::enums::EntityType;
use skirmish_core::types::Entity;

use crate::world::World;

/// A static speed power-up that expires after `SPEED_POWER_UP_TTL`.
pub fn spawn_speed_power_up(world: &mut World, x: f64, y: f64) -> Entity {
    let entity = world.add_entity(EntityType::SpeedPowerUp);
    let components = &mut world.components;
    components
        .positions
        .insert(entity, Position::new(x, y, -FRAC_PI_2));
    components
        .bounding_boxes
        .insert(entity, BoundingBox::square(SPEED_POWER_UP_SIZE));
    components
        .healths
        .insert(entity, Health::aging(SPEED_POWER_UP_TTL));
    entity
}
