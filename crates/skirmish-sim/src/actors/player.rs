use skirmish_core::components::{BoundingBox, Friction, Health, Position, Velocity};
use skirmish_core::constants::{
    PLAYER_DECAY_TTL, PLAYER_FRICTION, PLAYER_MAX_ANGULAR_VELOCITY, PLAYER_MAX_VELOCITY,
    PLAYER_SIZE,
};
use skirmish_core::enums::EntityType;
use skirmish_core::types::Entity;

use crate::world::World;

/// A player-controlled entity. It never ages; once killed it lingers for the
/// decay time and is then removed.
pub fn spawn_player(world: &mut World, x: f64, y: f64, direction: f64) -> Entity {
    let entity = world.add_entity(EntityType::Player);
    let components = &mut world.components;
    components
        .positions
        .insert(entity, Position::new(x, y, direction));
    components.velocities.insert(
        entity,
        Velocity {
            max: PLAYER_MAX_VELOCITY,
            angular_max: PLAYER_MAX_ANGULAR_VELOCITY,
            ..Default::default()
        },
    );
    components.frictions.insert(
        entity,
        Friction {
            current: PLAYER_FRICTION,
            angular_current: 0.0,
        },
    );
    components
        .bounding_boxes
        .insert(entity, BoundingBox::square(PLAYER_SIZE));
    components
        .healths
        .insert(entity, Health::decaying(PLAYER_DECAY_TTL));
    entity
}
