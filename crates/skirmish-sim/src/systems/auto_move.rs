//! Steering: turn toward the AutoMove target at full angular speed.

use skirmish_core::constants::AUTO_MOVE_TOLERANCE;
use skirmish_core::geometry::shortest_rotation;
use skirmish_core::types::Entity;

use crate::world::World;

/// Drive the angular rate of every entity with an active AutoMove target.
///
/// Outside the tolerance the rate is set to its max, signed toward the
/// target (on the acceleration if the entity has one). Inside it, rotation
/// stops, the heading snaps onto the target and the target is cleared.
pub fn run(world: &mut World, entities: &[Entity]) {
    let components = &mut world.components;
    for &entity in entities {
        let Some(auto_move) = components.auto_moves.get_mut(entity) else {
            continue;
        };
        if !auto_move.active {
            continue;
        }
        let (Some(position), Some(velocity)) = (
            components.positions.get_mut(entity),
            components.velocities.get_mut(entity),
        ) else {
            continue;
        };
        let acceleration = components.accelerations.get_mut(entity);

        let delta = shortest_rotation(position.direction, auto_move.target_direction);
        if delta.abs() > AUTO_MOVE_TOLERANCE {
            match acceleration {
                Some(acceleration) => {
                    acceleration.angular_current = acceleration.angular_max.copysign(delta)
                }
                None => velocity.angular_current = velocity.angular_max.copysign(delta),
            }
        } else {
            if let Some(acceleration) = acceleration {
                acceleration.angular_current = 0.0;
            }
            velocity.angular_current = 0.0;
            position.direction = auto_move.target_direction;
            auto_move.active = false;
        }
    }
}
