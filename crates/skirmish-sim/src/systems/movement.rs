//! Kinematic integration.
//!
//! Per entity with Position + Velocity: acceleration (clamped to max), then
//! friction toward rest, then heading and position.

use skirmish_core::geometry::{accelerate, advance, decelerate};
use skirmish_core::types::Entity;

use crate::world::World;

pub fn run(world: &mut World, entities: &[Entity], dt: f64) {
    let components = &mut world.components;
    for &entity in entities {
        let (Some(position), Some(velocity)) = (
            components.positions.get_mut(entity),
            components.velocities.get_mut(entity),
        ) else {
            continue;
        };

        // Dead entities stop where they are.
        let dead = components.healths.get(entity).is_some_and(|h| h.dead);
        if dead {
            velocity.current = 0.0;
            velocity.angular_current = 0.0;
        }

        if let Some(acceleration) = components.accelerations.get_mut(entity) {
            if dead {
                acceleration.current = 0.0;
                acceleration.angular_current = 0.0;
            }
            velocity.current = accelerate(velocity.current, velocity.max, acceleration.current, dt);
            velocity.angular_current = accelerate(
                velocity.angular_current,
                velocity.angular_max,
                acceleration.angular_current,
                dt,
            );
        }

        if let Some(friction) = components.frictions.get(entity) {
            velocity.current = decelerate(velocity.current, friction.current * dt);
            velocity.angular_current =
                decelerate(velocity.angular_current, friction.angular_current * dt);
        }

        position.direction += velocity.angular_current * dt;
        advance(position, velocity.current, dt);
    }
}
