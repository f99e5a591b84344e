use std::f64::consts::TAU;

use rand::Rng;

use skirmish_bhv::{Blackboard, BurstState, Node, Sample, Status, Tree, WaitState};
use skirmish_core::components::{AutoMove, BoundingBox, Health, Position, Velocity};
use skirmish_core::constants::{
    TOWER_BULLET_SPEED, TOWER_BULLET_SPREAD, TOWER_BULLET_TTL, TOWER_BURST_INTERVAL,
    TOWER_BURST_MAX, TOWER_BURST_MIN, TOWER_DECAY_TTL, TOWER_MAX_ANGULAR_VELOCITY, TOWER_SIZE,
    TOWER_WAIT_MAX, TOWER_WAIT_MIN,
};
use skirmish_core::enums::EntityType;
use skirmish_core::types::Entity;

use super::aim::Aim;
use super::bullet::spawn_bullet;
use crate::world::World;

/// A stationary turret. Every 5–10 s it turns to a random heading and fires
/// a burst of 3–6 bullets. Killed towers stay around for the decay time.
pub fn spawn_tower(world: &mut World, x: f64, y: f64) -> Entity {
    let entity = world.add_entity(EntityType::Tower);
    let components = &mut world.components;
    components.auto_moves.insert(entity, AutoMove::default());
    components
        .healths
        .insert(entity, Health::decaying(TOWER_DECAY_TTL));
    components
        .positions
        .insert(entity, Position::new(x, y, 0.0));
    components
        .bounding_boxes
        .insert(entity, BoundingBox::square(TOWER_SIZE));
    components.velocities.insert(
        entity,
        Velocity {
            angular_max: TOWER_MAX_ANGULAR_VELOCITY,
            ..Default::default()
        },
    );
    components.behaviors.insert(entity, tower_behavior(entity));
    entity
}

fn tower_behavior(entity: Entity) -> Tree<World> {
    let alive = Node::action(move |world: &mut World, _| {
        if world.is_entity_dead(entity) {
            Status::Failure
        } else {
            Status::Success
        }
    });

    let fire = Node::action(move |world: &mut World, _| fire_bullet(world, entity));
    let burst = Node::burst(
        BurstState::new(
            Sample::Uniform(TOWER_BURST_MIN, TOWER_BURST_MAX),
            TOWER_BURST_INTERVAL,
        ),
        fire,
    );

    Tree::new(Node::sequence(vec![
        alive,
        Node::wait(
            WaitState::uniform(TOWER_WAIT_MIN, TOWER_WAIT_MAX),
            Aim::node(entity, Sample::Uniform(0.0, TAU), burst),
        ),
    ]))
}

/// One bullet from the tower's center along its heading, with a little
/// random spread.
fn fire_bullet(world: &mut World, tower: Entity) -> Status {
    let components = &world.components;
    let (Some(position), Some(bounding_box)) = (
        components.positions.get(tower).copied(),
        components.bounding_boxes.get(tower).copied(),
    ) else {
        return Status::Failure;
    };

    let spread = world
        .rng()
        .gen_range(-TOWER_BULLET_SPREAD..TOWER_BULLET_SPREAD);
    spawn_bullet(
        world,
        position.x + bounding_box.width / 2.0,
        position.y + bounding_box.height / 2.0,
        position.direction + spread,
        TOWER_BULLET_SPEED,
        TOWER_BULLET_TTL,
    );
    Status::Success
}
