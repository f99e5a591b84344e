use rand::Rng;

use skirmish_bhv::{Blackboard, Node, Status, Tree, WaitState};
use skirmish_core::components::{AutoMove, BoundingBox, Health, Position, Sensing, Velocity};
use skirmish_core::constants::{
    TANK_BOUNDARY_MARGIN, TANK_DECAY_TTL, TANK_MAX_ANGULAR_VELOCITY, TANK_SENSING_RANGE,
    TANK_SIZE, TANK_SPEED, TANK_TTL, TANK_WANDER_INITIAL_WAIT, TANK_WANDER_OFFSET,
    TANK_WANDER_WAIT_MAX, TANK_WANDER_WAIT_MIN,
};
use skirmish_core::enums::EntityType;
use skirmish_core::geometry::direction_to;
use skirmish_core::types::Entity;

use crate::world::World;

/// An autonomous tank that drives at constant speed, chases players it can
/// sense and otherwise wanders. It lives `TANK_TTL` seconds.
///
/// Its tree is a selector over, in priority order: staying idle when dead,
/// turning away from the arena edge, chasing a sensed live player, and a
/// periodic random turn.
pub fn spawn_tank(world: &mut World, x: f64, y: f64, direction: f64) -> Entity {
    let entity = world.add_entity(EntityType::Tank);
    let components = &mut world.components;
    components.auto_moves.insert(entity, AutoMove::default());
    components
        .healths
        .insert(entity, Health::aging_and_decaying(TANK_TTL, TANK_DECAY_TTL));
    components
        .positions
        .insert(entity, Position::new(x, y, direction));
    components
        .bounding_boxes
        .insert(entity, BoundingBox::square(TANK_SIZE));
    components.sensings.insert(
        entity,
        Sensing::new().with_range(EntityType::Player, TANK_SENSING_RANGE),
    );
    components.velocities.insert(
        entity,
        Velocity {
            current: TANK_SPEED,
            max: TANK_SPEED,
            angular_max: TANK_MAX_ANGULAR_VELOCITY,
            ..Default::default()
        },
    );
    components.behaviors.insert(
        entity,
        Tree::new(Node::selector(vec![
            dead_check(entity),
            avoid_boundaries(entity),
            chase_player(entity),
            wander(entity),
        ])),
    );
    entity
}

/// Heading pointing straight away from whichever walls `(x, y)` is within
/// `margin` of, or `None` when it is clear of all of them.
pub fn boundary_heading(x: f64, y: f64, width: f64, height: f64, margin: f64) -> Option<f64> {
    let dx = if x < margin {
        1.0
    } else if x > width - margin {
        -1.0
    } else {
        0.0
    };
    let dy = if y < margin {
        1.0
    } else if y > height - margin {
        -1.0
    } else {
        0.0
    };

    if dx == 0.0 && dy == 0.0 {
        None
    } else {
        Some(f64::atan2(dy, dx))
    }
}

fn dead_check(entity: Entity) -> Node<World> {
    Node::action(move |world: &mut World, _| {
        if world.is_entity_dead(entity) {
            Status::Success
        } else {
            Status::Failure
        }
    })
}

fn avoid_boundaries(entity: Entity) -> Node<World> {
    Node::action(move |world: &mut World, _| {
        let Some(position) = world.components.positions.get(entity) else {
            return Status::Failure;
        };
        let Some(heading) = boundary_heading(
            position.x,
            position.y,
            world.width(),
            world.height(),
            TANK_BOUNDARY_MARGIN,
        ) else {
            return Status::Failure;
        };
        match world.components.auto_moves.get_mut(entity) {
            Some(auto_move) => {
                auto_move.set_target_direction(heading);
                Status::Success
            }
            None => Status::Failure,
        }
    })
}

/// Steer toward the first live player in the sensed list.
fn chase_player(entity: Entity) -> Node<World> {
    Node::action(move |world: &mut World, _| {
        let components = &world.components;
        let (Some(sensing), Some(position)) = (
            components.sensings.get(entity),
            components.positions.get(entity),
        ) else {
            return Status::Failure;
        };

        let target = sensing
            .sensed
            .iter()
            .filter(|sensed| sensed.entity_type == EntityType::Player)
            .filter(|sensed| world.is_alive(sensed.entity) && !components.is_dead(sensed.entity))
            .find_map(|sensed| components.positions.get(sensed.entity));
        let Some(target) = target else {
            return Status::Failure;
        };

        let heading = direction_to(position, target);
        match world.components.auto_moves.get_mut(entity) {
            Some(auto_move) => {
                auto_move.set_target_direction(heading);
                Status::Success
            }
            None => Status::Failure,
        }
    })
}

fn wander(entity: Entity) -> Node<World> {
    let turn = Node::action(move |world: &mut World, _| {
        let offset = world
            .rng()
            .gen_range(-TANK_WANDER_OFFSET..TANK_WANDER_OFFSET);
        let components = &mut world.components;
        let (Some(position), Some(auto_move)) = (
            components.positions.get(entity),
            components.auto_moves.get_mut(entity),
        ) else {
            return Status::Failure;
        };
        auto_move.set_target_direction(position.direction + offset);
        Status::Success
    });

    Node::wait(
        WaitState::uniform(TANK_WANDER_WAIT_MIN, TANK_WANDER_WAIT_MAX)
            .with_initial_wait(TANK_WANDER_INITIAL_WAIT),
        turn,
    )
}
