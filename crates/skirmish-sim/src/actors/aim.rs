//! Aim decorator: turn toward a heading before running the child.

use skirmish_bhv::{Behavior, Blackboard, Node, Sample, Status};
use skirmish_core::types::Entity;

use crate::world::World;

/// Points its entity at a heading through the AutoMove steering component,
/// and only runs the child once the turn has finished.
///
/// The heading is drawn once per aim and latched until the child succeeds,
/// so a child that keeps running (a burst, say) fires along one heading.
pub struct Aim {
    entity: Entity,
    heading: Sample<f64>,
    child: Node<World>,
    is_aiming: bool,
    has_aimed: bool,
}

impl Aim {
    pub fn new(entity: Entity, heading: Sample<f64>, child: Node<World>) -> Self {
        Self {
            entity,
            heading,
            child,
            is_aiming: false,
            has_aimed: false,
        }
    }

    pub fn node(entity: Entity, heading: Sample<f64>, child: Node<World>) -> Node<World> {
        Node::custom(Self::new(entity, heading, child))
    }
}

impl Behavior<World> for Aim {
    fn tick(&mut self, world: &mut World, dt: f64) -> Status {
        if !self.is_aiming && !self.has_aimed {
            let heading = self.heading.draw(world.rng());
            let Some(auto_move) = world.components.auto_moves.get_mut(self.entity) else {
                return Status::Failure;
            };
            auto_move.set_target_direction(heading);
            self.is_aiming = true;
        }

        let turning = world
            .components
            .auto_moves
            .get(self.entity)
            .is_some_and(|auto_move| auto_move.active);
        if self.is_aiming && turning {
            return Status::Running;
        }

        self.has_aimed = true;
        let status = self.child.tick(world, dt);
        if status != Status::Success {
            return status;
        }

        self.is_aiming = false;
        self.has_aimed = false;
        Status::Success
    }
}
