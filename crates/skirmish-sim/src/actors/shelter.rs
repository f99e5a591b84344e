use skirmish_bhv::{Node, Status, Tree, WaitState};
use skirmish_core::components::{BoundingBox, Position};
use skirmish_core::constants::{SHELTER_DELAY_MAX, SHELTER_DELAY_MIN, SHELTER_SIZE};
use skirmish_core::enums::EntityType;
use skirmish_core::types::Entity;

use super::tank::spawn_tank;
use crate::world::World;

/// A static shelter that releases one tank, facing `direction`, after a
/// random delay.
pub fn spawn_tank_shelter(world: &mut World, x: f64, y: f64, direction: f64) -> Entity {
    let entity = world.add_entity(EntityType::TankShelter);
    let components = &mut world.components;
    components
        .positions
        .insert(entity, Position::new(x, y, direction));
    components
        .bounding_boxes
        .insert(entity, BoundingBox::square(SHELTER_SIZE));

    let release = Node::action(move |world: &mut World, _| {
        spawn_tank(world, x, y, direction);
        Status::Success
    });
    components.behaviors.insert(
        entity,
        Tree::new(Node::limit(
            1,
            Node::wait(
                WaitState::uniform(SHELTER_DELAY_MIN, SHELTER_DELAY_MAX),
                release,
            ),
        )),
    );
    entity
}
