//! Behavior tree ticking.

use skirmish_core::types::Entity;

use crate::world::World;

/// Tick each entity's tree once.
///
/// The tree is taken out of storage while it runs so its nodes can mutate
/// the whole world, then put back.
pub fn run(world: &mut World, entities: &[Entity], dt: f64) {
    for &entity in entities {
        let Some(mut tree) = world.components.behaviors.remove(entity) else {
            continue;
        };
        tree.tick(world, dt);
        if world.is_alive(entity) {
            world.components.behaviors.insert(entity, tree);
        }
    }
}
