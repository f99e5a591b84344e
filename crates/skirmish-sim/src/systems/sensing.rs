//! Proximity sensing.
//!
//! Every sensor rebuilds its list from scratch each tick with a plain scan
//! over all other entities. Populations stay small, so there is no spatial
//! index.

use skirmish_core::components::SensedEntity;
use skirmish_core::geometry::distance;
use skirmish_core::types::Entity;

use crate::world::World;

pub fn run(world: &mut World, entities: &[Entity]) {
    let components = &mut world.components;
    for &entity in entities {
        let (Some(position), Some(sensing)) =
            (components.positions.get(entity), components.sensings.get(entity))
        else {
            continue;
        };

        let sensed: Vec<SensedEntity> = entities
            .iter()
            .filter(|&&other| other != entity)
            .filter_map(|&other| {
                let other_position = components.positions.get(other)?;
                let other_type = components.entity_type(other)?;
                let range = sensing.range_for(other_type)?;
                (distance(position, other_position) <= range).then_some(SensedEntity {
                    entity: other,
                    entity_type: other_type,
                })
            })
            .collect();

        if let Some(sensing) = components.sensings.get_mut(entity) {
            sensing.sensed = sensed;
        }
    }
}
