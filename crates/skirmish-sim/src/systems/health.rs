//! Aging, decay and removal.

use skirmish_core::types::Entity;

use crate::world::World;

/// Count lifetimes down and mark finished entities for removal.
pub fn run(world: &mut World, entities: &[Entity], dt: f64) {
    let mut finished = Vec::new();
    for &entity in entities {
        let Some(health) = world.components.healths.get_mut(entity) else {
            continue;
        };

        if health.ages {
            health.ttl = (health.ttl - dt).max(0.0);
            if health.ttl == 0.0 {
                health.dead = true;
            }
        }
        if health.dead && health.decays {
            health.decay_ttl = (health.decay_ttl - dt).max(0.0);
            if health.decay_ttl == 0.0 {
                health.decayed = true;
            }
        }

        if health.is_removable() {
            finished.push(entity);
        }
    }

    for entity in finished {
        world.remove_entity(entity);
    }
}
