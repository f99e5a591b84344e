//! Column-per-component storage indexed by entity.

use skirmish_bhv::Tree;
use skirmish_core::components::{
    Acceleration, AutoMove, BoundingBox, Friction, Health, Position, Sensing, Velocity,
};
use skirmish_core::enums::EntityType;
use skirmish_core::types::Entity;

use crate::world::World;

/// Sparse column of one component type. Slots are indexed by entity index
/// and remember the generation they were written for.
#[derive(Debug)]
pub struct Column<T> {
    slots: Vec<Option<(u32, T)>>,
}

impl<T> Default for Column<T> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T> Column<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, entity: Entity) -> Option<&T> {
        self.slots
            .get(entity.index as usize)
            .and_then(Option::as_ref)
            .filter(|(generation, _)| *generation == entity.generation)
            .map(|(_, value)| value)
    }

    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        self.slots
            .get_mut(entity.index as usize)
            .and_then(Option::as_mut)
            .filter(|(generation, _)| *generation == entity.generation)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.get(entity).is_some()
    }

    /// Attach `value` to `entity`, replacing whatever the slot held.
    pub fn insert(&mut self, entity: Entity, value: T) {
        let index = entity.index as usize;
        if index >= self.slots.len() {
            self.slots.resize_with(index + 1, || None);
        }
        self.slots[index] = Some((entity.generation, value));
    }

    /// Detach and return the value, if `entity` holds one.
    pub fn remove(&mut self, entity: Entity) -> Option<T> {
        let slot = self.slots.get_mut(entity.index as usize)?;
        if slot
            .as_ref()
            .is_some_and(|(generation, _)| *generation == entity.generation)
        {
            slot.take().map(|(_, value)| value)
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.as_ref()
                .map(|(generation, value)| (Entity::new(index as u32, *generation), value))
        })
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One column per component type.
#[derive(Debug, Default)]
pub struct ComponentStorage {
    pub entity_types: Column<EntityType>,
    pub positions: Column<Position>,
    pub velocities: Column<Velocity>,
    pub accelerations: Column<Acceleration>,
    pub frictions: Column<Friction>,
    pub bounding_boxes: Column<BoundingBox>,
    pub healths: Column<Health>,
    pub auto_moves: Column<AutoMove>,
    pub sensings: Column<Sensing>,
    pub behaviors: Column<Tree<World>>,
}

impl ComponentStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every component attached to `entity`.
    pub fn remove_entity(&mut self, entity: Entity) {
        self.entity_types.remove(entity);
        self.positions.remove(entity);
        self.velocities.remove(entity);
        self.accelerations.remove(entity);
        self.frictions.remove(entity);
        self.bounding_boxes.remove(entity);
        self.healths.remove(entity);
        self.auto_moves.remove(entity);
        self.sensings.remove(entity);
        self.behaviors.remove(entity);
    }

    pub fn entity_type(&self, entity: Entity) -> Option<EntityType> {
        self.entity_types.get(entity).copied()
    }

    pub fn is_dead(&self, entity: Entity) -> bool {
        self.healths.get(entity).is_some_and(|health| health.dead)
    }
}
