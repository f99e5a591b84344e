//! The arena world: live entities, component storage and the system pipeline.

use std::collections::{HashMap, HashSet};

use log::{debug, info};
use rand::distributions::Alphanumeric;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use skirmish_bhv::Blackboard;
use skirmish_core::commands::PlayerCommand;
use skirmish_core::constants::PLAYER_HANDLE_LEN;
use skirmish_core::enums::EntityType;
use skirmish_core::types::Entity;

use crate::actors::player;
use crate::ecs::{ComponentStorage, EntityAllocator};
use crate::systems::collision::Collision;
use crate::systems::System;

/// Random alphanumeric handle handed to external callers in place of the
/// internal entity id.
pub fn new_player_handle<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..PLAYER_HANDLE_LEN)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}

pub struct World {
    allocator: EntityAllocator,
    entities: Vec<Entity>,
    pending_removal: HashSet<Entity>,
    pub components: ComponentStorage,
    systems: Vec<System>,
    width: f64,
    height: f64,
    rng: ChaCha8Rng,
    players: HashMap<String, Entity>,
    tick: u64,
}

impl World {
    pub fn new(width: f64, height: f64, seed: u64) -> Self {
        Self {
            allocator: EntityAllocator::new(),
            entities: Vec::new(),
            pending_removal: HashSet::new(),
            components: ComponentStorage::new(),
            systems: Vec::new(),
            width,
            height,
            rng: ChaCha8Rng::seed_from_u64(seed),
            players: HashMap::new(),
            tick: 0,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Number of completed updates.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    // ---- Entities ----

    pub fn add_entity(&mut self, entity_type: EntityType) -> Entity {
        let entity = self.allocator.allocate();
        self.components.entity_types.insert(entity, entity_type);
        self.entities.push(entity);
        entity
    }

    /// Mark `entity` for removal at the end of the current update.
    pub fn remove_entity(&mut self, entity: Entity) {
        if self.allocator.is_alive(entity) {
            self.pending_removal.insert(entity);
        }
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.allocator.is_alive(entity)
    }

    pub fn is_pending_removal(&self, entity: Entity) -> bool {
        self.pending_removal.contains(&entity)
    }

    /// Live entities in creation order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Live entities of `entity_type` that are not already marked for removal.
    pub fn count_of(&self, entity_type: EntityType) -> usize {
        self.entities
            .iter()
            .filter(|&&entity| {
                self.components.entity_type(entity) == Some(entity_type)
                    && !self.pending_removal.contains(&entity)
            })
            .count()
    }

    // ---- Systems ----

    pub fn add_system(&mut self, system: System) {
        self.systems.push(system);
    }

    pub fn systems(&self) -> &[System] {
        &self.systems
    }

    /// Pairs found by the collision scan of the latest update.
    pub fn collisions(&self) -> &[Collision] {
        self.systems
            .iter()
            .find_map(|system| match system {
                System::CollisionDetection(detection) => Some(detection.collisions()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    /// Run every system once, in registration order, then drop the entities
    /// marked for removal.
    ///
    /// Each system sees the entity list as it stood when that system started,
    /// so entities spawned mid-update are picked up from the next system on.
    pub fn update(&mut self, dt: f64) {
        let mut systems = std::mem::take(&mut self.systems);
        for system in &mut systems {
            let entities = self.entities.clone();
            system.run(self, &entities, dt);
        }
        systems.append(&mut self.systems);
        self.systems = systems;

        self.cleanup();
        self.tick += 1;
    }

    fn cleanup(&mut self) {
        if self.pending_removal.is_empty() {
            return;
        }

        let pending = std::mem::take(&mut self.pending_removal);
        self.entities.retain(|entity| !pending.contains(entity));
        // Free list order must not depend on hash order.
        let mut released: Vec<Entity> = pending.iter().copied().collect();
        released.sort();
        for entity in released {
            self.components.remove_entity(entity);
            self.allocator.deallocate(entity);
        }

        let allocator = &self.allocator;
        self.players.retain(|handle, entity| {
            let alive = allocator.is_alive(*entity);
            if !alive {
                info!("player {handle} left the arena");
            }
            alive
        });
        debug!("tick {}: removed {} entities", self.tick, pending.len());
    }

    // ---- Players ----

    /// Spawn a player under a fresh random handle and return the handle.
    pub fn spawn_player(&mut self) -> String {
        loop {
            let handle = new_player_handle(&mut self.rng);
            if !self.players.contains_key(&handle) {
                self.spawn_player_as(&handle);
                return handle;
            }
        }
    }

    /// Spawn a player registered under `handle`. A handle that already
    /// names a live player keeps that player.
    pub fn spawn_player_as(&mut self, handle: &str) -> Entity {
        if let Some(entity) = self.player_with_id(handle) {
            return entity;
        }
        let (x, y) = (self.width / 2.0, self.height / 2.0);
        let entity = player::spawn_player(self, x, y, 0.0);
        self.players.insert(handle.to_string(), entity);
        info!("player {handle} joined as {entity}");
        entity
    }

    pub fn player_with_id(&self, handle: &str) -> Option<Entity> {
        self.players
            .get(handle)
            .copied()
            .filter(|&entity| self.is_alive(entity))
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    // ---- Direct mutators ----

    /// Set current speed to `fraction` of the entity's max velocity.
    pub fn set_entity_velocity(&mut self, entity: Entity, fraction: f64) {
        if let Some(velocity) = self.components.velocities.get_mut(entity) {
            velocity.current = velocity.max * fraction;
        }
    }

    pub fn set_entity_direction(&mut self, entity: Entity, direction: f64) {
        if let Some(position) = self.components.positions.get_mut(entity) {
            position.direction = direction;
        }
    }

    pub fn kill_entity(&mut self, entity: Entity) {
        if let Some(health) = self.components.healths.get_mut(entity) {
            health.dead = true;
        }
    }

    pub fn is_entity_dead(&self, entity: Entity) -> bool {
        self.components.is_dead(entity)
    }

    pub fn apply_player_command(&mut self, entity: Entity, command: PlayerCommand) {
        match command {
            PlayerCommand::SetVelocity { fraction } => self.set_entity_velocity(entity, fraction),
            PlayerCommand::SetRotation { direction } => self.set_entity_direction(entity, direction),
            PlayerCommand::Respawn => self.kill_entity(entity),
        }
    }
}

impl Blackboard for World {
    fn rng(&mut self) -> &mut dyn RngCore {
        &mut self.rng
    }
}
