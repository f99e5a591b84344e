//! Pairwise AABB collision detection with type-dispatched handlers.

use std::collections::HashMap;
use std::f64::consts::PI;

use log::debug;
use serde::{Deserialize, Serialize};

use skirmish_core::constants::SPEED_POWER_UP_DELTA;
use skirmish_core::enums::EntityType;
use skirmish_core::geometry::{advance, collides};
use skirmish_core::types::Entity;

use crate::world::World;

/// Reaction to an overlap between an entity of the handler's first
/// registered type (`a`) and one of its second type (`b`).
///
/// Handlers must tolerate either entity lacking a component they touch.
pub trait CollisionHandler: Send {
    fn handle(&mut self, a: Entity, b: Entity, world: &mut World, dt: f64);
}

impl<F> CollisionHandler for F
where
    F: FnMut(Entity, Entity, &mut World, f64) + Send,
{
    fn handle(&mut self, a: Entity, b: Entity, world: &mut World, dt: f64) {
        self(a, b, world, dt)
    }
}

/// An overlapping pair, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collision {
    pub a: Entity,
    pub b: Entity,
}

#[derive(Default)]
pub struct CollisionDetectionSystem {
    collisions: Vec<Collision>,
    handlers: HashMap<(EntityType, EntityType), Box<dyn CollisionHandler>>,
}

impl CollisionDetectionSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// A system with the arena's standard handlers registered.
    pub fn with_default_handlers() -> Self {
        let mut system = Self::new();
        system.register_handler(EntityType::Bullet, EntityType::Tank, BulletTank);
        system.register_handler(EntityType::Bullet, EntityType::Player, BulletPlayer);
        system.register_handler(EntityType::Player, EntityType::Tower, PlayerTower);
        system.register_handler(EntityType::Tank, EntityType::Player, TankPlayer);
        system.register_handler(EntityType::Tank, EntityType::Tower, TankTower);
        system.register_handler(
            EntityType::Player,
            EntityType::SpeedPowerUp,
            PlayerSpeedPowerUp::default(),
        );
        system
    }

    /// Register `handler` for overlaps between `a` and `b`. It also covers
    /// the swapped pair, invoked with the roles swapped back.
    pub fn register_handler<H>(&mut self, a: EntityType, b: EntityType, handler: H)
    where
        H: CollisionHandler + 'static,
    {
        self.handlers.insert((a, b), Box::new(handler));
    }

    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    pub fn run(&mut self, world: &mut World, entities: &[Entity], dt: f64) {
        self.collisions.clear();

        for (i, &a) in entities.iter().enumerate() {
            for &b in &entities[i + 1..] {
                // Re-read every pair: an earlier handler may have moved either.
                let components = &world.components;
                let (Some(pos_a), Some(box_a), Some(pos_b), Some(box_b)) = (
                    components.positions.get(a),
                    components.bounding_boxes.get(a),
                    components.positions.get(b),
                    components.bounding_boxes.get(b),
                ) else {
                    continue;
                };
                if !collides(pos_a, box_a, pos_b, box_b) {
                    continue;
                }

                self.collisions.push(Collision { a, b });
                self.dispatch(a, b, world, dt);
            }
        }
    }

    fn dispatch(&mut self, a: Entity, b: Entity, world: &mut World, dt: f64) {
        let (Some(type_a), Some(type_b)) = (
            world.components.entity_type(a),
            world.components.entity_type(b),
        ) else {
            return;
        };

        if let Some(handler) = self.handlers.get_mut(&(type_a, type_b)) {
            handler.handle(a, b, world, dt);
        } else if let Some(handler) = self.handlers.get_mut(&(type_b, type_a)) {
            handler.handle(b, a, world, dt);
        }
    }
}

// ---- Standard handlers ----

/// Bullet hits tank: the bullet is spent, the tank dies where it stands.
pub struct BulletTank;

impl CollisionHandler for BulletTank {
    fn handle(&mut self, bullet: Entity, tank: Entity, world: &mut World, _dt: f64) {
        world.remove_entity(bullet);
        world.kill_entity(tank);
        if let Some(velocity) = world.components.velocities.get_mut(tank) {
            velocity.current = 0.0;
        }
    }
}

/// Bullet hits player: the bullet is spent and the player dies.
pub struct BulletPlayer;

impl CollisionHandler for BulletPlayer {
    fn handle(&mut self, bullet: Entity, player: Entity, world: &mut World, _dt: f64) {
        world.remove_entity(bullet);
        world.kill_entity(player);
    }
}

/// A live player rams a tower and destroys it.
pub struct PlayerTower;

impl CollisionHandler for PlayerTower {
    fn handle(&mut self, player: Entity, tower: Entity, world: &mut World, _dt: f64) {
        if world.is_entity_dead(player) {
            return;
        }
        world.kill_entity(tower);
    }
}

/// A live tank runs a player over.
pub struct TankPlayer;

impl CollisionHandler for TankPlayer {
    fn handle(&mut self, tank: Entity, player: Entity, world: &mut World, _dt: f64) {
        if world.is_entity_dead(tank) {
            return;
        }
        world.kill_entity(player);
    }
}

/// Tanks bounce off towers: back up one tick's worth, then turn around.
pub struct TankTower;

impl CollisionHandler for TankTower {
    fn handle(&mut self, tank: Entity, _tower: Entity, world: &mut World, dt: f64) {
        let components = &mut world.components;
        let (Some(position), Some(velocity)) = (
            components.positions.get_mut(tank),
            components.velocities.get(tank),
        ) else {
            return;
        };
        advance(position, -velocity.current, dt);
        position.direction += PI;
    }
}

type PowerUpEffect = dyn FnMut(Entity, &mut World) + Send;

/// Player picks up a speed power-up: the effect is applied to the player and
/// the power-up is consumed.
pub struct PlayerSpeedPowerUp {
    effect: Box<PowerUpEffect>,
}

impl PlayerSpeedPowerUp {
    pub fn new<F>(effect: F) -> Self
    where
        F: FnMut(Entity, &mut World) + Send + 'static,
    {
        Self {
            effect: Box::new(effect),
        }
    }
}

impl Default for PlayerSpeedPowerUp {
    /// Raises the player's max velocity.
    fn default() -> Self {
        Self::new(|player, world| {
            if let Some(velocity) = world.components.velocities.get_mut(player) {
                velocity.max += SPEED_POWER_UP_DELTA;
            }
        })
    }
}

impl CollisionHandler for PlayerSpeedPowerUp {
    fn handle(&mut self, player: Entity, power_up: Entity, world: &mut World, _dt: f64) {
        // Already picked up this tick by someone else.
        if world.is_pending_removal(power_up) {
            return;
        }
        (self.effect)(player, world);
        world.remove_entity(power_up);
        debug!("{player} picked up speed power-up {power_up}");
    }
}
