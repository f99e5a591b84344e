//! Systems run by `World::update`, one pass each per tick.
//!
//! Most systems are free `run` functions over the world and the entity list
//! captured for their pass. The two that carry state (the collision handler
//! table and the power-up spawner's tree) own it inside their variant.

pub mod auto_move;
pub mod behavior;
pub mod collision;
pub mod health;
pub mod movement;
pub mod power_up;
pub mod sensing;
pub mod snapshot;

use skirmish_core::types::Entity;

use crate::world::World;
use collision::CollisionDetectionSystem;
use power_up::SpeedPowerUpSpawner;

/// A registered pipeline stage.
pub enum System {
    AutoMove,
    Movement,
    CollisionDetection(CollisionDetectionSystem),
    Health,
    Sensing,
    SpeedPowerUp(SpeedPowerUpSpawner),
    Behavior,
}

impl System {
    pub fn run(&mut self, world: &mut World, entities: &[Entity], dt: f64) {
        match self {
            System::AutoMove => auto_move::run(world, entities),
            System::Movement => movement::run(world, entities, dt),
            System::CollisionDetection(detection) => detection.run(world, entities, dt),
            System::Health => health::run(world, entities, dt),
            System::Sensing => sensing::run(world, entities),
            System::SpeedPowerUp(spawner) => spawner.run(world, dt),
            System::Behavior => behavior::run(world, entities, dt),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            System::AutoMove => "auto_move",
            System::Movement => "movement",
            System::CollisionDetection(_) => "collision_detection",
            System::Health => "health",
            System::Sensing => "sensing",
            System::SpeedPowerUp(_) => "speed_power_up",
            System::Behavior => "behavior",
        }
    }
}

impl std::fmt::Debug for System {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
