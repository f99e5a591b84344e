//! Builds a ready-to-run arena from a `SimConfig`.
//!
//! Registers the system pipeline in its fixed order, wires the standard
//! collision handlers, and places the initial towers and shelters on a
//! coarse grid.

use std::f64::consts::TAU;

use log::info;
use rand::Rng;

use skirmish_bhv::Blackboard;
use skirmish_core::config::SimConfig;
use skirmish_core::constants::RASTER_CELL;

use crate::actors::raster::raster_points;
use crate::actors::shelter::spawn_tank_shelter;
use crate::actors::tower::spawn_tower;
use crate::systems::collision::CollisionDetectionSystem;
use crate::systems::power_up::SpeedPowerUpSpawner;
use crate::systems::System;
use crate::world::World;

/// A world with the full pipeline and initial structures in place.
pub fn build_world(config: &SimConfig) -> World {
    let mut world = World::new(config.width, config.height, config.seed);
    register_systems(&mut world, CollisionDetectionSystem::with_default_handlers());
    place_structures(&mut world, config.initial_towers, config.initial_shelters);
    world
}

/// Register the pipeline: AutoMove, Movement, CollisionDetection, Health,
/// Sensing, SpeedPowerUp spawner, Behavior.
pub fn register_systems(world: &mut World, collisions: CollisionDetectionSystem) {
    world.add_system(System::AutoMove);
    world.add_system(System::Movement);
    world.add_system(System::CollisionDetection(collisions));
    world.add_system(System::Health);
    world.add_system(System::Sensing);
    world.add_system(System::SpeedPowerUp(SpeedPowerUpSpawner::new()));
    world.add_system(System::Behavior);
}

/// Raster-place `towers` towers, then `shelters` shelters, each in its own
/// grid cell. Shelters face a random heading.
pub fn place_structures(world: &mut World, towers: usize, shelters: usize) {
    let (width, height) = (world.width(), world.height());
    let points = raster_points(world.rng(), width, height, RASTER_CELL, towers + shelters);
    let (tower_points, shelter_points) = points.split_at(towers.min(points.len()));

    for point in tower_points {
        spawn_tower(world, point.x, point.y);
    }
    for point in shelter_points {
        let direction = world.rng().gen_range(0.0..TAU);
        spawn_tank_shelter(world, point.x, point.y, direction);
    }

    info!(
        "placed {} towers and {} shelters in a {width}x{height} arena",
        tower_points.len(),
        shelter_points.len()
    );
}
