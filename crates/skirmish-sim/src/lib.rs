//! Simulation engine for SKIRMISH.
//!
//! Owns the entity-component world, runs its system pipeline once per tick,
//! and produces `WorldSnapshot`s for readers.

pub mod actors;
pub mod ecs;
pub mod engine;
pub mod systems;
pub mod world;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use skirmish_core as core;
pub use world::World;
