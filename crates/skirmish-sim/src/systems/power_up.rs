//! World-level spawner that drops speed power-ups into the arena.

use log::debug;
use rand::Rng;

use skirmish_bhv::{Blackboard, Node, Status, Tree, WaitState};
use skirmish_core::constants::{
    MAX_SPEED_POWER_UPS, SPEED_POWER_UP_INSET, SPEED_POWER_UP_WAIT_MAX, SPEED_POWER_UP_WAIT_MIN,
};
use skirmish_core::enums::EntityType;

use crate::actors::power_up::spawn_speed_power_up;
use crate::world::World;

/// Waits 5–7 s between drops. While the arena already holds the maximum
/// number of power-ups the drop fails and is retried every tick.
pub struct SpeedPowerUpSpawner {
    tree: Tree<World>,
}

impl SpeedPowerUpSpawner {
    pub fn new() -> Self {
        Self {
            tree: Tree::new(Node::sequence(vec![Node::wait(
                WaitState::uniform(SPEED_POWER_UP_WAIT_MIN, SPEED_POWER_UP_WAIT_MAX),
                Node::action(drop_power_up),
            )])),
        }
    }

    pub fn tree(&self) -> &Tree<World> {
        &self.tree
    }

    pub fn run(&mut self, world: &mut World, dt: f64) {
        self.tree.tick(world, dt);
    }
}

impl Default for SpeedPowerUpSpawner {
    fn default() -> Self {
        Self::new()
    }
}

fn drop_power_up(world: &mut World, _dt: f64) -> Status {
    if world.count_of(EntityType::SpeedPowerUp) >= MAX_SPEED_POWER_UPS {
        return Status::Failure;
    }

    let (width, height) = (world.width(), world.height());
    let x = sample_inset(world, width);
    let y = sample_inset(world, height);
    let entity = spawn_speed_power_up(world, x, y);
    debug!("spawned speed power-up {entity} at ({x:.1}, {y:.1})");
    Status::Success
}

/// Uniform coordinate at least `SPEED_POWER_UP_INSET` away from both edges.
fn sample_inset(world: &mut World, extent: f64) -> f64 {
    let (low, high) = (SPEED_POWER_UP_INSET, extent - SPEED_POWER_UP_INSET);
    if high <= low {
        return extent / 2.0;
    }
    world.rng().gen_range(low..high)
}
