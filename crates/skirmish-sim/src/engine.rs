//! Simulation engine: the world plus its command queue and tick bookkeeping.
//!
//! `SimulationEngine` owns the world, applies queued commands at the start
//! of each tick, runs the pipeline, and produces `WorldSnapshot`s. It is
//! fully headless, so tests drive it directly.

use std::collections::VecDeque;

use log::{debug, warn};

use skirmish_core::commands::{EngineCommand, PlayerInput};
use skirmish_core::config::SimConfig;
use skirmish_core::state::WorldSnapshot;
use skirmish_core::types::TickStats;

use crate::systems::snapshot::build_snapshot;
use crate::world::World;
use crate::world_setup;

pub struct SimulationEngine {
    world: World,
    stats: TickStats,
    command_queue: VecDeque<EngineCommand>,
}

impl SimulationEngine {
    /// Create an engine with a freshly set-up arena.
    pub fn new(config: &SimConfig) -> Self {
        Self::with_world(world_setup::build_world(config))
    }

    /// Wrap an already assembled world.
    pub fn with_world(world: World) -> Self {
        Self {
            world,
            stats: TickStats::default(),
            command_queue: VecDeque::new(),
        }
    }

    /// Queue a command for the next tick boundary.
    pub fn queue_command(&mut self, command: EngineCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = EngineCommand>) {
        self.command_queue.extend(commands);
    }

    /// Parse a player's JSON input and queue the recognized commands.
    /// Malformed payloads are dropped.
    pub fn queue_player_input(&mut self, handle: &str, json: &str) {
        match PlayerInput::from_json(json) {
            Ok(input) => {
                let commands: Vec<EngineCommand> = input
                    .commands()
                    .map(|command| EngineCommand::Player {
                        handle: handle.to_string(),
                        command,
                    })
                    .collect();
                self.queue_commands(commands);
            }
            Err(err) => debug!("ignoring malformed input from {handle}: {err}"),
        }
    }

    /// Apply queued commands, advance the world by `dt` seconds and return
    /// the resulting snapshot.
    pub fn tick(&mut self, dt: f64) -> WorldSnapshot {
        self.process_commands();
        self.world.update(dt);
        self.stats.record(dt);
        self.snapshot()
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        build_snapshot(&self.world, self.stats)
    }

    pub fn stats(&self) -> TickStats {
        self.stats
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Spawn a player right away and return its handle.
    pub fn spawn_player(&mut self) -> String {
        self.world.spawn_player()
    }

    pub fn pending_commands(&self) -> usize {
        self.command_queue.len()
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: EngineCommand) {
        match command {
            EngineCommand::SpawnPlayer { handle } => {
                self.world.spawn_player_as(&handle);
            }
            EngineCommand::Player { handle, command } => match self.world.player_with_id(&handle) {
                Some(entity) => self.world.apply_player_command(entity, command),
                None => warn!("input for unknown player {handle}"),
            },
            EngineCommand::Kill { handle } => match self.world.player_with_id(&handle) {
                Some(entity) => self.world.kill_entity(entity),
                None => warn!("kill for unknown player {handle}"),
            },
        }
    }
}
