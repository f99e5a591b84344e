//! Handle shared between the game loop thread and its callers.

use std::sync::mpsc;
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::JoinHandle;

use log::info;
use thiserror::Error;

use skirmish_core::commands::{EngineCommand, PlayerInput};
use skirmish_core::state::WorldSnapshot;
use skirmish_sim::SimulationEngine;

/// Commands sent from callers to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// Forwarded to the engine's queue, applied at the next tick boundary.
    Engine(EngineCommand),
    /// Stop the loop after the current tick.
    Shutdown,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unable to start the game loop thread: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("simulation lock poisoned by a panicking thread")]
    Poisoned,
    #[error("game loop is no longer running")]
    Disconnected,
}

/// Entry point for everything outside the tick thread.
///
/// Most calls go through the command channel and never touch the world
/// directly. [`ArenaHandle::lock`] gives exclusive access for reads that
/// span several components; the tick thread holds the same lock for one
/// whole update.
pub struct ArenaHandle {
    pub(crate) engine: Arc<Mutex<SimulationEngine>>,
    pub(crate) latest_snapshot: Arc<Mutex<Option<WorldSnapshot>>>,
    pub(crate) command_tx: mpsc::Sender<GameLoopCommand>,
    pub(crate) thread: Option<JoinHandle<()>>,
}

impl ArenaHandle {
    /// Exclusive access to the engine. Dropping the guard unlocks.
    pub fn lock(&self) -> Result<MutexGuard<'_, SimulationEngine>, EngineError> {
        self.engine.lock().map_err(|_| EngineError::Poisoned)
    }

    /// Spawn a player right away and return its external handle.
    pub fn spawn_player(&self) -> Result<String, EngineError> {
        Ok(self.lock()?.spawn_player())
    }

    pub fn send(&self, command: EngineCommand) -> Result<(), EngineError> {
        self.command_tx
            .send(GameLoopCommand::Engine(command))
            .map_err(|_| EngineError::Disconnected)
    }

    /// Queue a player's JSON input. Malformed payloads and unknown verbs
    /// are dropped without error.
    pub fn send_input(&self, handle: &str, json: &str) -> Result<(), EngineError> {
        let Ok(input) = PlayerInput::from_json(json) else {
            return Ok(());
        };
        for command in input.commands() {
            self.send(EngineCommand::Player {
                handle: handle.to_string(),
                command,
            })?;
        }
        Ok(())
    }

    pub fn kill(&self, handle: &str) -> Result<(), EngineError> {
        self.send(EngineCommand::Kill {
            handle: handle.to_string(),
        })
    }

    /// Snapshot published after the most recent tick, if any tick has run.
    pub fn latest_snapshot(&self) -> Result<Option<WorldSnapshot>, EngineError> {
        self.latest_snapshot
            .lock()
            .map(|snapshot| snapshot.clone())
            .map_err(|_| EngineError::Poisoned)
    }

    pub fn is_running(&self) -> bool {
        self.thread
            .as_ref()
            .is_some_and(|thread| !thread.is_finished())
    }

    /// Stop the loop and wait for its thread to exit.
    pub fn shutdown(mut self) -> Result<(), EngineError> {
        // A loop that already exited has dropped its receiver; nothing to stop.
        let _ = self.command_tx.send(GameLoopCommand::Shutdown);
        if let Some(thread) = self.thread.take() {
            thread.join().map_err(|_| EngineError::Poisoned)?;
        }
        info!("game loop stopped");
        Ok(())
    }
}
