//! Game loop thread: advances the arena at a fixed nominal rate and publishes
//! a snapshot after every tick.
//!
//! The loop feeds the engine the wall-clock delta it actually measured, so a
//! late tick simulates more time rather than slowing the game down.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use log::{debug, error, info};

use skirmish_core::config::SimConfig;
use skirmish_core::state::WorldSnapshot;
use skirmish_sim::SimulationEngine;

use crate::state::{ArenaHandle, EngineError, GameLoopCommand};

/// Build an arena from `config` and start ticking it on its own thread.
pub fn spawn_game_loop(config: &SimConfig) -> Result<ArenaHandle, EngineError> {
    let engine = Arc::new(Mutex::new(SimulationEngine::new(config)));
    let latest_snapshot = Arc::new(Mutex::new(None));
    let (command_tx, command_rx) = mpsc::channel::<GameLoopCommand>();
    let period = config.tick_period();

    let thread = {
        let engine = Arc::clone(&engine);
        let latest_snapshot = Arc::clone(&latest_snapshot);
        std::thread::Builder::new()
            .name("skirmish-game-loop".into())
            .spawn(move || run_game_loop(&engine, &command_rx, &latest_snapshot, period))
            .map_err(EngineError::Spawn)?
    };
    info!(
        "game loop started: {}x{} arena, seed {}, {period:?} period",
        config.width, config.height, config.seed
    );

    Ok(ArenaHandle {
        engine,
        latest_snapshot,
        command_tx,
        thread: Some(thread),
    })
}

/// Runs until a Shutdown command, channel disconnect, or poisoned lock.
fn run_game_loop(
    engine: &Mutex<SimulationEngine>,
    command_rx: &mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<WorldSnapshot>>,
    period: Duration,
) {
    let mut last_tick = Instant::now();
    let mut next_tick_time = last_tick + period;
    sleep_until(next_tick_time);

    loop {
        let Ok(mut engine) = engine.lock() else {
            error!("simulation lock poisoned, stopping game loop");
            return;
        };

        // 1. Drain pending commands into the engine's queue
        loop {
            match command_rx.try_recv() {
                Ok(GameLoopCommand::Engine(command)) => engine.queue_command(command),
                Ok(GameLoopCommand::Shutdown) => {
                    debug!("shutdown requested");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    debug!("all handles dropped");
                    return;
                }
            }
        }

        // 2. Advance by the measured delta, holding the lock for the whole update
        let now = Instant::now();
        let dt = now.duration_since(last_tick).as_secs_f64();
        last_tick = now;
        let snapshot = engine.tick(dt);
        drop(engine);

        // 3. Publish for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next tick
        next_tick_time += period;
        let now = Instant::now();
        if next_tick_time > now {
            sleep_until(next_tick_time);
        } else if now - next_tick_time > period * 2 {
            // Too far behind, reset rather than spiral
            debug!("game loop behind schedule by {:?}", now - next_tick_time);
            next_tick_time = now;
        }
    }
}

fn sleep_until(deadline: Instant) {
    let now = Instant::now();
    if deadline > now {
        std::thread::sleep(deadline - now);
    }
}
