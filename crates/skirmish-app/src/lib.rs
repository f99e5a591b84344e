//! Concurrency shell around the arena simulation.
//!
//! [`game_loop::spawn_game_loop`] starts the tick thread and returns an
//! [`state::ArenaHandle`] through which callers spawn players, send input,
//! take the lock, and poll snapshots.

pub mod game_loop;
pub mod state;

pub use skirmish_core as core;
pub use state::{ArenaHandle, EngineError};
