//! Core types and definitions for the SKIRMISH arena simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, entity handles, player commands, snapshots, configuration,
//! geometry helpers, and tuning constants.
//! It has no dependency on the ECS or any runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod geometry;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
