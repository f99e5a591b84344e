//! Player input sent by the request-handling layer.
//!
//! Input arrives as `{"commands":[{"m":"setVelocity","v":0.5}, ...]}`.
//! Verbs the simulation does not know are dropped, not rejected.

use serde::{Deserialize, Serialize};

/// One entry of a player input payload, exactly as it arrived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCommand {
    pub m: String,
    #[serde(default)]
    pub v: f64,
}

/// A batch of player input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerInput {
    #[serde(default)]
    pub commands: Vec<RawCommand>,
}

impl PlayerInput {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The recognized commands, in arrival order. A respawn ends the batch:
    /// anything after it is dropped.
    pub fn commands(&self) -> impl Iterator<Item = PlayerCommand> + '_ {
        let mut respawned = false;
        self.commands
            .iter()
            .filter_map(|raw| PlayerCommand::parse(&raw.m, raw.v))
            .take_while(move |command| {
                let take = !respawned;
                respawned |= *command == PlayerCommand::Respawn;
                take
            })
    }
}

/// A recognized player action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Set current speed as a fraction of the player's max velocity.
    SetVelocity { fraction: f64 },
    /// Set the heading directly (radians).
    SetRotation { direction: f64 },
    /// Give up: the player dies and decays, after which a new one may spawn.
    Respawn,
}

impl PlayerCommand {
    pub fn parse(verb: &str, value: f64) -> Option<Self> {
        match verb {
            "setVelocity" => Some(PlayerCommand::SetVelocity { fraction: value }),
            "setRotation" => Some(PlayerCommand::SetRotation { direction: value }),
            "respawn" => Some(PlayerCommand::Respawn),
            _ => None,
        }
    }
}

/// Work queued for the simulation thread, applied at the start of the next
/// tick. Players are addressed by their external handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EngineCommand {
    /// Spawn a player registered under `handle`.
    SpawnPlayer { handle: String },
    /// Apply one recognized input command to the player behind `handle`.
    Player {
        handle: String,
        command: PlayerCommand,
    },
    /// Mark the player behind `handle` dead.
    Kill { handle: String },
}
