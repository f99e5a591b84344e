//! Behavior trees for SKIRMISH actors.
//!
//! A tree is a `Node<C>` ticked once per simulation step against a context
//! `C`. Decorator state (countdowns, burst counters) lives in explicit state
//! structs inside the nodes, so it survives between ticks and can be
//! inspected. No ECS dependency: the context type is supplied by the caller.

pub mod burst;
pub mod node;
pub mod sample;
pub mod wait;

pub use burst::BurstState;
pub use node::{Behavior, Blackboard, Node, Status, Tree};
pub use sample::Sample;
pub use wait::WaitState;
