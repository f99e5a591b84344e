//! Burst decorator: fires its child a batch of times, spaced by an interval.

use crate::node::{Blackboard, Node, Status};
use crate::sample::Sample;

/// Counter state for a `Node::Burst`.
///
/// When idle, a tick picks the batch size, arms the first interval and
/// succeeds straight away without touching the child, so the parent can move
/// on (for example to an aiming gate). Later ticks count the interval down
/// and fire the child once each time it runs out.
#[derive(Debug, Clone, PartialEq)]
pub struct BurstState {
    pub size: Sample<u32>,
    pub interval: f64,
    remaining: u32,
    time_to_next: f64,
}

impl BurstState {
    pub fn new(size: Sample<u32>, interval: f64) -> Self {
        Self {
            size,
            interval,
            remaining: 0,
            time_to_next: 0.0,
        }
    }

    /// Shots left in the current batch. Zero means idle.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_idle(&self) -> bool {
        self.remaining == 0
    }

    pub(crate) fn tick<C: Blackboard>(&mut self, child: &mut Node<C>, ctx: &mut C, dt: f64) -> Status {
        if self.remaining == 0 {
            self.remaining = self.size.draw(ctx.rng());
            self.time_to_next = self.interval;
            return Status::Success;
        }

        self.time_to_next = (self.time_to_next - dt).max(0.0);
        if self.time_to_next > 0.0 {
            return Status::Running;
        }

        self.remaining -= 1;
        self.time_to_next = self.interval;
        match child.tick(ctx, dt) {
            Status::Success => Status::Running,
            other => other,
        }
    }
}
