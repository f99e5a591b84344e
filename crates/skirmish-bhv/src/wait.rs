//! Wait decorator: gates its child behind a countdown.

use crate::node::{Blackboard, Node, Status};
use crate::sample::Sample;

/// Countdown state for a `Node::Wait`.
///
/// The first countdown is armed lazily on the first tick, from the initial
/// wait if one was given and from `duration` otherwise. Every child success
/// re-arms it from `duration`.
#[derive(Debug, Clone, PartialEq)]
pub struct WaitState {
    pub duration: Sample<f64>,
    /// Status reported while the countdown is running.
    pub waiting_status: Status,
    initial_wait: Option<f64>,
    remaining: Option<f64>,
}

impl WaitState {
    pub fn new(duration: Sample<f64>) -> Self {
        Self {
            duration,
            waiting_status: Status::Running,
            initial_wait: None,
            remaining: None,
        }
    }

    pub fn fixed(secs: f64) -> Self {
        Self::new(Sample::Fixed(secs))
    }

    pub fn uniform(min_secs: f64, max_secs: f64) -> Self {
        Self::new(Sample::Uniform(min_secs, max_secs))
    }

    pub fn with_initial_wait(mut self, secs: f64) -> Self {
        self.initial_wait = Some(secs);
        self
    }

    pub fn with_waiting_status(mut self, status: Status) -> Self {
        self.waiting_status = status;
        self
    }

    /// Seconds left on the countdown; `None` before the first tick.
    pub fn remaining(&self) -> Option<f64> {
        self.remaining
    }

    pub(crate) fn tick<C: Blackboard>(&mut self, child: &mut Node<C>, ctx: &mut C, dt: f64) -> Status {
        let armed = match self.remaining {
            Some(remaining) => remaining,
            None => match self.initial_wait {
                Some(secs) => secs,
                None => self.duration.draw(ctx.rng()),
            },
        };

        let remaining = (armed - dt).max(0.0);
        self.remaining = Some(remaining);
        if remaining > 0.0 {
            return self.waiting_status;
        }

        // Expired: the countdown stays at zero until the child succeeds.
        let status = child.tick(ctx, dt);
        if status != Status::Success {
            return status;
        }

        self.remaining = Some(self.duration.draw(ctx.rng()));
        Status::Success
    }
}
