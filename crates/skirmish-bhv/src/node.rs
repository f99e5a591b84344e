//! Node types and the uniform tick operation.

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::burst::BurstState;
use crate::wait::WaitState;

/// Result of ticking a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Running,
    Success,
    Failure,
}

/// What a tree needs from the context it runs against.
pub trait Blackboard {
    /// Source of randomness for sampled durations and counts.
    fn rng(&mut self) -> &mut dyn RngCore;
}

/// Extension point for nodes that need context-specific state, such as a
/// decorator that coordinates with a steering component.
pub trait Behavior<C>: Send {
    fn tick(&mut self, ctx: &mut C, dt: f64) -> Status;
}

type ActionFn<C> = dyn FnMut(&mut C, f64) -> Status + Send;

pub enum Node<C> {
    /// Succeeds only if every child succeeds in one pass.
    Sequence(Vec<Node<C>>),
    /// Fails only if every child fails.
    Selector(Vec<Node<C>>),
    /// Gates the child behind a countdown.
    Wait(WaitState, Box<Node<C>>),
    /// Fires the child a batch of times, spaced by an interval.
    Burst(BurstState, Box<Node<C>>),
    /// Lets the child succeed at most `remaining` more times.
    Limit { remaining: u32, child: Box<Node<C>> },
    /// Leaf running a closure over the context.
    Action(Box<ActionFn<C>>),
    Custom(Box<dyn Behavior<C>>),
}

impl<C: Blackboard> Node<C> {
    pub fn tick(&mut self, ctx: &mut C, dt: f64) -> Status {
        match self {
            Node::Sequence(children) => {
                for child in children.iter_mut() {
                    match child.tick(ctx, dt) {
                        Status::Success => continue,
                        other => return other,
                    }
                }
                Status::Success
            }
            Node::Selector(children) => {
                for child in children.iter_mut() {
                    match child.tick(ctx, dt) {
                        Status::Failure => continue,
                        other => return other,
                    }
                }
                Status::Failure
            }
            Node::Wait(state, child) => state.tick(child, ctx, dt),
            Node::Burst(state, child) => state.tick(child, ctx, dt),
            Node::Limit { remaining, child } => {
                if *remaining == 0 {
                    return Status::Failure;
                }
                let status = child.tick(ctx, dt);
                if status == Status::Success {
                    *remaining -= 1;
                }
                status
            }
            Node::Action(action) => action(ctx, dt),
            Node::Custom(behavior) => behavior.tick(ctx, dt),
        }
    }
}

impl<C> Node<C> {
    pub fn sequence(children: Vec<Node<C>>) -> Self {
        Node::Sequence(children)
    }

    pub fn selector(children: Vec<Node<C>>) -> Self {
        Node::Selector(children)
    }

    pub fn wait(state: WaitState, child: Node<C>) -> Self {
        Node::Wait(state, Box::new(child))
    }

    pub fn burst(state: BurstState, child: Node<C>) -> Self {
        Node::Burst(state, Box::new(child))
    }

    pub fn limit(times: u32, child: Node<C>) -> Self {
        Node::Limit {
            remaining: times,
            child: Box::new(child),
        }
    }

    pub fn action<F>(f: F) -> Self
    where
        F: FnMut(&mut C, f64) -> Status + Send + 'static,
    {
        Node::Action(Box::new(f))
    }

    pub fn custom<B>(behavior: B) -> Self
    where
        B: Behavior<C> + 'static,
    {
        Node::Custom(Box::new(behavior))
    }

    /// Leaf that always returns `status`.
    pub fn constant(status: Status) -> Self
    where
        C: 'static,
    {
        Node::action(move |_: &mut C, _| status)
    }
}

impl<C> std::fmt::Debug for Node<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Sequence(children) => f.debug_tuple("Sequence").field(children).finish(),
            Node::Selector(children) => f.debug_tuple("Selector").field(children).finish(),
            Node::Wait(state, child) => f.debug_tuple("Wait").field(state).field(child).finish(),
            Node::Burst(state, child) => f.debug_tuple("Burst").field(state).field(child).finish(),
            Node::Limit { remaining, child } => f
                .debug_struct("Limit")
                .field("remaining", remaining)
                .field("child", child)
                .finish(),
            Node::Action(_) => f.write_str("Action"),
            Node::Custom(_) => f.write_str("Custom"),
        }
    }
}

/// A root node plus the status it returned on its latest tick.
pub struct Tree<C> {
    root: Node<C>,
    last_status: Option<Status>,
}

impl<C: Blackboard> Tree<C> {
    pub fn new(root: Node<C>) -> Self {
        Self {
            root,
            last_status: None,
        }
    }

    pub fn tick(&mut self, ctx: &mut C, dt: f64) -> Status {
        let status = self.root.tick(ctx, dt);
        self.last_status = Some(status);
        status
    }

    pub fn last_status(&self) -> Option<Status> {
        self.last_status
    }

    pub fn root(&self) -> &Node<C> {
        &self.root
    }
}

impl<C> std::fmt::Debug for Tree<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tree")
            .field("root", &self.root)
            .field("last_status", &self.last_status)
            .finish()
    }
}
