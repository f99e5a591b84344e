//! Plane geometry and kinematics helpers.
//!
//! Angles are radians; 0 points along +x and angles grow toward +y.

use std::f64::consts::{PI, TAU};

use glam::DVec2;

use crate::components::{BoundingBox, Position};

/// Wrap an angle into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Signed shortest rotation from `current` to `target`, in `(-π, π]`.
pub fn shortest_rotation(current: f64, target: f64) -> f64 {
    let delta = normalize_angle(target - current);
    if delta > PI {
        delta - TAU
    } else {
        delta
    }
}

/// Axis-aligned overlap test. Touching edges do not count.
pub fn collides(p1: &Position, b1: &BoundingBox, p2: &Position, b2: &BoundingBox) -> bool {
    p1.x < p2.x + b2.width
        && p1.x + b1.width > p2.x
        && p1.y < p2.y + b2.height
        && p1.y + b1.height > p2.y
}

/// Heading that points from `from` toward `to`.
pub fn direction_to(from: &Position, to: &Position) -> f64 {
    let delta = to.xy() - from.xy();
    delta.y.atan2(delta.x)
}

pub fn distance(a: &Position, b: &Position) -> f64 {
    a.xy().distance(b.xy())
}

/// Velocity after accelerating by `a` for `dt`, capped at `v_max`.
pub fn accelerate(v: f64, v_max: f64, a: f64, dt: f64) -> f64 {
    v_max.min(v + a * dt)
}

/// Reduce the magnitude of `v` by `amount` without crossing zero.
pub fn decelerate(v: f64, amount: f64) -> f64 {
    if v > 0.0 {
        (v - amount).max(0.0)
    } else if v < 0.0 {
        (v + amount).min(0.0)
    } else {
        0.0
    }
}

/// Advance `position` along its heading at speed `v` for `dt`.
pub fn advance(position: &mut Position, v: f64, dt: f64) {
    let step = DVec2::from_angle(position.direction) * (v * dt);
    position.x += step.x;
    position.y += step.y;
}
