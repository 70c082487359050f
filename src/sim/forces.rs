//! Gravity, drag resistance, and position integration
//!
//! Explicit Euler at a fixed tick. The resistance model is deliberately
//! simplified: a quadratic-drag deceleration rounded to whole pixel units per
//! component, with an overshoot clamp that snaps a component to zero rather
//! than letting a large discrete step flip its sign. The rounding plus the
//! clamp is what keeps the fixed-step integrator stable without sub-stepping.

use crate::consts::{DRAG_COEFF, GRAVITY_PER_TICK};

use super::state::Body;

/// Accelerate the body downward by one tick of gravity
pub fn apply_gravity(body: &mut Body) {
    body.vel.y += GRAVITY_PER_TICK;
}

/// Decelerate the body by one tick of quadratic drag
pub fn apply_resistance(body: &mut Body) {
    let speed = body.vel.length();
    let scale = speed * DRAG_COEFF * body.diameter();
    body.vel.x = decelerate(body.vel.x, (scale * body.vel.x).round());
    body.vel.y = decelerate(body.vel.y, (scale * body.vel.y).round());
}

/// Subtract `accel` from `vel`, snapping to zero instead of overshooting
/// past it.
fn decelerate(vel: f32, accel: f32) -> f32 {
    if accel.abs() > vel.abs() { 0.0 } else { vel - accel }
}

/// Advance the body's position by one tick of its velocity
pub fn integrate(body: &mut Body) {
    body.pos += body.vel;
}
