//! The randomize ("chaos") effect
//!
//! Resamples every body's color, position, radius, and velocity from the
//! state's seeded RNG. Repeated activations just keep resampling. Velocity
//! components are drawn non-negative, so a chaos burst always flings bodies
//! down-right until the walls scatter them.

use glam::Vec2;
use rand::Rng;

use crate::consts::{RANDOM_RADIUS_MAX, RANDOM_RADIUS_MIN, RANDOM_SPEED_MAX};

use super::state::{Color, SimState};

/// Reassign random attributes to every body
pub fn randomize(state: &mut SimState) {
    let bounds = state.bounds;
    for body in &mut state.bodies {
        body.color = Color::new(
            state.rng.random::<u8>(),
            state.rng.random::<u8>(),
            state.rng.random::<u8>(),
        );
        body.pos = Vec2::new(
            state.rng.random_range(0.0..bounds.x),
            state.rng.random_range(0.0..bounds.y),
        );
        body.radius = state.rng.random_range(RANDOM_RADIUS_MIN..=RANDOM_RADIUS_MAX);
        body.vel = Vec2::new(
            state.rng.random_range(0.0..=RANDOM_SPEED_MAX),
            state.rng.random_range(0.0..=RANDOM_SPEED_MAX),
        );
    }
    log::info!("randomized {} bodies", state.bodies.len());
}
