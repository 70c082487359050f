//! The fixed-step simulation tick
//!
//! One call advances the whole state by one tick, in a fixed phase order:
//! forces on free bodies, position integration for every body, pointer-follow
//! for held bodies (which overrides the integration just done), boundary
//! resolution, tick counter. Rendering happens outside, after the tick.

use super::bounds::resolve_bounds;
use super::forces::{apply_gravity, apply_resistance, integrate};
use super::state::SimState;

/// Advance the simulation by one fixed timestep
pub fn tick(state: &mut SimState) {
    // Forces act on free bodies only; held bodies are pointer-driven
    for body in &mut state.bodies {
        if body.is_held() {
            continue;
        }
        if state.gravity_enabled {
            apply_gravity(body);
        }
        if state.resistance_enabled {
            apply_resistance(body);
        }
    }

    // Integrate every body; held bodies get overridden just below
    for body in &mut state.bodies {
        integrate(body);
    }

    // Held bodies track the pointer and refresh their velocity estimate
    let pointer = state.pointer;
    for body in &mut state.bodies {
        if body.is_held() {
            body.follow_pointer(pointer);
            body.update_drag(pointer);
        }
    }

    for body in &mut state.bodies {
        if resolve_bounds(body, state.bounds) {
            log::debug!("body {} bounced at ({}, {})", body.id, body.pos.x, body.pos.y);
        }
    }

    state.time_ticks += 1;
}
