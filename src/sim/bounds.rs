//! Boundary violation detection and resolution
//!
//! The viewport is four half-planes. Each is tested independently every tick,
//! so a corner hit flips both velocity components in the same step. Reflection
//! is perfectly elastic; after a bounce the body's edge is clamped to sit
//! exactly [`WALL_INSET`] inside the wall so the violation cannot re-trigger
//! next tick. A held body that hits a wall is force-released first, committing
//! its drag-estimated velocity before the reflection.

use glam::Vec2;

use crate::consts::WALL_INSET;

use super::state::Body;

/// Resolve any wall penetration for one body. Returns true if a wall was hit.
pub fn resolve_bounds(body: &mut Body, bounds: Vec2) -> bool {
    let r = body.radius;
    let mut hit = false;

    if body.pos.x - r <= 0.0 {
        release_if_held(body);
        body.vel.x = -body.vel.x;
        body.pos.x = r + WALL_INSET;
        hit = true;
    }
    if body.pos.x + r >= bounds.x {
        release_if_held(body);
        body.vel.x = -body.vel.x;
        body.pos.x = bounds.x - r - WALL_INSET;
        hit = true;
    }
    if body.pos.y - r <= 0.0 {
        release_if_held(body);
        body.vel.y = -body.vel.y;
        body.pos.y = r + WALL_INSET;
        hit = true;
    }
    if body.pos.y + r >= bounds.y {
        release_if_held(body);
        body.vel.y = -body.vel.y;
        body.pos.y = bounds.y - r - WALL_INSET;
        hit = true;
    }

    hit
}

fn release_if_held(body: &mut Body) {
    if body.is_held() {
        body.stop_drag();
    }
}
