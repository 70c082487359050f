//! Write-only projection onto a 2D drawing surface
//!
//! The simulation is the source of truth; the surface is only ever written.
//! A concrete surface (DOM, canvas, GPU - whatever hosts the toy) implements
//! [`RenderSurface`]; [`sync`] pushes every body's current state to it after
//! each tick, allocating a drawable the first time a body is seen.

use crate::sim::state::{Color, SimState};

/// Opaque reference to a drawable circle owned by the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircleHandle(pub u32);

/// A generic 2D drawing target exposing circle primitives
pub trait RenderSurface {
    /// Allocate a new drawable circle
    fn create_circle(&mut self) -> CircleHandle;
    /// Move a circle's center
    fn set_center(&mut self, handle: CircleHandle, x: f32, y: f32);
    /// Resize a circle
    fn set_radius(&mut self, handle: CircleHandle, radius: f32);
    /// Set a circle's fill color
    fn set_fill(&mut self, handle: CircleHandle, color: Color);
    /// Toggle the selection outline
    fn set_highlight(&mut self, handle: CircleHandle, on: bool);
}

/// Push every body's (center, radius, color, highlighted) tuple to the surface
pub fn sync(state: &mut SimState, surface: &mut dyn RenderSurface) {
    let selected = state.selected;
    for (index, body) in state.bodies.iter_mut().enumerate() {
        let handle = *body.handle.get_or_insert_with(|| surface.create_circle());
        surface.set_center(handle, body.pos.x, body.pos.y);
        surface.set_radius(handle, body.radius);
        surface.set_fill(handle, body.color);
        surface.set_highlight(handle, selected == Some(index));
    }
}

/// Surface that draws nothing; used for headless runs and tests
#[derive(Debug, Default)]
pub struct NullSurface {
    next: u32,
}

impl RenderSurface for NullSurface {
    fn create_circle(&mut self) -> CircleHandle {
        let handle = CircleHandle(self.next);
        self.next += 1;
        handle
    }

    fn set_center(&mut self, _handle: CircleHandle, _x: f32, _y: f32) {}
    fn set_radius(&mut self, _handle: CircleHandle, _radius: f32) {}
    fn set_fill(&mut self, _handle: CircleHandle, _color: Color) {}
    fn set_highlight(&mut self, _handle: CircleHandle, _on: bool) {}
}
