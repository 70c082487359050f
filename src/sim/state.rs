//! Body state and the simulation context
//!
//! Everything mutable for one session lives in [`SimState`]: the body
//! registry, the shared pointer position, the feature toggles, and the seeded
//! RNG. There are no globals; the frame loop owns one `SimState` and threads
//! it through every tick.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::render::CircleHandle;

/// An RGB fill color, one byte per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS-style `rgb(r,g,b)` string for the render surface
    pub fn to_css(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Fill colors for newly created bodies, cycled by entity id
const BODY_PALETTE: [Color; 6] = [
    Color::new(100, 150, 255),
    Color::new(255, 180, 100),
    Color::new(100, 255, 100),
    Color::new(255, 100, 100),
    Color::new(200, 120, 255),
    Color::new(120, 220, 220),
];

/// Per-body drag bookkeeping, alive only while the body is held
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Pointer-to-center offset captured at drag start
    pub offset: Vec2,
    /// Pointer position seen at the previous tick
    pub last_pointer: Vec2,
    /// One-tick finite-difference velocity estimate
    pub estimated_vel: Vec2,
}

/// A simulated disk
#[derive(Debug, Clone)]
pub struct Body {
    pub id: u32,
    /// Center, viewport pixel coordinates (origin top-left, y down)
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
    /// `Some` while held by the pointer, `None` while free
    pub drag: Option<DragState>,
    /// Drawable allocated by the render surface; never read back
    pub(crate) handle: Option<CircleHandle>,
}

impl Body {
    pub fn new(id: u32, pos: Vec2, radius: f32, color: Color) -> Self {
        debug_assert!(radius > 0.0, "body radius must be positive");
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
            radius,
            color,
            drag: None,
            handle: None,
        }
    }

    /// Whether the body is currently held by the pointer
    pub fn is_held(&self) -> bool {
        self.drag.is_some()
    }

    pub fn diameter(&self) -> f32 {
        2.0 * self.radius
    }
}

/// The complete simulation context for one session
#[derive(Debug)]
pub struct SimState {
    /// Viewport dimensions (width, height)
    pub bounds: Vec2,
    /// Apply gravity to free bodies each tick
    pub gravity_enabled: bool,
    /// Apply drag resistance to free bodies each tick
    pub resistance_enabled: bool,
    /// Latest pointer position; pointer-move is last-write-wins between ticks
    pub pointer: Vec2,
    /// Body registry, append-only
    pub bodies: Vec<Body>,
    /// Index of the body the size control operates on
    pub selected: Option<usize>,
    /// Tick counter
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl SimState {
    /// Create an empty simulation for the given viewport
    pub fn new(seed: u64, bounds: Vec2) -> Self {
        Self {
            bounds,
            gravity_enabled: true,
            resistance_enabled: true,
            pointer: Vec2::ZERO,
            bodies: Vec::new(),
            selected: None,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub(crate) fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append a new free body with zero velocity and mark it selected.
    /// Returns the body's registry index.
    pub fn add_body(&mut self, x: f32, y: f32, radius: f32) -> usize {
        debug_assert!(radius > 0.0, "body radius must be positive");
        let id = self.next_entity_id();
        let color = BODY_PALETTE[(id as usize - 1) % BODY_PALETTE.len()];
        self.bodies.push(Body::new(id, Vec2::new(x, y), radius, color));
        let index = self.bodies.len() - 1;
        self.selected = Some(index);
        log::info!("body {} added at ({}, {}) r={}", id, x, y, radius);
        index
    }

    /// Select the body the external size control operates on.
    ///
    /// Out-of-range indices are a caller contract violation: debug-asserted,
    /// warned and ignored in release.
    pub fn select_body(&mut self, index: usize) {
        debug_assert!(index < self.bodies.len(), "select_body index out of range");
        if index >= self.bodies.len() {
            log::warn!("select_body({index}) ignored: only {} bodies", self.bodies.len());
            return;
        }
        self.selected = Some(index);
    }

    /// Current radius of the selected body, read by the size control
    pub fn selected_radius(&self) -> Option<f32> {
        self.selected.map(|i| self.bodies[i].radius)
    }

    /// Radius command from the size control; applies to the selected body.
    /// Non-positive values are rejected to keep `radius > 0`.
    pub fn set_selected_radius(&mut self, radius: f32) {
        if !(radius > 0.0) {
            log::warn!("rejected radius {radius}: must be positive");
            return;
        }
        if let Some(i) = self.selected {
            self.bodies[i].radius = radius;
        }
    }

    /// Whether the body at `index` carries the selection highlight
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.selected == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_body_selects_and_is_free() {
        let mut state = SimState::new(1, Vec2::new(800.0, 600.0));
        let i = state.add_body(400.0, 300.0, 20.0);
        assert_eq!(i, 0);
        assert_eq!(state.selected, Some(0));
        assert_eq!(state.bodies[0].vel, Vec2::ZERO);
        assert!(!state.bodies[0].is_held());

        let j = state.add_body(100.0, 100.0, 30.0);
        assert_eq!(j, 1);
        assert_eq!(state.selected, Some(1));
        assert_eq!(state.bodies.len(), 2);
    }

    #[test]
    fn test_select_body_idempotent() {
        let mut state = SimState::new(1, Vec2::new(800.0, 600.0));
        state.add_body(100.0, 100.0, 10.0);
        state.add_body(200.0, 200.0, 25.0);

        state.select_body(0);
        let first = state.selected_radius();
        state.select_body(0);
        assert_eq!(state.selected_radius(), first);
        assert_eq!(first, Some(10.0));

        // Exactly one body highlighted
        let highlighted = (0..state.bodies.len())
            .filter(|&i| state.is_highlighted(i))
            .count();
        assert_eq!(highlighted, 1);
        assert!(state.is_highlighted(0));
        assert!(!state.is_highlighted(1));
    }

    #[test]
    fn test_set_selected_radius_rejects_non_positive() {
        let mut state = SimState::new(1, Vec2::new(800.0, 600.0));
        state.add_body(100.0, 100.0, 10.0);

        state.set_selected_radius(0.0);
        assert_eq!(state.selected_radius(), Some(10.0));
        state.set_selected_radius(-5.0);
        assert_eq!(state.selected_radius(), Some(10.0));
        state.set_selected_radius(42.0);
        assert_eq!(state.selected_radius(), Some(42.0));
    }

    #[test]
    fn test_color_to_css() {
        assert_eq!(Color::new(1, 2, 3).to_css(), "rgb(1,2,3)");
    }
}
