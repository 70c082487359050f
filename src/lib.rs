//! Ballpit - draggable bouncing balls in a viewport
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, drag state machine, boundaries)
//! - `frame`: Fixed-cadence frame loop driving the simulation
//! - `render`: Write-only projection onto a 2D drawing surface
//! - `settings`: Data-driven configuration

pub mod frame;
pub mod render;
pub mod settings;
pub mod sim;

pub use frame::FrameLoop;
pub use settings::Settings;

/// Simulation tuning constants
pub mod consts {
    /// Fixed tick interval in milliseconds (40 Hz)
    pub const TICK_INTERVAL_MS: u64 = 25;

    /// Default viewport dimensions (pixels, origin top-left, y increases down)
    pub const VIEW_WIDTH: f32 = 800.0;
    pub const VIEW_HEIGHT: f32 = 600.0;

    /// Gravity acceleration, pixels/tick² (straight down)
    pub const GRAVITY_PER_TICK: f32 = 1.0;
    /// Quadratic drag coefficient (scaled by body diameter)
    pub const DRAG_COEFF: f32 = 0.0002;

    /// Bodies are clamped this far inside a wall after a bounce
    pub const WALL_INSET: f32 = 1.0;

    /// Default radius for newly created bodies
    pub const DEFAULT_RADIUS: f32 = 20.0;

    /// Randomize effect ranges
    pub const RANDOM_RADIUS_MIN: f32 = 5.0;
    pub const RANDOM_RADIUS_MAX: f32 = 150.0;
    pub const RANDOM_SPEED_MAX: f32 = 50.0;
}
