//! Fixed-cadence frame loop
//!
//! Owns the simulation context and the render surface for one session. Each
//! step is one simulation tick followed by a render sync; [`FrameLoop::run`]
//! drives steps at the configured wall-clock interval for the lifetime of the
//! process. There is no frame skipping: a tick that overruns its interval just
//! delays the next one.

use std::thread;
use std::time::{Duration, Instant};

use glam::Vec2;

use crate::render::{RenderSurface, sync};
use crate::settings::Settings;
use crate::sim::{InputEvent, SimState, tick};

/// The tick driver for one toy session
pub struct FrameLoop {
    state: SimState,
    surface: Box<dyn RenderSurface>,
    interval: Duration,
}

impl FrameLoop {
    /// Build a loop from settings, seeding the simulation RNG with `seed`
    pub fn new(settings: &Settings, seed: u64, surface: Box<dyn RenderSurface>) -> Self {
        let bounds = Vec2::new(settings.viewport_width, settings.viewport_height);
        let mut state = SimState::new(seed, bounds);
        state.gravity_enabled = settings.gravity;
        state.resistance_enabled = settings.resistance;
        log::info!(
            "frame loop ready: {}x{} viewport, {} ms tick, seed {}",
            bounds.x,
            bounds.y,
            settings.tick_interval_ms,
            seed
        );
        Self {
            state,
            surface,
            interval: Duration::from_millis(settings.tick_interval_ms),
        }
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    /// Deliver one input event to the simulation
    pub fn handle(&mut self, event: InputEvent) {
        self.state.apply(event);
    }

    /// Advance one tick and sync the render surface
    pub fn step(&mut self) {
        tick(&mut self.state);
        sync(&mut self.state, self.surface.as_mut());
    }

    /// Advance `ticks` steps back to back (no wall-clock pacing)
    pub fn step_n(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.step();
        }
    }

    /// Drive the loop at the configured cadence, forever
    pub fn run(&mut self) -> ! {
        let mut next = Instant::now() + self.interval;
        loop {
            self.step();
            if self.state.time_ticks % 40 == 0 {
                log::debug!(
                    "tick {}: {} bodies, selected radius {:?}",
                    self.state.time_ticks,
                    self.state.bodies.len(),
                    self.state.selected_radius()
                );
            }
            let now = Instant::now();
            if next > now {
                thread::sleep(next - now);
            }
            next += self.interval;
        }
    }
}
