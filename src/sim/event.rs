//! Input events and their dispatch onto the simulation
//!
//! Everything the outside world can do to the toy arrives as one tagged
//! [`InputEvent`]. Pointer moves just overwrite the shared pointer position
//! (last-write-wins between ticks); everything else is a discrete command.
//! Dispatch guards the drag state machine so wrong-state transitions are
//! dropped instead of corrupting a body.

use glam::Vec2;

use super::randomize::randomize;
use super::state::SimState;

/// A single input delivered to the simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved to viewport coordinates
    PointerMove { x: f32, y: f32 },
    /// Pointer pressed on the body at `index`
    PointerDown { index: usize },
    /// Pointer released over the body at `index`
    PointerUp { index: usize },
    /// Create a new body
    AddBody { x: f32, y: f32, radius: f32 },
    /// Point the size control at the body at `index`
    SelectBody { index: usize },
    /// Set the selected body's radius
    SetRadius { radius: f32 },
    /// Toggle gravity
    SetGravity(bool),
    /// Toggle drag resistance
    SetResistance(bool),
    /// Trigger the randomize effect
    Randomize,
}

impl SimState {
    /// Apply one input event
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMove { x, y } => {
                self.pointer = Vec2::new(x, y);
            }
            InputEvent::PointerDown { index } => {
                let pointer = self.pointer;
                match self.bodies.get_mut(index) {
                    Some(body) if !body.is_held() => body.start_drag(pointer),
                    Some(_) => {}
                    None => log::warn!("pointer-down on missing body {index}"),
                }
            }
            InputEvent::PointerUp { index } => {
                match self.bodies.get_mut(index) {
                    Some(body) if body.is_held() => body.stop_drag(),
                    Some(_) => {}
                    None => log::warn!("pointer-up on missing body {index}"),
                }
            }
            InputEvent::AddBody { x, y, radius } => {
                self.add_body(x, y, radius);
            }
            InputEvent::SelectBody { index } => self.select_body(index),
            InputEvent::SetRadius { radius } => self.set_selected_radius(radius),
            InputEvent::SetGravity(on) => self.gravity_enabled = on,
            InputEvent::SetResistance(on) => self.resistance_enabled = on,
            InputEvent::Randomize => randomize(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_body() -> SimState {
        let mut state = SimState::new(1, Vec2::new(800.0, 600.0));
        state.add_body(400.0, 300.0, 20.0);
        state
    }

    #[test]
    fn test_pointer_move_is_last_write_wins() {
        let mut state = state_with_body();
        state.apply(InputEvent::PointerMove { x: 10.0, y: 20.0 });
        state.apply(InputEvent::PointerMove { x: 30.0, y: 40.0 });
        assert_eq!(state.pointer, Vec2::new(30.0, 40.0));
    }

    #[test]
    fn test_pointer_down_up_drives_state_machine() {
        let mut state = state_with_body();
        state.apply(InputEvent::PointerMove { x: 405.0, y: 310.0 });
        state.apply(InputEvent::PointerDown { index: 0 });
        assert!(state.bodies[0].is_held());

        state.apply(InputEvent::PointerUp { index: 0 });
        assert!(!state.bodies[0].is_held());
    }

    #[test]
    fn test_pointer_down_on_held_body_is_ignored() {
        let mut state = state_with_body();
        state.apply(InputEvent::PointerMove { x: 405.0, y: 310.0 });
        state.apply(InputEvent::PointerDown { index: 0 });
        let drag = state.bodies[0].drag;

        // Second press must not restart the drag
        state.apply(InputEvent::PointerMove { x: 500.0, y: 500.0 });
        state.apply(InputEvent::PointerDown { index: 0 });
        assert_eq!(state.bodies[0].drag, drag);
    }

    #[test]
    fn test_pointer_up_on_free_body_is_ignored() {
        let mut state = state_with_body();
        state.bodies[0].vel = Vec2::new(3.0, 4.0);
        state.apply(InputEvent::PointerUp { index: 0 });
        assert_eq!(state.bodies[0].vel, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_toggles_and_commands() {
        let mut state = state_with_body();
        state.apply(InputEvent::SetGravity(false));
        state.apply(InputEvent::SetResistance(false));
        assert!(!state.gravity_enabled);
        assert!(!state.resistance_enabled);

        state.apply(InputEvent::AddBody { x: 100.0, y: 100.0, radius: 10.0 });
        assert_eq!(state.bodies.len(), 2);
        assert_eq!(state.selected, Some(1));

        state.apply(InputEvent::SelectBody { index: 0 });
        state.apply(InputEvent::SetRadius { radius: 33.0 });
        assert_eq!(state.bodies[0].radius, 33.0);
    }
}
