//! Drag state machine
//!
//! A body is either Free or Held. Picking it up captures the pointer-to-center
//! offset and zeroes its velocity; while held, its position is locked to the
//! pointer and a one-tick finite-difference velocity estimate is maintained;
//! releasing it (pointer-up, or a forced release on a wall hit) commits that
//! estimate as the body's velocity, which is what makes flinging work.
//!
//! Callers guard the transitions: these methods assume the body is in the
//! right state, matching the `Free → Held → Free` machine.

use glam::Vec2;

use super::state::{Body, DragState};

impl Body {
    /// Pick the body up at the given pointer position (Free → Held)
    pub fn start_drag(&mut self, pointer: Vec2) {
        debug_assert!(!self.is_held(), "start_drag on a held body");
        self.vel = Vec2::ZERO;
        self.drag = Some(DragState {
            offset: pointer - self.pos,
            last_pointer: pointer,
            estimated_vel: Vec2::ZERO,
        });
    }

    /// Refresh the velocity estimate from pointer displacement. Called once
    /// per tick while held.
    pub fn update_drag(&mut self, pointer: Vec2) {
        debug_assert!(self.is_held(), "update_drag on a free body");
        if let Some(drag) = &mut self.drag {
            drag.estimated_vel = pointer - drag.last_pointer;
            drag.last_pointer = pointer;
        }
    }

    /// Release the body, committing the estimated velocity (Held → Free)
    pub fn stop_drag(&mut self) {
        debug_assert!(self.is_held(), "stop_drag on a free body");
        if let Some(drag) = self.drag.take() {
            self.vel = drag.estimated_vel;
        }
    }

    /// Lock the body's position to the pointer, overriding the physics
    /// integration for this tick.
    pub fn follow_pointer(&mut self, pointer: Vec2) {
        if let Some(drag) = &self.drag {
            self.pos = pointer - drag.offset;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Color;

    fn body_at(x: f32, y: f32) -> Body {
        Body::new(1, Vec2::new(x, y), 20.0, Color::new(10, 20, 30))
    }

    #[test]
    fn test_start_drag_captures_offset_and_zeroes_velocity() {
        let mut body = body_at(100.0, 200.0);
        body.vel = Vec2::new(7.0, -3.0);

        body.start_drag(Vec2::new(110.0, 195.0));
        assert!(body.is_held());
        assert_eq!(body.vel, Vec2::ZERO);

        let drag = body.drag.unwrap();
        assert_eq!(drag.offset, Vec2::new(10.0, -5.0));
        assert_eq!(drag.last_pointer, Vec2::new(110.0, 195.0));
        assert_eq!(drag.estimated_vel, Vec2::ZERO);
    }

    #[test]
    fn test_drag_commit_round_trip() {
        // start at (px,py), one update at (px2,py2), stop: velocity is the
        // pointer displacement exactly
        let mut body = body_at(100.0, 200.0);
        body.start_drag(Vec2::new(105.0, 210.0));
        body.update_drag(Vec2::new(117.0, 204.0));

        let drag = body.drag.unwrap();
        assert_eq!(drag.estimated_vel, Vec2::new(12.0, -6.0));
        assert_eq!(drag.last_pointer, Vec2::new(117.0, 204.0));

        body.stop_drag();
        assert!(!body.is_held());
        assert_eq!(body.vel, Vec2::new(12.0, -6.0));
    }

    #[test]
    fn test_follow_pointer_preserves_offset() {
        let mut body = body_at(100.0, 200.0);
        body.start_drag(Vec2::new(110.0, 195.0));

        body.follow_pointer(Vec2::new(300.0, 400.0));
        assert_eq!(body.pos, Vec2::new(290.0, 405.0));
    }

    #[test]
    fn test_estimate_is_per_tick_not_cumulative() {
        let mut body = body_at(0.0, 0.0);
        body.start_drag(Vec2::new(0.0, 0.0));
        body.update_drag(Vec2::new(50.0, 0.0));
        body.update_drag(Vec2::new(53.0, 1.0));

        body.stop_drag();
        assert_eq!(body.vel, Vec2::new(3.0, 1.0));
    }
}
