//! Deterministic simulation module
//!
//! All toy physics and interaction logic lives here. This module must be pure
//! and deterministic:
//! - Fixed timestep only (one tick = one call to [`tick::tick`])
//! - Seeded RNG only
//! - Stable body iteration order (append-only registry)
//! - No platform dependencies; rendering only ever sees a write-only
//!   projection of this state

pub mod bounds;
pub mod drag;
pub mod event;
pub mod forces;
pub mod randomize;
pub mod state;
pub mod tick;

pub use bounds::resolve_bounds;
pub use event::InputEvent;
pub use randomize::randomize;
pub use state::{Body, Color, DragState, SimState};
pub use tick::tick;
