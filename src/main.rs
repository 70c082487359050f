//! Ballpit entry point
//!
//! Headless demo session: seeds the pit from settings, scripts one drag-fling
//! so a fresh run shows some action, then drives the frame loop at the
//! configured cadence until interrupted. A real host would swap the
//! `NullSurface` for its drawing target and feed pointer events in.

use std::time::{SystemTime, UNIX_EPOCH};

use ballpit::render::NullSurface;
use ballpit::sim::InputEvent;
use ballpit::{FrameLoop, Settings};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args().nth(1);
    let settings = Settings::load(path.as_deref());

    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });

    let mut frame = FrameLoop::new(&settings, seed, Box::new(NullSurface::default()));

    let spacing = settings.viewport_width / (settings.initial_bodies as f32 + 1.0);
    for i in 0..settings.initial_bodies {
        frame.handle(InputEvent::AddBody {
            x: spacing * (i as f32 + 1.0),
            y: settings.viewport_height / 3.0,
            radius: settings.body_radius,
        });
    }
    for (i, body) in frame.state().bodies.iter().enumerate() {
        log::info!("body {} at ({}, {}) fill {}", i, body.pos.x, body.pos.y, body.color.to_css());
    }

    // Scripted drag-fling on the first body
    if !frame.state().bodies.is_empty() {
        let grab = frame.state().bodies[0].pos;
        frame.handle(InputEvent::PointerMove { x: grab.x, y: grab.y });
        frame.handle(InputEvent::PointerDown { index: 0 });
        for step in 1..=5 {
            frame.handle(InputEvent::PointerMove {
                x: grab.x + step as f32 * 12.0,
                y: grab.y - step as f32 * 8.0,
            });
            frame.step();
        }
        frame.handle(InputEvent::PointerUp { index: 0 });
        log::info!("flung body 0 with velocity {:?}", frame.state().bodies[0].vel);
    }

    frame.run();
}
