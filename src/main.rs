//! Rebound entry point
//!
//! Runs the simulation headless with scripted input, standing in for the
//! windowed front end: the same frame sequence a real driver would use
//! (poll input, tick, flatten the scene), minus the GPU surface.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use rebound::Settings;
use rebound::renderer;
use rebound::sim::{GameState, Heading, TickInput, build_level, tick};

/// Frames the scripted demo runs before raising the quit flag
const DEMO_FRAMES: u64 = 600;

fn main() {
    env_logger::init();

    let settings = Settings::load(Path::new("settings.json"));
    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!("Rebound starting with seed {}", seed);

    let mut state = GameState::new(seed);
    build_level(&mut state);
    state.spawn_ball(
        glam::Vec2::new(
            state.paddle.pos.x,
            state.paddle.pos.y + state.paddle.half.y + rebound::consts::BALL_RADIUS,
        ),
        Heading::UpRight,
    );

    loop {
        let input = scripted_input(state.frame);
        if input.quit {
            log::info!("quit flag raised on frame {}", state.frame);
            break;
        }

        tick(&mut state, &input);
        let vertices = renderer::scene_vertices(&state, settings.ball_segments);

        if settings.frame_log && state.frame % 60 == 0 {
            log::info!(
                "frame {}: {} balls, {}/{} bricks active, {} vertices",
                state.frame,
                state.balls.len(),
                state.active_bricks(),
                state.bricks.len(),
                vertices.len(),
            );
        }
    }

    log::info!(
        "demo finished: {} balls, {}/{} bricks left",
        state.balls.len(),
        state.active_bricks(),
        state.bricks.len(),
    );
}

/// Canned input: sweep the paddle back and forth, spawn a ball every few
/// seconds, quit after the demo length
fn scripted_input(frame: u64) -> TickInput {
    TickInput {
        move_left: (frame / 120) % 2 == 1,
        move_right: (frame / 120) % 2 == 0,
        spawn_ball: frame > 0 && frame % 180 == 0,
        quit: frame >= DEMO_FRAMES,
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
