//! Rebound - a 2D brick-breaker core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, per-frame tick)
//! - `renderer`: CPU-side tessellation of the scene into triangle lists
//! - `settings`: Player preferences persisted as JSON

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Playfield bounds; entities are positioned and clamped within
    /// `[PLAYFIELD_MIN, PLAYFIELD_MAX]` on both axes
    pub const PLAYFIELD_MIN: f32 = -1.0;
    pub const PLAYFIELD_MAX: f32 = 1.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 0.04;
    pub const BALL_SPEED: f32 = 0.02;
    /// Triangle-fan resolution used to approximate a ball as a filled circle
    pub const BALL_SEGMENTS: u32 = 360;

    /// Paddle defaults - the paddle guards the `y = -1` end of the field
    pub const PADDLE_HALF_WIDTH: f32 = 0.1;
    pub const PADDLE_HALF_HEIGHT: f32 = 0.03;
    pub const PADDLE_Y: f32 = -0.85;
    /// Horizontal step applied per frame while a movement key is held
    pub const PADDLE_SPEED: f32 = 0.02;
    pub const PADDLE_COLOR: [f32; 3] = [0.2, 0.8, 0.4];

    /// Brick field layout
    pub const BRICK_ROWS: u32 = 4;
    pub const BRICK_COLS: u32 = 8;
    pub const BRICK_HALF_WIDTH: f32 = 0.1;
    pub const BRICK_HALF_HEIGHT: f32 = 0.05;
    /// Hit points given to every destructible brick at level setup
    pub const BRICK_HITS: u32 = 3;

    /// Displacement applied to a ball after a brick hit so the redirected
    /// ball does not re-test the same box on the next frame
    pub const BRICK_HIT_NUDGE: Vec2 = Vec2::new(0.03, 0.04);
    /// Per-channel color decrement applied to a brick on each surviving hit
    pub const BRICK_FADE_STEP: f32 = 0.1;

    /// Heading-code offsets applied when a movement step clamps at a
    /// playfield boundary (ring arithmetic on the codes 1..=8)
    pub const BOUNCE_TURN_UP: i8 = 2;
    pub const BOUNCE_TURN_DOWN: i8 = 6;
    pub const BOUNCE_TURN_RIGHT: i8 = -1;
    pub const BOUNCE_TURN_LEFT: i8 = 1;
}
