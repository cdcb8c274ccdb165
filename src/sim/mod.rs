//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One frame per tick, no wall-clock time
//! - Seeded RNG only, owned by the state
//! - Stable collection order (entities are appended, never removed)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{ball_hits_brick, ball_hits_paddle, balls_touch, resolve};
pub use state::{Ball, Brick, BrickKind, GameState, Heading, Paddle};
pub use tick::{TickInput, build_level, tick};
