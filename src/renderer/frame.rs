//! Frame assembly
//!
//! Flattens the game state into one triangle list per frame: the paddle
//! rectangle, every active brick rectangle, then every ball as a filled
//! fan. Inactive bricks contribute nothing.

use super::shapes;
use super::vertex::{Vertex, rgba};
use crate::sim::state::GameState;

/// Build the frame's vertex list in draw order
pub fn scene_vertices(state: &GameState, ball_segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    vertices.extend(shapes::rect(
        state.paddle.pos,
        state.paddle.half,
        rgba(state.paddle.color),
    ));

    for brick in state.bricks.iter().filter(|b| b.active) {
        vertices.extend(shapes::rect(brick.pos, brick.half, rgba(brick.color)));
    }

    for ball in &state.balls {
        vertices.extend(shapes::circle(
            ball.pos,
            ball.radius,
            rgba(ball.color),
            ball_segments,
        ));
    }

    vertices
}
