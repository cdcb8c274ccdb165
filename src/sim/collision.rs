//! Collision checks and in-place resolution
//!
//! The hit tests are deliberately coarse and are part of the contract: a
//! ball tests against a brick with a plain box check on its center (the
//! radius is ignored), and every bounce takes a fresh random heading
//! instead of reflecting about a contact normal.

use crate::consts::*;
use crate::sim::state::{Ball, Brick, GameState, Heading, Paddle, random_color};

/// Box test for a ball center against a brick footprint.
///
/// The low edges are exclusive and the high edges inclusive on both axes.
#[inline]
pub fn ball_hits_brick(ball: &Ball, brick: &Brick) -> bool {
    brick.pos.x - brick.half.x < ball.pos.x
        && ball.pos.x <= brick.pos.x + brick.half.x
        && brick.pos.y - brick.half.y < ball.pos.y
        && ball.pos.y <= brick.pos.y + brick.half.y
}

/// Paddle test: the horizontal box check combined with a proximity test of
/// the ball's paddle-facing edge against the paddle's vertical extent.
#[inline]
pub fn ball_hits_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    let facing_edge = ball.pos.y - ball.radius;
    paddle.pos.x - paddle.half.x < ball.pos.x
        && ball.pos.x <= paddle.pos.x + paddle.half.x
        && facing_edge <= paddle.pos.y + paddle.half.y
        && facing_edge > paddle.pos.y - paddle.half.y
}

/// Center-distance overlap test between two balls
#[inline]
pub fn balls_touch(a: &Ball, b: &Ball) -> bool {
    a.pos.distance(b.pos) <= a.radius + b.radius
}

/// Resolve every interaction for the current frame.
///
/// Balls are processed in collection order; for each ball every brick is
/// tested in order, then the paddle, then every other ball. Mutations are
/// applied in place as they are found, so a hit early in the pass is
/// visible to every later test in the same pass.
pub fn resolve(state: &mut GameState) {
    for i in 0..state.balls.len() {
        resolve_bricks(i, state);
        resolve_paddle(i, state);
        resolve_ball_contacts(i, state);
    }
}

/// Test one ball against every active brick, in collection order.
///
/// The loop never breaks early: a ball whose (post-nudge) center still lies
/// inside a later brick's box hits that brick too, in the same frame.
fn resolve_bricks(i: usize, state: &mut GameState) {
    for b in 0..state.bricks.len() {
        if !state.bricks[b].active {
            continue;
        }
        if !ball_hits_brick(&state.balls[i], &state.bricks[b]) {
            continue;
        }

        let heading = Heading::random(&mut state.rng);
        let ball = &mut state.balls[i];
        ball.heading = heading;
        ball.pos += BRICK_HIT_NUDGE;

        let brick = &mut state.bricks[b];
        if brick.takes_damage() {
            brick.apply_hit();
            if !brick.active {
                log::debug!("brick at ({:.2}, {:.2}) spent", brick.pos.x, brick.pos.y);
            }
        }
    }
}

fn resolve_paddle(i: usize, state: &mut GameState) {
    if ball_hits_paddle(&state.balls[i], &state.paddle) {
        state.balls[i].heading = Heading::random(&mut state.rng);
    }
}

/// Pairwise overlap recolors both balls; positions and headings are left
/// alone, so overlapping balls can ride together indefinitely.
fn resolve_ball_contacts(i: usize, state: &mut GameState) {
    for j in 0..state.balls.len() {
        if j == i {
            continue;
        }
        if balls_touch(&state.balls[i], &state.balls[j]) {
            let first = random_color(&mut state.rng);
            let second = random_color(&mut state.rng);
            state.balls[i].color = first;
            state.balls[j].color = second;
        }
    }
}
