//! Per-frame simulation advance
//!
//! One call to [`tick`] is one frame: apply the polled input, resolve every
//! collision, then step every ball. Rendering reads the resulting state
//! separately.

use glam::Vec2;

use super::collision;
use super::state::{Brick, BrickKind, GameState, Heading};
use crate::consts::*;

/// Input sampled once per frame (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Left movement key held
    pub move_left: bool,
    /// Right movement key held
    pub move_right: bool,
    /// Spawn trigger pressed this frame
    pub spawn_ball: bool,
    /// Exit flag; honored by the loop driver, not by `tick`
    pub quit: bool,
}

/// Advance the game state by one frame.
///
/// There is no win or lose condition: the simulation keeps running after
/// the last destructible brick deactivates.
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.frame += 1;

    if input.move_left {
        state.paddle.move_left();
    }
    if input.move_right {
        state.paddle.move_right();
    }
    if input.spawn_ball {
        let pos = Vec2::new(
            state.paddle.pos.x,
            state.paddle.pos.y + state.paddle.half.y + BALL_RADIUS,
        );
        let heading = Heading::random(&mut state.rng);
        state.spawn_ball(pos, heading);
        log::debug!(
            "spawned ball {} at ({:.2}, {:.2}) heading {}",
            state.balls.len(),
            pos.x,
            pos.y,
            heading.code(),
        );
    }

    collision::resolve(state);

    for ball in &mut state.balls {
        ball.step();
    }
}

/// Per-row brick colors, top row first
const ROW_COLORS: [[f32; 3]; 4] = [
    [0.75, 0.75, 0.8],
    [0.9, 0.3, 0.25],
    [0.95, 0.65, 0.2],
    [0.3, 0.75, 0.35],
];

/// Lay out the brick field in batch: a grid of destructible bricks in
/// per-row colors, with the top row reflective, positioned opposite the
/// paddle.
pub fn build_level(state: &mut GameState) {
    state.bricks.clear();

    let step_x = 2.0 * BRICK_HALF_WIDTH + 0.02;
    let step_y = 2.0 * BRICK_HALF_HEIGHT + 0.02;
    let first_x = -step_x * (BRICK_COLS as f32 - 1.0) / 2.0;
    let top_y = 0.75;

    for row in 0..BRICK_ROWS {
        let kind = if row == 0 {
            BrickKind::Reflective
        } else {
            BrickKind::Destructible
        };
        let color = ROW_COLORS[row as usize % ROW_COLORS.len()];
        let y = top_y - row as f32 * step_y;

        for col in 0..BRICK_COLS {
            let x = first_x + col as f32 * step_x;
            state.bricks.push(Brick::new(
                Vec2::new(x, y),
                Vec2::new(BRICK_HALF_WIDTH, BRICK_HALF_HEIGHT),
                color,
                kind,
                BRICK_HITS,
            ));
        }
    }

    log::info!(
        "level ready: {} bricks in {} rows",
        state.bricks.len(),
        BRICK_ROWS
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_level_grid() {
        let mut state = GameState::new(1);
        build_level(&mut state);

        assert_eq!(state.bricks.len(), (BRICK_ROWS * BRICK_COLS) as usize);
        assert_eq!(state.active_bricks(), state.bricks.len());
        assert!(
            state.bricks[..BRICK_COLS as usize]
                .iter()
                .all(|b| b.kind == BrickKind::Reflective)
        );
        assert!(
            state.bricks[BRICK_COLS as usize..]
                .iter()
                .all(|b| b.kind == BrickKind::Destructible)
        );
        // The whole field fits the playfield, clear of the paddle
        for brick in &state.bricks {
            assert!(brick.pos.x - brick.half.x > PLAYFIELD_MIN);
            assert!(brick.pos.x + brick.half.x < PLAYFIELD_MAX);
            assert!(brick.pos.y - brick.half.y > state.paddle.pos.y + state.paddle.half.y);
            assert!(brick.pos.y + brick.half.y < PLAYFIELD_MAX);
        }
    }

    #[test]
    fn test_input_moves_paddle() {
        let mut state = GameState::new(1);
        let start = state.paddle.pos.x;

        tick(&mut state, &TickInput {
            move_left: true,
            ..Default::default()
        });
        assert!(state.paddle.pos.x < start);

        tick(&mut state, &TickInput {
            move_right: true,
            ..Default::default()
        });
        assert!((state.paddle.pos.x - start).abs() < 1e-6);
    }

    #[test]
    fn test_spawn_appends_ball_in_front_of_paddle() {
        let mut state = GameState::new(1);
        assert!(state.balls.is_empty());

        tick(&mut state, &TickInput {
            spawn_ball: true,
            ..Default::default()
        });

        assert_eq!(state.balls.len(), 1);
        let ball = &state.balls[0];
        assert!(ball.pos.y > state.paddle.pos.y);
        for channel in ball.color {
            assert!((0.0..0.01).contains(&channel));
        }
    }

    #[test]
    fn test_tick_steps_every_ball() {
        let mut state = GameState::new(1);
        state.spawn_ball(Vec2::new(0.0, 0.0), Heading::Up);
        state.spawn_ball(Vec2::new(0.5, 0.5), Heading::Right);

        tick(&mut state, &TickInput::default());

        assert!((state.balls[0].pos.y - (-BALL_SPEED)).abs() < 1e-6);
        assert!((state.balls[1].pos.x - (0.5 + BALL_SPEED)).abs() < 1e-6);
        assert_eq!(state.frame, 1);
    }

    #[test]
    fn test_determinism_same_seed_same_inputs() {
        let inputs = [
            TickInput {
                move_right: true,
                ..Default::default()
            },
            TickInput {
                spawn_ball: true,
                ..Default::default()
            },
            TickInput {
                move_left: true,
                spawn_ball: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        let mut a = GameState::new(99999);
        let mut b = GameState::new(99999);
        build_level(&mut a);
        build_level(&mut b);

        for _ in 0..50 {
            for input in &inputs {
                tick(&mut a, input);
                tick(&mut b, input);
            }
        }

        let snap_a = serde_json::to_string(&a).unwrap();
        let snap_b = serde_json::to_string(&b).unwrap();
        assert_eq!(snap_a, snap_b);
    }

    #[test]
    fn test_game_runs_on_after_field_is_cleared() {
        let mut state = GameState::new(5);
        build_level(&mut state);
        for brick in &mut state.bricks {
            brick.active = false;
            brick.hits_remaining = 0;
        }
        state.spawn_ball(Vec2::new(0.0, 0.0), Heading::DownRight);

        for _ in 0..500 {
            tick(&mut state, &TickInput::default());
        }

        assert_eq!(state.active_bricks(), 0);
        assert_eq!(state.frame, 500);
        assert_eq!(state.balls.len(), 1);
    }
}
