//! Game state and core entity types
//!
//! Everything the simulation mutates lives here. State carries its own
//! seeded RNG and serializes whole, so a run can be snapshotted and
//! replayed deterministically.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// One of eight compass headings, numbered 1..=8 starting at `Up` and
/// proceeding clockwise. The numbering is part of the movement contract:
/// wall bounces remap headings with fixed arithmetic on these codes.
///
/// `Up` headings decrease y (their boundary is `-1 + radius`); `Down`
/// headings increase y; `Right` increases x; `Left` decreases x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heading {
    Up = 1,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
}

impl Heading {
    /// All headings in code order (index = code - 1)
    pub const ALL: [Heading; 8] = [
        Heading::Up,
        Heading::UpRight,
        Heading::Right,
        Heading::DownRight,
        Heading::Down,
        Heading::DownLeft,
        Heading::Left,
        Heading::UpLeft,
    ];

    /// Numeric code in 1..=8
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Remap by `offset` steps on the eight-value code ring.
    ///
    /// Euclidean wrap-around: `Left.turned(1)` is `UpLeft`, and a negative
    /// offset from `Up` wraps back to `UpLeft` rather than escaping the
    /// 1..=8 domain.
    #[inline]
    pub fn turned(self, offset: i8) -> Heading {
        let idx = (self.code() as i8 - 1 + offset).rem_euclid(8);
        Self::ALL[idx as usize]
    }

    /// Sample a heading uniformly from all eight codes
    pub fn random(rng: &mut Pcg32) -> Heading {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    #[inline]
    pub fn moves_up(self) -> bool {
        matches!(self, Heading::Up | Heading::UpRight | Heading::UpLeft)
    }

    #[inline]
    pub fn moves_down(self) -> bool {
        matches!(self, Heading::Down | Heading::DownRight | Heading::DownLeft)
    }

    #[inline]
    pub fn moves_right(self) -> bool {
        matches!(self, Heading::UpRight | Heading::Right | Heading::DownRight)
    }

    #[inline]
    pub fn moves_left(self) -> bool {
        matches!(self, Heading::UpLeft | Heading::Left | Heading::DownLeft)
    }
}

/// A ball entity
///
/// Balls are appended by a spawn input event and live for the whole
/// session. Movement is quantized: a fixed scalar speed along the axis
/// components of the current heading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub radius: f32,
    pub color: [f32; 3],
    pub heading: Heading,
    pub speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32, color: [f32; 3], heading: Heading, speed: f32) -> Self {
        Self {
            pos,
            radius,
            color,
            heading,
            speed,
        }
    }

    /// Advance one movement step along the current heading.
    ///
    /// Each axis implied by the heading at entry advances independently; a
    /// step that would cross the playfield boundary instead clamps to it
    /// and remaps the heading by a fixed per-axis offset. The remap is code
    /// arithmetic, not angle-of-incidence reflection. Diagonal headings may
    /// clamp on both axes in one call (vertical remap first).
    pub fn step(&mut self) {
        let heading = self.heading;
        let min = PLAYFIELD_MIN + self.radius;
        let max = PLAYFIELD_MAX - self.radius;

        if heading.moves_up() {
            if self.pos.y - self.speed >= min {
                self.pos.y -= self.speed;
            } else {
                self.pos.y = min;
                self.heading = self.heading.turned(BOUNCE_TURN_UP);
            }
        } else if heading.moves_down() {
            if self.pos.y + self.speed <= max {
                self.pos.y += self.speed;
            } else {
                self.pos.y = max;
                self.heading = self.heading.turned(BOUNCE_TURN_DOWN);
            }
        }

        if heading.moves_right() {
            if self.pos.x + self.speed <= max {
                self.pos.x += self.speed;
            } else {
                self.pos.x = max;
                self.heading = self.heading.turned(BOUNCE_TURN_RIGHT);
            }
        } else if heading.moves_left() {
            if self.pos.x - self.speed >= min {
                self.pos.x -= self.speed;
            } else {
                self.pos.x = min;
                self.heading = self.heading.turned(BOUNCE_TURN_LEFT);
            }
        }
    }
}

/// Brick classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickKind {
    /// Redirects the ball but takes no damage
    Reflective,
    /// Loses one hit point per contact and deactivates at zero
    Destructible,
}

/// A static obstacle with limited hit points
///
/// Bricks are created in batch at level setup and never removed; a spent
/// brick is deactivated so draw and collision skip it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub pos: Vec2,
    /// Half-extents of the footprint
    pub half: Vec2,
    pub color: [f32; 3],
    pub kind: BrickKind,
    pub active: bool,
    pub hits_remaining: u32,
}

impl Brick {
    pub fn new(pos: Vec2, half: Vec2, color: [f32; 3], kind: BrickKind, hits: u32) -> Self {
        Self {
            pos,
            half,
            color,
            kind,
            active: true,
            hits_remaining: hits,
        }
    }

    /// Apply one hit: decrement the counter, deactivate at zero, otherwise
    /// darken every color channel by a fixed step (floored at 0.0).
    pub fn apply_hit(&mut self) {
        self.hits_remaining = self.hits_remaining.saturating_sub(1);
        if self.hits_remaining == 0 {
            self.active = false;
        } else {
            for channel in &mut self.color {
                *channel = (*channel - BRICK_FADE_STEP).max(0.0);
            }
        }
    }

    /// Whether a contact should invoke hit handling
    #[inline]
    pub fn takes_damage(&self) -> bool {
        self.kind == BrickKind::Destructible && self.hits_remaining > 0
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    /// Half-extents of the footprint
    pub half: Vec2,
    pub color: [f32; 3],
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            pos: Vec2::new(0.0, PADDLE_Y),
            half: Vec2::new(PADDLE_HALF_WIDTH, PADDLE_HALF_HEIGHT),
            color: PADDLE_COLOR,
        }
    }
}

impl Paddle {
    /// Move one step left unless the left edge has reached the playfield
    pub fn move_left(&mut self) {
        if self.pos.x - self.half.x > PLAYFIELD_MIN {
            self.pos.x -= PADDLE_SPEED;
        }
    }

    /// Move one step right unless the right edge has reached the playfield
    pub fn move_right(&mut self) {
        if self.pos.x + self.half.x < PLAYFIELD_MAX {
            self.pos.x += PADDLE_SPEED;
        }
    }
}

/// Complete game state (deterministic, serializable)
///
/// Owns every entity collection plus the RNG stream; there is no other
/// mutable state in the simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// The only entropy source in the simulation
    pub rng: Pcg32,
    /// Frame counter
    pub frame: u64,
    /// Player paddle
    pub paddle: Paddle,
    /// Brick field (deactivated bricks stay in place)
    pub bricks: Vec<Brick>,
    /// Active balls, in spawn order
    pub balls: Vec<Ball>,
}

impl GameState {
    /// Create an empty game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            frame: 0,
            paddle: Paddle::default(),
            bricks: Vec::new(),
            balls: Vec::new(),
        }
    }

    /// Append a ball at the given position and heading.
    ///
    /// The color is sampled per channel as a random integer in 0..100
    /// divided by 10 000, which leaves every spawned ball near black.
    // TODO: the 10_000 divisor is almost certainly a typo for 100; fixing
    // it would give spawned balls the full 0-1 color range.
    pub fn spawn_ball(&mut self, pos: Vec2, heading: Heading) {
        let color = [
            spawn_channel(&mut self.rng),
            spawn_channel(&mut self.rng),
            spawn_channel(&mut self.rng),
        ];
        self.balls
            .push(Ball::new(pos, BALL_RADIUS, color, heading, BALL_SPEED));
    }

    /// Count of bricks still participating in draw and collision
    pub fn active_bricks(&self) -> usize {
        self.bricks.iter().filter(|b| b.active).count()
    }
}

fn spawn_channel(rng: &mut Pcg32) -> f32 {
    rng.random_range(0..100) as f32 / 10_000.0
}

/// Sample a full-range color, one independent draw per channel
pub fn random_color(rng: &mut Pcg32) -> [f32; 3] {
    [rng.random::<f32>(), rng.random::<f32>(), rng.random::<f32>()]
}
