//! Game state and core simulation types
//!
//! One paddle, one ball, two counters. Everything is integer pixels with the
//! origin at the top-left of the 640x480 arena.

use glam::IVec2;

use crate::consts::*;

/// Axis-aligned rectangle in arena pixels, origin top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// X of the right edge
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Y of the bottom edge
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    pub rect: Rect,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            rect: Rect::new(PADDLE_START_X, PADDLE_START_Y, PADDLE_WIDTH, PADDLE_HEIGHT),
        }
    }
}

impl Paddle {
    /// Apply one tick of held input, then clamp into the vertical bounds.
    ///
    /// Both directions may be held in the same tick; the steps are additive
    /// and the clamp runs once at the end.
    pub fn apply_input(&mut self, up_held: bool, down_held: bool) {
        if down_held {
            self.rect.y += PADDLE_SPEED;
        }
        if up_held {
            self.rect.y -= PADDLE_SPEED;
        }
        self.rect.y = self.rect.y.clamp(0, SCREEN_HEIGHT - self.rect.h);
    }
}

/// The ball: a square rectangle plus a per-tick velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub rect: Rect,
    /// Velocity in pixels per tick; each component is always +-BALL_SPEED
    pub vel: IVec2,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            rect: Rect::new(0, 0, BALL_SIZE, BALL_SIZE),
            vel: IVec2::splat(BALL_SPEED),
        }
    }
}

impl Ball {
    /// Advance one tick of motion. No bounds checks here; collision response
    /// is a separate step.
    pub fn advance(&mut self) {
        self.rect.x += self.vel.x;
        self.rect.y += self.vel.y;
    }
}

/// Complete game state, owned by the frame driver and mutated in place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub paddle: Paddle,
    pub ball: Ball,
    pub score: u32,
    /// Monotonically non-decreasing; survives round resets
    pub high_score: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create the fixed starting state
    pub fn new() -> Self {
        Self {
            paddle: Paddle::default(),
            ball: Ball::default(),
            score: 0,
            high_score: 0,
        }
    }

    /// Return the ball and score to start-of-round values.
    ///
    /// The high score and the paddle position are untouched.
    pub fn reset_round(&mut self) {
        self.ball = Ball::default();
        self.score = 0;
    }
}
