//! Solo Pong - a single-player wall Pong
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, score)
//! - `host`: Abstract host contract (canvas, input, frame driver)
//! - `game`: Glue between the simulation and a host
//! - `tui`: Terminal backend (crossterm)

pub mod game;
pub mod host;
pub mod sim;
pub mod tui;

pub use game::Game;
pub use sim::{GameState, TickInput};

/// Game configuration constants
pub mod consts {
    /// Logical arena width in pixels (also the window resolution)
    pub const SCREEN_WIDTH: i32 = 640;
    /// Logical arena height in pixels
    pub const SCREEN_HEIGHT: i32 = 480;

    /// Ball speed per axis, pixels per tick (signs flip, magnitude never does)
    pub const BALL_SPEED: i32 = 5;
    /// Paddle speed, pixels per tick per held key
    pub const PADDLE_SPEED: i32 = 6;

    /// Paddle starting rectangle
    pub const PADDLE_START_X: i32 = 600;
    pub const PADDLE_START_Y: i32 = 200;
    pub const PADDLE_WIDTH: i32 = 15;
    pub const PADDLE_HEIGHT: i32 = 100;

    /// Ball is a square this many pixels on a side, starting at the origin
    pub const BALL_SIZE: i32 = 15;

    /// Target frame period (one tick per frame)
    pub const FRAME_PERIOD_MS: u64 = 16;

    /// Window title reported to the host
    pub const WINDOW_TITLE: &str = "Solo Pong";
}
