//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per frame)
//! - Integer arithmetic only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{collide_paddle, collide_walls, paddle_overlap};
pub use state::{Ball, GameState, Paddle, Rect};
pub use tick::{TickInput, tick};
