//! Abstract host contract
//!
//! The simulation never talks to a window or a terminal directly. A host
//! supplies these capabilities:
//! - a canvas with a fixed 640x480 logical resolution (filled rectangles and
//!   one-line bitmap text)
//! - a held-key query, polled once per tick
//! - a run loop that calls advance then render, in that order, at a fixed
//!   frame rate
//!
//! The core implements [`Frame`]; a backend owns the loop and drives it.

use crate::sim::Rect;

/// Flat RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
}

/// Named game keys the simulation cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    MoveUp,
    MoveDown,
}

/// Held-key query, sampled once per tick
pub trait InputSource {
    fn is_held(&self, key: Key) -> bool;
}

/// Drawing surface in logical arena coordinates (640x480, origin top-left)
pub trait Canvas {
    /// Clear the whole surface to a flat color
    fn clear(&mut self, color: Color);

    /// Draw a solid axis-aligned rectangle
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw one line of ASCII text with the host's fixed-width bitmap font.
    /// `(x, y)` is the top-left of the first glyph.
    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color);
}

/// Frame driver interface the core implements.
///
/// The backend calls `advance` then `render` once per frame, strictly in that
/// order, on a single thread.
pub trait Frame {
    /// Advance the simulation by one tick using the current input
    fn advance(&mut self, input: &dyn InputSource);

    /// Render the current state; must not mutate it
    fn render(&self, canvas: &mut dyn Canvas);
}
