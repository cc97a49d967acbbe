//! Half-block pixel framebuffer
//!
//! Each terminal cell holds two vertically stacked pixels drawn with the
//! upper-half-block glyph: foreground paints the top pixel, background the
//! bottom. Pixel height is therefore `rows * 2`.

use std::io::{self, Write};

use crossterm::{cursor, queue, style};

use crate::host::Color;

/// Device-pixel buffer sized to the terminal
pub struct PixelBuf {
    w: usize,
    h: usize,
    px: Vec<Color>,
}

impl PixelBuf {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            px: vec![Color::BLACK; w * h],
        }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn resize(&mut self, w: usize, h: usize) {
        self.w = w;
        self.h = h;
        self.px.clear();
        self.px.resize(w * h, Color::BLACK);
    }

    pub fn fill(&mut self, c: Color) {
        self.px.fill(c);
    }

    pub fn set(&mut self, x: i32, y: i32, c: Color) {
        if x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h {
            self.px[y as usize * self.w + x as usize] = c;
        }
    }

    fn get(&self, x: usize, y: usize) -> Color {
        self.px[y * self.w + x]
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, c: Color) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, c);
            }
        }
    }

    /// Flush the buffer to the terminal as half-block glyphs.
    ///
    /// Color change escapes are elided while consecutive cells repeat the
    /// same pair, which keeps the per-frame byte count manageable.
    pub fn present(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, cursor::MoveTo(0, 0))?;
        let rows = self.h / 2;
        let mut prev_fg: Option<Color> = None;
        let mut prev_bg: Option<Color> = None;

        for row in 0..rows {
            for col in 0..self.w {
                let top = self.get(col, row * 2);
                let bot = self.get(col, row * 2 + 1);

                if prev_fg != Some(top) {
                    queue!(
                        out,
                        style::SetForegroundColor(style::Color::Rgb {
                            r: top.r,
                            g: top.g,
                            b: top.b
                        })
                    )?;
                    prev_fg = Some(top);
                }
                if prev_bg != Some(bot) {
                    queue!(
                        out,
                        style::SetBackgroundColor(style::Color::Rgb {
                            r: bot.r,
                            g: bot.g,
                            b: bot.b
                        })
                    )?;
                    prev_bg = Some(bot);
                }
                queue!(out, style::Print('\u{2580}'))?; // ▀
            }
            if row < rows - 1 {
                queue!(out, style::ResetColor, style::Print("\r\n"))?;
                prev_fg = None;
                prev_bg = None;
            }
        }
        queue!(out, style::ResetColor)?;
        out.flush()
    }
}
