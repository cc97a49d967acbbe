//! Terminal backend (crossterm)
//!
//! Owns the run loop: raw-mode setup/teardown, key polling, a fixed target
//! frame rate, and a half-block framebuffer scaled from the 640x480 logical
//! resolution onto the terminal. Drives any `Frame` implementation; it never
//! reaches into the simulation.

pub mod font;
pub mod framebuffer;

use std::io::{self, stdout};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{cursor, execute, terminal};

use crate::consts::{FRAME_PERIOD_MS, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use crate::host::{Canvas, Color, Frame, InputSource, Key};
use crate::sim::Rect;

use framebuffer::PixelBuf;

/// Ticks a key stays "held" after a press or auto-repeat event.
///
/// Most terminals never report key release, so a hold is inferred from the
/// OS auto-repeat stream; this window must outlast the repeat interval.
/// Terminals that do report releases (kitty protocol) clear the key exactly.
const HOLD_TICKS: u8 = 10;

/// Held-key state reconstructed from terminal key events
#[derive(Debug, Default)]
struct HeldKeys {
    up: u8,
    down: u8,
}

impl HeldKeys {
    fn press(&mut self, key: Key) {
        match key {
            Key::MoveUp => self.up = HOLD_TICKS,
            Key::MoveDown => self.down = HOLD_TICKS,
        }
    }

    fn release(&mut self, key: Key) {
        match key {
            Key::MoveUp => self.up = 0,
            Key::MoveDown => self.down = 0,
        }
    }

    /// Age the hold windows by one tick
    fn decay(&mut self) {
        self.up = self.up.saturating_sub(1);
        self.down = self.down.saturating_sub(1);
    }
}

impl InputSource for HeldKeys {
    fn is_held(&self, key: Key) -> bool {
        match key {
            Key::MoveUp => self.up > 0,
            Key::MoveDown => self.down > 0,
        }
    }
}

/// Canvas that maps logical 640x480 coordinates onto the device framebuffer
struct TermCanvas {
    buf: PixelBuf,
}

impl TermCanvas {
    fn new(cols: u16, rows: u16) -> Self {
        Self {
            buf: PixelBuf::new(cols as usize, rows as usize * 2),
        }
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        self.buf.resize(cols as usize, rows as usize * 2);
    }

    fn map_x(&self, x: i32) -> i32 {
        (x as i64 * self.buf.width() as i64 / SCREEN_WIDTH as i64) as i32
    }

    fn map_y(&self, y: i32) -> i32 {
        (y as i64 * self.buf.height() as i64 / SCREEN_HEIGHT as i64) as i32
    }
}

impl Canvas for TermCanvas {
    fn clear(&mut self, color: Color) {
        self.buf.fill(color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        // Map both corners so adjacent rectangles stay adjacent; never let a
        // visible rectangle vanish below one device pixel
        let x0 = self.map_x(rect.x);
        let y0 = self.map_y(rect.y);
        let w = (self.map_x(rect.right()) - x0).max(1);
        let h = (self.map_y(rect.bottom()) - y0).max(1);
        self.buf.fill_rect(x0, y0, w, h, color);
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color) {
        // Glyphs are drawn 1:1 in device pixels; only the anchor is scaled
        let (x, y) = (self.map_x(x), self.map_y(y));
        font::draw_text(&mut self.buf, x, y, text, color);
    }
}

/// Run the frame loop until the player quits or the terminal fails.
///
/// One `advance` then one `render` per frame, single-threaded, at the fixed
/// target frame rate. Q, Esc, and Ctrl-C quit.
pub fn run(frame: &mut dyn Frame) -> io::Result<()> {
    let mut out = stdout();
    setup(&mut out)?;
    let result = run_loop(frame, &mut out);
    // Restore the terminal even when the loop errored out
    let restored = teardown(&mut out);
    result.and(restored)
}

fn setup(out: &mut io::Stdout) -> io::Result<()> {
    terminal::enable_raw_mode()?;
    execute!(
        out,
        terminal::EnterAlternateScreen,
        terminal::DisableLineWrap,
        terminal::SetTitle(WINDOW_TITLE),
        cursor::Hide,
    )
}

fn teardown(out: &mut io::Stdout) -> io::Result<()> {
    execute!(
        out,
        terminal::LeaveAlternateScreen,
        terminal::EnableLineWrap,
        cursor::Show,
    )?;
    terminal::disable_raw_mode()
}

fn run_loop(frame: &mut dyn Frame, out: &mut io::Stdout) -> io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let mut canvas = TermCanvas::new(cols, rows);
    let mut held = HeldKeys::default();
    let frame_period = Duration::from_millis(FRAME_PERIOD_MS);

    log::info!("terminal backend up, {cols}x{rows} cells");

    loop {
        let frame_start = Instant::now();

        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => {
                    let quit = matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
                        || (key.code == KeyCode::Char('c')
                            && key.modifiers.contains(KeyModifiers::CONTROL));
                    if quit && key.kind != KeyEventKind::Release {
                        return Ok(());
                    }
                    let game_key = match key.code {
                        KeyCode::Up => Some(Key::MoveUp),
                        KeyCode::Down => Some(Key::MoveDown),
                        _ => None,
                    };
                    if let Some(game_key) = game_key {
                        match key.kind {
                            KeyEventKind::Press | KeyEventKind::Repeat => held.press(game_key),
                            KeyEventKind::Release => held.release(game_key),
                        }
                    }
                }
                Event::Resize(c, r) => canvas.resize(c, r),
                _ => {}
            }
        }

        frame.advance(&held);
        held.decay();

        frame.render(&mut canvas);
        canvas.buf.present(out)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_period {
            std::thread::sleep(frame_period - elapsed);
        }
    }
}
