//! Glue between the simulation and a host
//!
//! `Game` owns the single `GameState` and implements the host's `Frame`
//! driver: sample held keys into a `TickInput`, run one tick, draw the two
//! rectangles and the score lines.

use crate::host::{Canvas, Color, Frame, InputSource, Key};
use crate::sim::{GameState, TickInput, tick};

/// Score text position (top-left, logical pixels)
const SCORE_POS: (i32, i32) = (10, 20);
/// High score text position
const HIGH_SCORE_POS: (i32, i32) = (10, 40);

/// The running game: one state, advanced and rendered by the host loop
#[derive(Debug, Default)]
pub struct Game {
    state: GameState,
}

impl Game {
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Read access for backends that report scores on exit
    pub fn state(&self) -> &GameState {
        &self.state
    }
}

impl Frame for Game {
    fn advance(&mut self, input: &dyn InputSource) {
        let input = TickInput {
            up: input.is_held(Key::MoveUp),
            down: input.is_held(Key::MoveDown),
        };
        tick(&mut self.state, &input);
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        canvas.clear(Color::BLACK);
        canvas.fill_rect(self.state.paddle.rect, Color::WHITE);
        canvas.fill_rect(self.state.ball.rect, Color::WHITE);

        let score = format!("Score: {}", self.state.score);
        canvas.draw_text(&score, SCORE_POS.0, SCORE_POS.1, Color::WHITE);

        let high = format!("High Score: {}", self.state.high_score);
        canvas.draw_text(&high, HIGH_SCORE_POS.0, HIGH_SCORE_POS.1, Color::WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::Rect;

    /// Scripted input: a fixed held-key answer
    struct ScriptedInput {
        up: bool,
        down: bool,
    }

    impl InputSource for ScriptedInput {
        fn is_held(&self, key: Key) -> bool {
            match key {
                Key::MoveUp => self.up,
                Key::MoveDown => self.down,
            }
        }
    }

    /// Recording canvas for render assertions
    #[derive(Default)]
    struct RecordingCanvas {
        cleared: Option<Color>,
        rects: Vec<(Rect, Color)>,
        texts: Vec<(String, i32, i32, Color)>,
    }

    impl Canvas for RecordingCanvas {
        fn clear(&mut self, color: Color) {
            self.cleared = Some(color);
        }

        fn fill_rect(&mut self, rect: Rect, color: Color) {
            self.rects.push((rect, color));
        }

        fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color) {
            self.texts.push((text.to_string(), x, y, color));
        }
    }

    #[test]
    fn test_advance_samples_held_keys() {
        let mut game = Game::new();
        let start_y = game.state().paddle.rect.y;

        game.advance(&ScriptedInput { up: true, down: false });
        assert_eq!(game.state().paddle.rect.y, start_y - PADDLE_SPEED);

        game.advance(&ScriptedInput { up: false, down: true });
        assert_eq!(game.state().paddle.rect.y, start_y);
    }

    #[test]
    fn test_render_draws_paddle_ball_and_scores() {
        let game = Game::new();
        let mut canvas = RecordingCanvas::default();

        game.render(&mut canvas);

        assert_eq!(canvas.cleared, Some(Color::BLACK));
        assert_eq!(
            canvas.rects,
            vec![
                (game.state().paddle.rect, Color::WHITE),
                (game.state().ball.rect, Color::WHITE),
            ]
        );
        assert_eq!(
            canvas.texts,
            vec![
                ("Score: 0".to_string(), 10, 20, Color::WHITE),
                ("High Score: 0".to_string(), 10, 40, Color::WHITE),
            ]
        );
    }

    #[test]
    fn test_render_does_not_mutate_state() {
        let game = Game::new();
        let before = *game.state();
        let mut canvas = RecordingCanvas::default();
        game.render(&mut canvas);
        assert_eq!(*game.state(), before);
    }
}
