//! Fixed timestep simulation tick
//!
//! One tick per frame, always in the same order: paddle input, ball motion,
//! wall response, paddle response.

use super::collision::{collide_paddle, collide_walls};
use super::state::GameState;

/// Held-key input for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// "Move up" key currently held
    pub up: bool,
    /// "Move down" key currently held
    pub down: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.paddle.apply_input(input.up, input.down);
    state.ball.advance();
    collide_walls(state);
    collide_paddle(state);
}

#[cfg(test)]
mod tests {
    use glam::IVec2;
    use proptest::prelude::*;

    use super::*;
    use crate::consts::*;
    use crate::sim::state::Rect;

    #[test]
    fn test_idle_tick_moves_only_the_ball() {
        let mut state = GameState::new();
        // Park the ball far from every boundary and from the paddle
        state.ball.rect.x = 300;
        state.ball.rect.y = 240;
        state.ball.vel = IVec2::new(5, -5);
        let before = state;

        tick(&mut state, &TickInput::default());

        assert_eq!(state.ball.rect.x, before.ball.rect.x + 5);
        assert_eq!(state.ball.rect.y, before.ball.rect.y - 5);
        assert_eq!(state.ball.vel, before.ball.vel);
        assert_eq!(state.paddle, before.paddle);
        assert_eq!(state.score, before.score);
        assert_eq!(state.high_score, before.high_score);
    }

    #[test]
    fn test_held_keys_move_paddle_each_tick() {
        let mut state = GameState::new();
        let start_y = state.paddle.rect.y;

        let input = TickInput { up: false, down: true };
        tick(&mut state, &input);
        tick(&mut state, &input);

        assert_eq!(state.paddle.rect.y, start_y + 2 * PADDLE_SPEED);
    }

    #[test]
    fn test_motion_runs_before_wall_response() {
        // Ball one step short of the right wall: motion carries it past the
        // boundary and the same tick resets the round.
        let mut state = GameState::new();
        state.ball.rect.x = SCREEN_WIDTH - 5;
        state.ball.rect.y = 50;
        state.score = 3;
        state.high_score = 3;
        // Move the paddle clear so the reset ball cannot graze it
        state.paddle.rect.y = SCREEN_HEIGHT - state.paddle.rect.h;

        tick(&mut state, &TickInput::default());

        assert_eq!(state.ball.rect.x, 0);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 3);
    }

    #[test]
    fn test_paddle_response_runs_after_wall_response() {
        // Ball touching the bottom wall inside the paddle column: the wall
        // flips dy upward and the paddle contact still scores the same tick.
        let mut state = GameState::new();
        state.paddle.rect = Rect::new(600, 380, 15, 100);
        state.ball.rect = Rect::new(598, 460, 15, 15);
        state.ball.vel = IVec2::new(5, 5);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.ball.vel.y, -BALL_SPEED);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_tick_is_deterministic() {
        let mut a = GameState::new();
        let mut b = GameState::new();
        let inputs = [
            TickInput { up: true, down: false },
            TickInput::default(),
            TickInput { up: false, down: true },
            TickInput { up: true, down: true },
        ];
        for _ in 0..200 {
            for input in &inputs {
                tick(&mut a, input);
                tick(&mut b, input);
            }
        }
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_in_bounds(
            start_y in -200..SCREEN_HEIGHT + 200,
            presses in prop::collection::vec((any::<bool>(), any::<bool>()), 1..100),
        ) {
            let mut state = GameState::new();
            state.paddle.rect.y = start_y.clamp(0, SCREEN_HEIGHT - state.paddle.rect.h);
            for (up, down) in presses {
                tick(&mut state, &TickInput { up, down });
                prop_assert!(state.paddle.rect.y >= 0);
                prop_assert!(state.paddle.rect.bottom() <= SCREEN_HEIGHT);
            }
        }

        #[test]
        fn prop_high_score_never_below_score(
            presses in prop::collection::vec((any::<bool>(), any::<bool>()), 1..500),
        ) {
            let mut state = GameState::new();
            for (up, down) in presses {
                tick(&mut state, &TickInput { up, down });
                prop_assert!(state.high_score >= state.score);
            }
        }

        #[test]
        fn prop_velocity_magnitude_is_constant(
            presses in prop::collection::vec((any::<bool>(), any::<bool>()), 1..500),
        ) {
            let mut state = GameState::new();
            for (up, down) in presses {
                tick(&mut state, &TickInput { up, down });
                prop_assert_eq!(state.ball.vel.x.abs(), BALL_SPEED);
                prop_assert_eq!(state.ball.vel.y.abs(), BALL_SPEED);
            }
        }
    }
}
