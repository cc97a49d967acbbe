//! Collision response for walls and paddle
//!
//! Two separate steps with different policies, preserved deliberately:
//! walls force-set a velocity sign as a fixed rebound, paddle contact is a
//! true sign flip. Do not unify them.

use crate::consts::*;

use super::state::{GameState, Rect};

/// Resolve wall contact after motion, in a fixed order.
///
/// Right wall loses the round; left wall rebounds with `dx` forced to
/// `+BALL_SPEED` regardless of the incoming sign. Top and bottom are checked
/// independently, so a horizontal and a vertical response can both fire in
/// the same tick.
pub fn collide_walls(state: &mut GameState) {
    if state.ball.rect.x >= SCREEN_WIDTH {
        log::debug!("round lost at score {}", state.score);
        state.reset_round();
    } else if state.ball.rect.x <= 0 {
        state.ball.vel.x = BALL_SPEED;
    }
    if state.ball.rect.y <= 0 {
        state.ball.vel.y = BALL_SPEED;
    } else if state.ball.rect.bottom() >= SCREEN_HEIGHT {
        state.ball.vel.y = -BALL_SPEED;
    }
}

/// Ball/paddle overlap test.
///
/// Three edge comparisons only; there is no right-edge check on the ball, so
/// the overlap region is open toward the right wall. Faithful to the original
/// rules, not an oversight to tighten.
#[inline]
pub fn paddle_overlap(ball: &Rect, paddle: &Rect) -> bool {
    ball.right() >= paddle.x && ball.bottom() >= paddle.y && ball.y <= paddle.bottom()
}

/// Resolve paddle contact after wall contact.
///
/// On overlap the horizontal velocity flips and the score increments. Runs
/// every tick with no de-duplication: a ball lingering in the overlap region
/// scores again each tick.
pub fn collide_paddle(state: &mut GameState) {
    if paddle_overlap(&state.ball.rect, &state.paddle.rect) {
        state.ball.vel.x = -state.ball.vel.x;
        state.score += 1;
        if state.score > state.high_score {
            state.high_score = state.score;
            log::debug!("new high score: {}", state.high_score);
        }
    }
}
