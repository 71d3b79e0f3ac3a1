//! Per-frame simulation tick
//!
//! Core game loop that advances the simulation by exactly one step.

use super::collision::{ball_lost, resolve};
use super::state::{GameEvent, GamePhase, GameState};

/// Input sampled once per tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Desired paddle left edge (last write wins, clamped on apply)
    pub paddle_target: Option<f32>,
    /// Idle/demo mode - the paddle follows the ball on its own
    pub idle_mode: bool,
}

/// Advance the game state by one tick.
///
/// Order within a tick: paddle input, integration, walls, paddle, bricks,
/// level-clear check, fell-below check. Returns what happened; outside of
/// `Playing` nothing happens and the result is empty.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    if state.phase != GamePhase::Playing {
        return Vec::new();
    }

    state.time_ticks += 1;

    let target = if input.idle_mode {
        Some(autopilot_target(state))
    } else {
        input.paddle_target
    };
    if let Some(x) = target {
        state.paddle.move_to(x, state.area.width);
    }

    state.ball.integrate();

    let resolution = resolve(
        &state.ball,
        &state.paddle,
        &state.board,
        &state.area,
        state.config.ball_speed,
    );
    state.ball = resolution.ball;

    if let Some(id) = resolution.destroyed_brick() {
        if state.board.destroy(id) {
            state.award_brick();
            log::debug!(
                "Brick {} destroyed, {} left (score {})",
                id,
                state.board.remaining(),
                state.score
            );
        }
    }
    let mut events = resolution.events;

    // Checked synchronously: the new board is in place before the next tick
    if state.board.is_cleared() {
        state.advance_level();
        events.push(GameEvent::LevelCleared { level: state.level });
    }

    if ball_lost(&state.ball, &state.area) {
        state.end_session();
        events.push(GameEvent::BallLost);
        events.push(GameEvent::GameOver { score: state.score });
    }

    events
}

/// Paddle left edge that keeps the paddle under the ball.
///
/// A slowly drifting offset varies the hit position so the demo does not
/// settle into a straight vertical loop.
fn autopilot_target(state: &GameState) -> f32 {
    let time_factor = state.time_ticks as f32 * 0.01;
    let wobble = time_factor.sin() * 0.3 + (time_factor * 0.7).sin() * 0.15;
    let offset = wobble * state.paddle.width;
    state.ball.center().x + offset - state.paddle.width / 2.0
}
