//! Engine facade for the presentation and input layers
//!
//! The host owns one `Engine`, feeds it paddle targets from its input
//! adapter, calls `tick()` once per frame and draws the returned `Snapshot`.
//! Nothing outside the engine mutates simulation state directly.

use glam::Vec2;
use serde::Serialize;

use crate::config::{GameConfig, PlayArea};
use crate::error::ConfigError;
use crate::highscores::HighScores;
use crate::sim::{Brick, GameEvent, GamePhase, GameState, TickInput, clamp, tick};

/// Render-ready view of the engine after a tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Ball top-left corner
    pub ball: Vec2,
    /// Paddle top-left corner
    pub paddle: Vec2,
    /// All bricks of the current board, destroyed ones flagged
    pub bricks: Vec<Brick>,
    pub score: u64,
    pub high_score: u64,
    pub level: u32,
    pub phase: GamePhase,
    /// Ticks simulated in the current session
    pub tick: u64,
    /// What happened during the tick that produced this snapshot
    pub events: Vec<GameEvent>,
}

/// Brick-breaker engine
#[derive(Debug, Clone)]
pub struct Engine {
    state: GameState,
    input: TickInput,
    leaderboard: HighScores,
    sessions: u32,
}

impl Engine {
    /// Create an idle engine with a random seed
    pub fn new(config: GameConfig, area: PlayArea) -> Result<Self, ConfigError> {
        Self::with_seed(config, area, rand::random())
    }

    /// Create an idle engine with a fixed seed (reproducible launches)
    pub fn with_seed(config: GameConfig, area: PlayArea, seed: u64) -> Result<Self, ConfigError> {
        let state = GameState::new(config, area, seed)?;
        log::info!(
            "Engine ready: {}x{} play area, seed {}",
            area.width,
            area.height,
            seed
        );
        Ok(Self {
            state,
            input: TickInput::default(),
            leaderboard: HighScores::new(),
            sessions: 0,
        })
    }

    /// Set the desired paddle left edge. Clamped to the play area; the
    /// latest value wins and is applied on the next tick.
    pub fn set_paddle_target(&mut self, x: f32) {
        let max = self.state.area.width - self.state.paddle.width;
        self.input.paddle_target = Some(clamp(x, 0.0, max));
    }

    /// Touch adapter: center the paddle on the finger's x position
    pub fn set_paddle_center(&mut self, touch_x: f32) {
        self.set_paddle_target(touch_x - self.state.paddle.width / 2.0);
    }

    /// Let the paddle follow the ball by itself (attract/demo mode)
    pub fn set_idle_mode(&mut self, enabled: bool) {
        self.input.idle_mode = enabled;
    }

    /// Start (or restart after game over) a session.
    ///
    /// No effect while a session is already running.
    pub fn start_session(&mut self) {
        if self.state.phase == GamePhase::Playing {
            return;
        }
        self.state.start_session();
        // A stale target from the previous session would yank the reset paddle
        self.input.paddle_target = None;
        self.sessions += 1;
    }

    /// Advance one tick and return the resulting snapshot.
    ///
    /// Outside of `Playing` this is a no-op that returns the current view.
    pub fn tick(&mut self) -> Snapshot {
        let events = tick(&mut self.state, &self.input);
        for event in &events {
            match event {
                // The new level starts with a centered paddle; drop the old target
                GameEvent::LevelCleared { .. } => self.input.paddle_target = None,
                GameEvent::GameOver { score } => {
                    self.leaderboard.add_score(*score, self.state.level, self.sessions);
                }
                _ => {}
            }
        }
        self.build_snapshot(events)
    }

    /// Current view without advancing
    pub fn snapshot(&self) -> Snapshot {
        self.build_snapshot(Vec::new())
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for test fixtures. Hosts steer the game through
    /// `set_paddle_target` and `start_session` only.
    #[doc(hidden)]
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Finished sessions, best first
    pub fn leaderboard(&self) -> &HighScores {
        &self.leaderboard
    }

    fn build_snapshot(&self, events: Vec<GameEvent>) -> Snapshot {
        let state = &self.state;
        Snapshot {
            ball: state.ball.pos,
            paddle: Vec2::new(state.paddle.x, state.paddle.top),
            bricks: state.board.bricks.clone(),
            score: state.score,
            high_score: state.high_score,
            level: state.level,
            phase: state.phase,
            tick: state.time_ticks,
            events,
        }
    }
}
