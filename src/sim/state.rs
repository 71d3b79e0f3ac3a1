//! Game state and core simulation types
//!
//! `GameState` is the single owner of session phase, score, level and the
//! board. Everything else reads it or receives events from it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::board::{Board, BoardLayout};
use super::geometry::{Rect, clamp};
use crate::config::{GameConfig, PlayArea, ReplayPolicy};
use crate::error::ConfigError;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No session yet, waiting for the first start trigger
    Idle,
    /// Active gameplay, ticks advance the simulation
    Playing,
    /// Ball fell out, waiting for a replay trigger
    GameOver,
}

/// Wall the ball bounced off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Left,
    Right,
    Top,
}

/// Discrete things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off a side or the top of the play area
    WallHit { wall: Wall },
    /// Ball bounced off the paddle at the given hit offset (0 = left edge, 1 = right edge)
    PaddleHit { offset: f32 },
    /// Brick with this id was destroyed
    BrickDestroyed { id: u32 },
    /// Last brick went down; play continues on `level`
    LevelCleared { level: u32 },
    /// Ball dropped past the bottom of the play area
    BallLost,
    /// Session ended with this final score
    GameOver { score: u64 },
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    /// Units per tick
    pub vel: Vec2,
    /// Bounding box side length
    pub size: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self { pos, vel, size }
    }

    pub fn bounds(&self) -> Rect {
        Rect::square(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size * 0.5)
    }

    /// Advance one tick (forward Euler, no substeps)
    #[inline]
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge (fixed for the session)
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn bounds(&self) -> Rect {
        Rect::new(Vec2::new(self.x, self.top), Vec2::new(self.width, self.height))
    }

    /// Move the left edge to `target`, kept inside `[0, area_width - width]`
    pub fn move_to(&mut self, target: f32, area_width: f32) {
        self.x = clamp(target, 0.0, area_width - self.width);
    }
}

/// A brick (geometry fixed at creation, only `destroyed` changes)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    /// `row * cols + col`, stable for the level
    pub id: u32,
    pub row: u32,
    pub col: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// 0xRRGGBB, derived from the row
    pub color: u32,
    pub destroyed: bool,
}

impl Brick {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub area: PlayArea,
    /// Validated brick layout, reused for every level
    layout: BoardLayout,
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub phase: GamePhase,
    pub score: u64,
    /// Best score seen in this process, updated live
    pub high_score: u64,
    /// Current level (1-based)
    pub level: u32,
    /// Ticks simulated in the current session
    pub time_ticks: u64,
    pub ball: Ball,
    pub paddle: Paddle,
    pub board: Board,
}

impl GameState {
    /// Create an idle game, validating the configuration against the play area
    pub fn new(config: GameConfig, area: PlayArea, seed: u64) -> Result<Self, ConfigError> {
        let layout = BoardLayout::new(&config, &area)?;
        let board = layout.build(1);
        let paddle = Paddle {
            x: area.width / 2.0 - config.paddle_width / 2.0,
            top: area.paddle_top(&config),
            width: config.paddle_width,
            height: config.paddle_height,
        };
        let ball = Ball::new(start_position(&config, &area), Vec2::ZERO, config.ball_size);

        Ok(Self {
            config,
            area,
            layout,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            score: 0,
            high_score: 0,
            level: 1,
            time_ticks: 0,
            ball,
            paddle,
            board,
        })
    }

    /// Enter Playing from Idle or GameOver.
    ///
    /// Resets score, ball and paddle and deals a fresh board. Calling this
    /// while already playing does nothing.
    pub fn start_session(&mut self) {
        match self.phase {
            GamePhase::Playing => return,
            GamePhase::GameOver => {
                if self.config.replay_policy == ReplayPolicy::RestartAtLevelOne {
                    self.level = 1;
                }
            }
            GamePhase::Idle => {}
        }

        self.score = 0;
        self.time_ticks = 0;
        self.board = self.layout.build(self.level);
        self.reset_entities();
        self.phase = GamePhase::Playing;
        log::info!(
            "Session started at level {} (high score {})",
            self.level,
            self.high_score
        );
    }

    /// Put ball and paddle back at their start positions.
    ///
    /// The ball always launches upward; its horizontal direction is random.
    pub fn reset_entities(&mut self) {
        let speed = self.config.ball_speed;
        let vx = if self.rng.random_bool(0.5) { speed } else { -speed };
        self.ball = Ball::new(
            start_position(&self.config, &self.area),
            Vec2::new(vx, -speed),
            self.config.ball_size,
        );
        self.paddle.x = self.area.width / 2.0 - self.paddle.width / 2.0;
    }

    /// Credit one destroyed brick
    pub fn award_brick(&mut self) {
        self.score += self.config.brick_score;
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }

    /// Move to the next level with a full board; score carries over
    pub fn advance_level(&mut self) {
        self.level += 1;
        self.board = self.layout.build(self.level);
        self.reset_entities();
        log::info!("Level cleared, advancing to level {} (score {})", self.level, self.score);
    }

    /// Playing -> GameOver; score freezes
    pub fn end_session(&mut self) {
        self.phase = GamePhase::GameOver;
        log::info!(
            "Game over at level {} with score {} (high score {})",
            self.level,
            self.score,
            self.high_score
        );
    }
}

/// Ball start: horizontally centered, at a fixed fraction of the height
fn start_position(config: &GameConfig, area: &PlayArea) -> Vec2 {
    Vec2::new(
        area.width / 2.0 - config.ball_size / 2.0,
        area.height * config.ball_start_height_ratio,
    )
}
