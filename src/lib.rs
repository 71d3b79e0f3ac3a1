//! Brickfall - A brick-breaker arcade game engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `engine`: Public API consumed by the presentation/input layer
//! - `driver`: Display-synchronized tick stepping
//! - `config`: Startup configuration and play-area geometry
//! - `highscores`: In-memory session leaderboard

pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod highscores;
pub mod sim;

pub use config::{GameConfig, PlayArea, ReplayPolicy, SafeAreaInsets};
pub use driver::TickDriver;
pub use engine::{Engine, Snapshot};
pub use error::ConfigError;
pub use highscores::HighScores;

/// Game configuration constants
pub mod consts {
    /// Frame period the per-tick velocities are tuned for (60 Hz display)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 20.0;
    /// Ball speed in units per tick (both axes at launch)
    pub const BALL_SPEED: f32 = 6.0;
    /// Ball start height as a fraction of play-area height
    pub const BALL_START_HEIGHT_RATIO: f32 = 0.6;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 120.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;
    /// Gap between paddle bottom and play-area bottom (before safe-area inset)
    pub const PADDLE_BOTTOM_OFFSET: f32 = 50.0;

    /// Brick grid defaults
    pub const BRICK_WIDTH: f32 = 70.0;
    pub const BRICK_HEIGHT: f32 = 30.0;
    pub const BRICK_ROWS: u32 = 5;
    pub const BRICK_COLS: u32 = 5;
    pub const BRICK_SPACING: f32 = 5.0;
    /// Top of the first brick row (before safe-area inset)
    pub const BRICK_TOP_OFFSET: f32 = 100.0;
    /// Upper bound on rows * cols
    pub const MAX_BRICKS: u32 = 10_000;

    /// Points awarded per destroyed brick
    pub const BRICK_SCORE: u64 = 10;

    /// Brick row colors (0xRRGGBB), picked by `row % BRICK_PALETTE.len()`
    pub const BRICK_PALETTE: [u32; 5] = [0xff6b6b, 0x4ecdc4, 0x45b7d1, 0xf9ca24, 0x6c5ce7];
}
