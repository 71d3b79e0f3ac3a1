//! Configuration error types

use thiserror::Error;

/// Startup-time configuration problems.
///
/// The simulation itself is infallible; everything that can go wrong is
/// caught here before the first board is built.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A size or speed that must be strictly positive is not
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    /// An offset or spacing that must not be negative is
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    /// Brick grid has no rows or no columns
    #[error("brick grid must have at least one row and column, got {rows}x{cols}")]
    EmptyGrid { rows: u32, cols: u32 },

    /// Brick grid does not fit horizontally
    #[error("brick grid is {grid_width} wide but the play area is only {area_width}")]
    GridTooWide { grid_width: f32, area_width: f32 },

    /// Brick grid reaches down into the paddle row
    #[error("brick grid bottom {grid_bottom} reaches the paddle top {paddle_top}")]
    GridOverlapsPaddle { grid_bottom: f32, paddle_top: f32 },

    /// Paddle is wider than the play area
    #[error("paddle is {paddle_width} wide but the play area is only {area_width}")]
    PaddleTooWide { paddle_width: f32, area_width: f32 },

    /// Ball is wider than the play area
    #[error("ball is {ball_size} wide but the play area is only {area_width}")]
    BallTooWide { ball_size: f32, area_width: f32 },

    /// Ball cannot pass between the brick grid and the paddle
    #[error("gap of {gap} between bricks and paddle is smaller than the ball ({ball_size})")]
    BallGapTooSmall { gap: f32, ball_size: f32 },

    /// Brick grid has more bricks than a board can index
    #[error("brick grid {rows}x{cols} exceeds {max} bricks")]
    GridTooLarge { rows: u32, cols: u32, max: u32 },

    /// Paddle would sit above the top of the play area
    #[error("paddle top {paddle_top} is outside the play area")]
    PaddleOutOfBounds { paddle_top: f32 },

    /// Ball start ratio outside (0, 1)
    #[error("ball start height ratio must be within (0, 1), got {0}")]
    BallStartOutOfRange(f32),

    /// Configuration file could not be parsed
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
