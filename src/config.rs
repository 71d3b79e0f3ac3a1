//! Game configuration and play-area geometry
//!
//! Supplied once at startup. Defaults reproduce the stock arcade tuning;
//! a JSON document may override any subset of fields.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// What level a new session starts at after a game over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ReplayPolicy {
    /// Every new session starts from level 1
    #[default]
    RestartAtLevelOne,
    /// A new session continues from the last level reached
    ResumeLevel,
}

impl ReplayPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplayPolicy::RestartAtLevelOne => "restart",
            ReplayPolicy::ResumeLevel => "resume",
        }
    }
}

/// Tunable game constants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Ball ===
    /// Ball bounding-box side length
    pub ball_size: f32,
    /// Base ball speed (units per tick)
    pub ball_speed: f32,
    /// Ball start y as a fraction of play-area height
    pub ball_start_height_ratio: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Gap between paddle bottom and play-area bottom
    pub paddle_bottom_offset: f32,

    // === Bricks ===
    pub brick_rows: u32,
    pub brick_cols: u32,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_spacing: f32,
    /// Top of the first brick row, below the top safe-area inset
    pub brick_top_offset: f32,

    // === Scoring ===
    /// Points per destroyed brick
    pub brick_score: u64,
    /// Level chosen when a session restarts after game over
    pub replay_policy: ReplayPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ball_size: BALL_SIZE,
            ball_speed: BALL_SPEED,
            ball_start_height_ratio: BALL_START_HEIGHT_RATIO,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,

            brick_rows: BRICK_ROWS,
            brick_cols: BRICK_COLS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_spacing: BRICK_SPACING,
            brick_top_offset: BRICK_TOP_OFFSET,

            brick_score: BRICK_SCORE,
            replay_policy: ReplayPolicy::default(),
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON configuration and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        log::info!("Loaded configuration ({} replay)", config.replay_policy.as_str());
        Ok(config)
    }

    /// Check values that do not depend on the play area
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("ball_size", self.ball_size),
            ("ball_speed", self.ball_speed),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
        ];
        for (field, value) in positive {
            // Written so NaN fails too
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        for (field, value) in [
            ("brick_spacing", self.brick_spacing),
            ("paddle_bottom_offset", self.paddle_bottom_offset),
            ("brick_top_offset", self.brick_top_offset),
        ] {
            if !(value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }
        if self.brick_rows == 0 || self.brick_cols == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.brick_rows,
                cols: self.brick_cols,
            });
        }
        match self.brick_rows.checked_mul(self.brick_cols) {
            Some(count) if count <= MAX_BRICKS => {}
            _ => {
                return Err(ConfigError::GridTooLarge {
                    rows: self.brick_rows,
                    cols: self.brick_cols,
                    max: MAX_BRICKS,
                });
            }
        }
        if !(self.ball_start_height_ratio > 0.0 && self.ball_start_height_ratio < 1.0) {
            return Err(ConfigError::BallStartOutOfRange(self.ball_start_height_ratio));
        }
        Ok(())
    }

    /// Total width of one brick row including inner spacing
    pub fn grid_width(&self) -> f32 {
        let cols = self.brick_cols as f32;
        cols * self.brick_width + (cols - 1.0).max(0.0) * self.brick_spacing
    }

    /// Total height of the brick grid including inner spacing
    pub fn grid_height(&self) -> f32 {
        let rows = self.brick_rows as f32;
        rows * self.brick_height + (rows - 1.0).max(0.0) * self.brick_spacing
    }
}

/// Safe-area insets reported by the host display
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SafeAreaInsets {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

/// The rectangle the simulation runs in
///
/// Width and height are the full display size; the insets push the brick
/// grid down and the paddle up so neither sits under a notch or home bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
    pub insets: SafeAreaInsets,
}

impl PlayArea {
    /// Play area with no safe-area insets
    pub fn new(width: f32, height: f32) -> Self {
        Self::from_display(width, height, SafeAreaInsets::default())
    }

    /// Derive the play area from the host display size and safe-area insets
    pub fn from_display(width: f32, height: f32, insets: SafeAreaInsets) -> Self {
        Self {
            width,
            height,
            insets,
        }
    }

    /// Y coordinate of the paddle's top edge
    pub fn paddle_top(&self, config: &GameConfig) -> f32 {
        self.height - config.paddle_height - config.paddle_bottom_offset - self.insets.bottom
    }

    /// Y coordinate of the first brick row
    pub fn bricks_top(&self, config: &GameConfig) -> f32 {
        config.brick_top_offset + self.insets.top
    }

    /// Check that the configured entities fit inside this play area
    pub fn validate(&self, config: &GameConfig) -> Result<(), ConfigError> {
        for (field, value) in [("play_area.width", self.width), ("play_area.height", self.height)] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if config.paddle_width > self.width {
            return Err(ConfigError::PaddleTooWide {
                paddle_width: config.paddle_width,
                area_width: self.width,
            });
        }
        if config.ball_size > self.width {
            return Err(ConfigError::BallTooWide {
                ball_size: config.ball_size,
                area_width: self.width,
            });
        }
        let paddle_top = self.paddle_top(config);
        if paddle_top < 0.0 {
            return Err(ConfigError::PaddleOutOfBounds { paddle_top });
        }
        let grid_width = config.grid_width();
        if grid_width > self.width {
            return Err(ConfigError::GridTooWide {
                grid_width,
                area_width: self.width,
            });
        }
        let grid_bottom = self.bricks_top(config) + config.grid_height();
        if grid_bottom >= paddle_top {
            return Err(ConfigError::GridOverlapsPaddle {
                grid_bottom,
                paddle_top,
            });
        }
        let gap = paddle_top - grid_bottom;
        if gap < config.ball_size {
            return Err(ConfigError::BallGapTooSmall {
                gap,
                ball_size: config.ball_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.brick_rows, 5);
        assert_eq!(config.brick_cols, 5);
        assert_eq!(config.brick_score, 10);
        assert_eq!(config.replay_policy, ReplayPolicy::RestartAtLevelOne);
    }

    #[test]
    fn test_grid_dimensions() {
        let config = GameConfig::default();
        // 5 * 70 + 4 * 5
        assert_eq!(config.grid_width(), 370.0);
        // 5 * 30 + 4 * 5
        assert_eq!(config.grid_height(), 170.0);
    }

    #[test]
    fn test_partial_json_overrides_defaults() {
        let config = GameConfig::from_json(r#"{ "ball_speed": 8.0, "replay_policy": "ResumeLevel" }"#)
            .expect("config should parse");
        assert_eq!(config.ball_speed, 8.0);
        assert_eq!(config.replay_policy, ReplayPolicy::ResumeLevel);
        assert_eq!(config.paddle_width, PADDLE_WIDTH);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_non_positive_sizes() {
        let config = GameConfig {
            ball_size: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { field: "ball_size", .. })
        ));

        let config = GameConfig {
            brick_width: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_grid() {
        let config = GameConfig {
            brick_cols: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::EmptyGrid { .. })));
    }

    #[test]
    fn test_play_area_derived_positions() {
        let config = GameConfig::default();
        let insets = SafeAreaInsets {
            top: 44.0,
            bottom: 34.0,
            ..Default::default()
        };
        let area = PlayArea::from_display(400.0, 800.0, insets);
        assert_eq!(area.bricks_top(&config), 144.0);
        // 800 - 15 - 50 - 34
        assert_eq!(area.paddle_top(&config), 701.0);
        assert!(area.validate(&config).is_ok());
    }

    #[test]
    fn test_grid_wider_than_play_area() {
        let config = GameConfig::default();
        let area = PlayArea::new(300.0, 800.0);
        assert!(matches!(
            area.validate(&config),
            Err(ConfigError::GridTooWide { .. })
        ));
    }

    #[test]
    fn test_grid_reaching_paddle() {
        let config = GameConfig::default();
        // paddle top = 330 - 15 - 50 = 265, grid bottom = 100 + 170 = 270
        let area = PlayArea::new(400.0, 330.0);
        assert!(matches!(
            area.validate(&config),
            Err(ConfigError::GridOverlapsPaddle { .. })
        ));
    }

    #[test]
    fn test_replay_policy_names() {
        assert_eq!(ReplayPolicy::ResumeLevel.as_str(), "resume");
        assert_eq!(ReplayPolicy::RestartAtLevelOne.as_str(), "restart");
    }

    #[test]
    fn test_ball_wider_than_play_area() {
        let config = GameConfig {
            ball_size: 450.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        let area = PlayArea::new(400.0, 800.0);
        assert!(matches!(
            area.validate(&config),
            Err(ConfigError::BallTooWide { .. })
        ));
    }

    #[test]
    fn test_ball_must_fit_between_bricks_and_paddle() {
        // paddle top = 300 - 15 - 0 = 285, grid bottom = 100 + 170 = 270
        let config = GameConfig {
            paddle_bottom_offset: 0.0,
            ..Default::default()
        };
        let area = PlayArea::new(400.0, 300.0);
        assert!(matches!(
            area.validate(&config),
            Err(ConfigError::BallGapTooSmall { ball_size: 20.0, .. })
        ));

        // 20 units of room is exactly enough
        let area = PlayArea::new(400.0, 305.0);
        assert!(area.validate(&config).is_ok());
    }

    #[test]
    fn test_rejects_oversized_grid() {
        let config = GameConfig {
            brick_rows: 100_000,
            brick_cols: 100_000,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::GridTooLarge { .. })));

        let config = GameConfig {
            brick_rows: 1,
            brick_cols: MAX_BRICKS,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
