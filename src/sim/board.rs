//! Brick grid generation and bookkeeping
//!
//! Every level deals the same R x C grid, centered horizontally and stacked
//! down from a fixed top offset. Layout is validated once; building a board
//! from a validated layout cannot fail.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Brick;
use crate::config::{GameConfig, PlayArea};
use crate::consts::BRICK_PALETTE;
use crate::error::ConfigError;

/// Row color, cycling through the palette
#[inline]
pub fn brick_color(row: u32) -> u32 {
    BRICK_PALETTE[row as usize % BRICK_PALETTE.len()]
}

/// Validated grid geometry for a play area
#[derive(Debug, Clone, PartialEq)]
pub struct BoardLayout {
    /// Top-left corner of brick (0, 0)
    origin: Vec2,
    brick_size: Vec2,
    /// Distance between neighbouring brick corners
    pitch: Vec2,
    rows: u32,
    cols: u32,
}

impl BoardLayout {
    /// Validate `config` against `area` and compute the grid placement
    pub fn new(config: &GameConfig, area: &PlayArea) -> Result<Self, ConfigError> {
        if let Err(err) = config.validate().and_then(|_| area.validate(config)) {
            log::warn!("Rejected board configuration: {}", err);
            return Err(err);
        }

        let origin = Vec2::new(
            (area.width - config.grid_width()) / 2.0,
            area.bricks_top(config),
        );
        let brick_size = Vec2::new(config.brick_width, config.brick_height);
        Ok(Self {
            origin,
            brick_size,
            pitch: brick_size + Vec2::splat(config.brick_spacing),
            rows: config.brick_rows,
            cols: config.brick_cols,
        })
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Deal a full board for `level`, bricks in row-major order
    pub fn build(&self, level: u32) -> Board {
        let mut bricks = Vec::with_capacity((self.rows * self.cols) as usize);
        for row in 0..self.rows {
            for col in 0..self.cols {
                bricks.push(Brick {
                    id: row * self.cols + col,
                    row,
                    col,
                    pos: self.origin + self.pitch * Vec2::new(col as f32, row as f32),
                    size: self.brick_size,
                    color: brick_color(row),
                    destroyed: false,
                });
            }
        }
        log::debug!("Built {}x{} board for level {}", self.rows, self.cols, level);

        Board {
            level,
            rows: self.rows,
            cols: self.cols,
            bricks,
        }
    }
}

/// Build a fresh board, reporting malformed configuration
pub fn build_board(level: u32, area: &PlayArea, config: &GameConfig) -> Result<Board, ConfigError> {
    Ok(BoardLayout::new(config, area)?.build(level))
}

/// The bricks of one level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub level: u32,
    pub rows: u32,
    pub cols: u32,
    /// Row-major; index == id
    pub bricks: Vec<Brick>,
}

impl Board {
    /// Number of bricks still standing
    pub fn remaining(&self) -> usize {
        self.bricks.iter().filter(|b| !b.destroyed).count()
    }

    /// True once every brick is destroyed
    pub fn is_cleared(&self) -> bool {
        self.bricks.iter().all(|b| b.destroyed)
    }

    /// Standing bricks in row-major order
    pub fn standing(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| !b.destroyed)
    }

    /// Mark a brick destroyed. Returns false if it was already gone or unknown.
    pub fn destroy(&mut self, id: u32) -> bool {
        match self.bricks.get_mut(id as usize) {
            Some(brick) if !brick.destroyed => {
                brick.destroyed = true;
                true
            }
            _ => false,
        }
    }
}
