//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per tick, velocities in units per tick
//! - Seeded RNG only
//! - Stable iteration order (bricks in row-major order)
//! - No rendering or platform dependencies

pub mod board;
pub mod collision;
pub mod geometry;
pub mod state;
pub mod tick;

pub use board::{Board, BoardLayout, brick_color, build_board};
pub use collision::{Resolution, ball_lost, hit_offset, resolve};
pub use geometry::{Rect, clamp, rects_overlap};
pub use state::{Ball, Brick, GameEvent, GamePhase, GameState, Paddle, Wall};
pub use tick::{TickInput, tick};
