//! Collision detection and response
//!
//! Axis-aligned bounce model: walls and the paddle snap the ball back to the
//! surface it struck, bricks flip one velocity component. Resolution is a
//! pure function of the entities; it reports what happened as events and
//! leaves scoring and brick bookkeeping to the game state.

use super::board::Board;
use super::geometry::clamp;
use super::state::{Ball, GameEvent, Paddle, Wall};
use crate::config::PlayArea;

/// Result of resolving one tick of collisions
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Ball after all bounces
    pub ball: Ball,
    /// Wall, paddle and brick hits, in resolution order
    pub events: Vec<GameEvent>,
}

impl Resolution {
    /// Id of the brick destroyed this tick, if any
    pub fn destroyed_brick(&self) -> Option<u32> {
        self.events.iter().find_map(|e| match e {
            GameEvent::BrickDestroyed { id } => Some(*id),
            _ => None,
        })
    }
}

/// Resolve an already-integrated ball against walls, paddle and bricks.
///
/// Order is fixed: walls, then paddle, then bricks. Each stage sees the ball
/// as corrected by the previous one.
pub fn resolve(
    ball: &Ball,
    paddle: &Paddle,
    board: &Board,
    area: &PlayArea,
    ball_speed: f32,
) -> Resolution {
    let mut ball = *ball;
    let mut events = Vec::new();

    for wall in resolve_walls(&mut ball, area.width) {
        events.push(GameEvent::WallHit { wall });
    }
    if let Some(offset) = resolve_paddle(&mut ball, paddle, ball_speed) {
        events.push(GameEvent::PaddleHit { offset });
    }
    if let Some(id) = resolve_bricks(&mut ball, board) {
        events.push(GameEvent::BrickDestroyed { id });
    }

    Resolution { ball, events }
}

/// Bounce off the side and top walls.
///
/// The ball is snapped flush with the wall and sent back into the play area.
/// There is no bottom wall.
pub fn resolve_walls(ball: &mut Ball, area_width: f32) -> Vec<Wall> {
    let bounds = ball.bounds();
    let mut walls = Vec::new();

    if bounds.left() <= 0.0 {
        ball.pos.x = 0.0;
        ball.vel.x = ball.vel.x.abs();
        walls.push(Wall::Left);
    } else if bounds.right() >= area_width {
        ball.pos.x = area_width - ball.size;
        ball.vel.x = -ball.vel.x.abs();
        walls.push(Wall::Right);
    }

    if bounds.top() <= 0.0 {
        ball.pos.y = 0.0;
        ball.vel.y = ball.vel.y.abs();
        walls.push(Wall::Top);
    }

    walls
}

/// Fractional contact position across the paddle (0 = left edge, 1 = right edge)
pub fn hit_offset(ball: &Ball, paddle: &Paddle) -> f32 {
    clamp((ball.center().x - paddle.x) / paddle.width, 0.0, 1.0)
}

/// Bounce off the paddle.
///
/// Only a descending ball can hit. The outgoing horizontal speed depends on
/// where it struck: straight up at the center, `±ball_speed` at the edges.
/// Returns the hit offset.
pub fn resolve_paddle(ball: &mut Ball, paddle: &Paddle, ball_speed: f32) -> Option<f32> {
    if ball.vel.y <= 0.0 || !ball.bounds().overlaps(&paddle.bounds()) {
        return None;
    }

    let offset = hit_offset(ball, paddle);
    ball.vel.y = -ball.vel.y;
    ball.pos.y = paddle.top - ball.size;
    ball.vel.x = (offset - 0.5) * ball_speed * 2.0;
    log::debug!("Paddle hit at offset {:.2}, vx {:.2}", offset, ball.vel.x);
    Some(offset)
}

/// Bounce off the first standing brick the ball overlaps (row-major order).
///
/// At most one brick per tick. The bounce axis is whichever of the x/y
/// center offsets is larger. Returns the id of the struck brick; marking it
/// destroyed is the caller's job.
pub fn resolve_bricks(ball: &mut Ball, board: &Board) -> Option<u32> {
    let bounds = ball.bounds();
    let brick = board.standing().find(|b| bounds.overlaps(&b.bounds()))?;

    let delta = ball.center() - brick.center();
    if delta.x.abs() > delta.y.abs() {
        ball.vel.x = -ball.vel.x;
    } else {
        ball.vel.y = -ball.vel.y;
    }
    Some(brick.id)
}

/// True once the ball's top edge has dropped below the play area
pub fn ball_lost(ball: &Ball, area: &PlayArea) -> bool {
    ball.bounds().top() > area.height
}
