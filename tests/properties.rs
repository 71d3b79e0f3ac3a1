//! Property tests: invariants that must hold for any input sequence.

use brickfall::sim::{GameEvent, GamePhase};
use brickfall::{Engine, GameConfig, PlayArea};
use glam::Vec2;
use proptest::prelude::*;

const WIDTH: f32 = 400.0;
const HEIGHT: f32 = 800.0;

fn engine(seed: u64) -> Engine {
    let mut engine = Engine::with_seed(GameConfig::default(), PlayArea::new(WIDTH, HEIGHT), seed)
        .expect("default config fits");
    engine.start_session();
    engine
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn paddle_always_within_play_area(
        seed in any::<u64>(),
        targets in prop::collection::vec(-2000.0f32..2000.0, 1..200),
    ) {
        let mut engine = engine(seed);
        for target in targets {
            engine.set_paddle_target(target);
            let snap = engine.tick();
            prop_assert!(snap.paddle.x >= 0.0);
            prop_assert!(snap.paddle.x <= WIDTH - 120.0);
        }
    }

    #[test]
    fn ball_stays_between_side_walls(
        seed in any::<u64>(),
        x in 0.0f32..380.0,
        y in 20.0f32..700.0,
        vx in -6.0f32..6.0,
        down in any::<bool>(),
        targets in prop::collection::vec(0.0f32..280.0, 1..400),
    ) {
        let mut engine = engine(seed);
        {
            let state = engine.state_mut();
            state.ball.pos = Vec2::new(x, y);
            state.ball.vel = Vec2::new(vx, if down { 6.0 } else { -6.0 });
        }
        for target in targets {
            engine.set_paddle_target(target);
            let snap = engine.tick();
            prop_assert!(snap.ball.x >= 0.0, "ball left edge {} past left wall", snap.ball.x);
            prop_assert!(snap.ball.x + 20.0 <= WIDTH, "ball right edge {} past right wall", snap.ball.x + 20.0);
            if snap.events.iter().any(|e| matches!(e, GameEvent::WallHit { .. })) {
                prop_assert!(snap.ball.y >= 0.0);
            }
        }
    }

    #[test]
    fn score_tracks_destroyed_bricks(
        seed in any::<u64>(),
        frames in 200usize..3000,
    ) {
        let mut engine = engine(seed);
        engine.set_idle_mode(true);
        let mut destroyed = 0u64;
        let mut best = 0u64;
        for _ in 0..frames {
            let snap = engine.tick();
            destroyed += snap
                .events
                .iter()
                .filter(|e| matches!(e, GameEvent::BrickDestroyed { .. }))
                .count() as u64;
            best = best.max(snap.score);
            prop_assert_eq!(snap.score, destroyed * 10);
            prop_assert_eq!(snap.high_score, best);
        }
    }

    #[test]
    fn game_over_happens_at_most_once(
        seed in any::<u64>(),
        targets in prop::collection::vec(0.0f32..280.0, 1..1500),
    ) {
        let mut engine = engine(seed);
        let mut game_overs = 0;
        for target in targets {
            let was_over = engine.phase() == GamePhase::GameOver;
            let before = engine.snapshot();
            engine.set_paddle_target(target);
            let snap = engine.tick();
            game_overs += snap
                .events
                .iter()
                .filter(|e| matches!(e, GameEvent::GameOver { .. }))
                .count();
            if was_over {
                prop_assert_eq!(&snap, &before);
            }
        }
        prop_assert!(game_overs <= 1);
        if game_overs == 1 {
            prop_assert_eq!(engine.phase(), GamePhase::GameOver);
        }
    }
}
