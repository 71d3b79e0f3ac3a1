//! Display-synchronized tick driver
//!
//! Hosts call `on_frame` once per display refresh, or hand elapsed wall time
//! to `advance` and let the accumulator turn it into fixed ticks. The driver
//! stops itself when a session ends; stopping twice is harmless.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::engine::{Engine, Snapshot};
use crate::sim::GamePhase;

/// Largest frame delta accepted, so a long stall does not replay seconds of play
const MAX_FRAME_DT: f32 = 0.25;

/// Drives an `Engine` from the host's frame callback
#[derive(Debug, Clone, Default)]
pub struct TickDriver {
    running: bool,
    accumulator: f32,
}

impl TickDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin ticking on subsequent frames
    pub fn start(&mut self) {
        if !self.running {
            log::debug!("Tick driver started");
        }
        self.running = true;
        self.accumulator = 0.0;
    }

    /// Stop ticking immediately. A no-op when already stopped.
    pub fn stop(&mut self) {
        if self.running {
            log::debug!("Tick driver stopped");
        }
        self.running = false;
        self.accumulator = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// One tick for one display frame
    pub fn on_frame(&mut self, engine: &mut Engine) -> Option<Snapshot> {
        if !self.running {
            return None;
        }
        let snapshot = engine.tick();
        if snapshot.phase != GamePhase::Playing {
            self.stop();
        }
        Some(snapshot)
    }

    /// Run as many fixed ticks as `frame_dt` seconds cover (capped at
    /// `MAX_SUBSTEPS`). Returns the snapshot of the last tick run, if any.
    pub fn advance(&mut self, engine: &mut Engine, frame_dt: f32) -> Option<Snapshot> {
        if !self.running {
            return None;
        }
        // A bad timestamp from the host must not poison the accumulator
        let frame_dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += frame_dt;

        let mut last = None;
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let snapshot = engine.tick();
            self.accumulator -= SIM_DT;
            substeps += 1;

            let ended = snapshot.phase != GamePhase::Playing;
            last = Some(snapshot);
            if ended {
                self.stop();
                break;
            }
        }
        last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GameConfig, PlayArea};
    use glam::Vec2;

    fn playing_engine() -> Engine {
        let mut engine = Engine::with_seed(GameConfig::default(), PlayArea::new(400.0, 800.0), 9)
            .expect("default config fits");
        engine.start_session();
        engine
    }

    #[test]
    fn test_stopped_driver_does_not_tick() {
        let mut engine = playing_engine();
        let mut driver = TickDriver::new();
        assert!(driver.on_frame(&mut engine).is_none());
        assert!(driver.advance(&mut engine, 1.0).is_none());
        assert_eq!(engine.snapshot().tick, 0);
    }

    #[test]
    fn test_one_tick_per_frame() {
        let mut engine = playing_engine();
        let mut driver = TickDriver::new();
        driver.start();
        for _ in 0..3 {
            driver.on_frame(&mut engine);
        }
        assert_eq!(engine.snapshot().tick, 3);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut driver = TickDriver::new();
        driver.stop();
        driver.start();
        driver.stop();
        driver.stop();
        assert!(!driver.is_running());
    }

    #[test]
    fn test_advance_runs_fixed_steps() {
        let mut engine = playing_engine();
        let mut driver = TickDriver::new();
        driver.start();
        // Two and a half frames' worth
        driver.advance(&mut engine, SIM_DT * 2.5);
        assert_eq!(engine.snapshot().tick, 2);
        // Leftover half frame plus 0.6 of another
        driver.advance(&mut engine, SIM_DT * 0.6);
        assert_eq!(engine.snapshot().tick, 3);
    }

    #[test]
    fn test_advance_caps_substeps() {
        let mut engine = playing_engine();
        let mut driver = TickDriver::new();
        driver.start();
        driver.advance(&mut engine, 10.0);
        assert_eq!(engine.snapshot().tick, MAX_SUBSTEPS as u64);
    }

    #[test]
    fn test_non_finite_frame_dt_is_ignored() {
        let mut engine = playing_engine();
        let mut driver = TickDriver::new();
        driver.start();
        assert!(driver.advance(&mut engine, f32::NAN).is_none());
        assert!(driver.advance(&mut engine, f32::INFINITY).is_none());
        assert_eq!(engine.snapshot().tick, 0);

        driver.advance(&mut engine, SIM_DT * 1.5);
        assert_eq!(engine.snapshot().tick, 1);
    }

    #[test]
    fn test_stops_on_game_over() {
        let mut engine = playing_engine();
        {
            let state = engine.state_mut();
            state.ball.pos = Vec2::new(10.0, 799.0);
            state.ball.vel = Vec2::new(0.0, 6.0);
        }
        let mut driver = TickDriver::new();
        driver.start();
        let snap = driver.advance(&mut engine, 0.1).expect("one tick ran");
        assert_eq!(snap.phase, GamePhase::GameOver);
        assert_eq!(snap.tick, 1);
        assert!(!driver.is_running());
        assert!(driver.on_frame(&mut engine).is_none());
    }
}
