use anyhow::Result;
use std::time::{Duration, Instant};

/// One frame of game logic, split into the three phases the driver sequences.
///
/// `update` always completes before `resolve`, which always completes before
/// `render`, for every frame.
pub trait FrameLogic {
    /// Advance entity state by `dt` seconds
    fn update(&mut self, dt: f32);
    /// Resolve overlaps produced by the update
    fn resolve(&mut self);
    /// Draw the frame
    fn render(&mut self) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    Idle,
    Running {
        last_frame: Instant,
        deadline: Instant,
    },
}

/// Outcome of driving one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// A full update/resolve/render cycle ran
    Ran,
    /// The session deadline passed; the loop is idle again
    Expired,
    /// The loop was not running
    Idle,
}

/// The frame-cycle driver: Idle -> Running -> Idle per session.
///
/// Holds the last-frame timestamp and the session deadline. Stopping is
/// cooperative: the recurring frame is simply not re-issued, and an in-flight
/// frame always runs to completion.
#[derive(Debug)]
pub struct GameLoop {
    state: LoopState,
}

impl GameLoop {
    pub fn new() -> Self {
        Self {
            state: LoopState::Idle,
        }
    }

    /// Begin a session lasting `duration` from `now`. Restarts the cycle if
    /// one was already running.
    pub fn start(&mut self, now: Instant, duration: Duration) {
        self.state = LoopState::Running {
            last_frame: now,
            deadline: now + duration,
        };
    }

    /// Halt further frames
    pub fn stop(&mut self) {
        self.state = LoopState::Idle;
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, LoopState::Running { .. })
    }

    /// Drive one frame at `now`: compute the elapsed delta, then run the
    /// update, resolve and render phases in order. The delta is handed to
    /// the logic unmodified, even when it is zero or abnormally large.
    pub fn run_frame<L: FrameLogic>(&mut self, logic: &mut L, now: Instant) -> Result<FrameOutcome> {
        let LoopState::Running {
            last_frame,
            deadline,
        } = self.state
        else {
            return Ok(FrameOutcome::Idle);
        };

        if now >= deadline {
            self.state = LoopState::Idle;
            return Ok(FrameOutcome::Expired);
        }

        let dt = now.saturating_duration_since(last_frame).as_secs_f32();
        logic.update(dt);
        logic.resolve();
        logic.render()?;

        self.state = LoopState::Running {
            last_frame: now,
            deadline,
        };
        Ok(FrameOutcome::Ran)
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every phase call so tests can assert sequencing
    #[derive(Default)]
    struct TraceLogic {
        calls: Vec<&'static str>,
        deltas: Vec<f32>,
    }

    impl FrameLogic for TraceLogic {
        fn update(&mut self, dt: f32) {
            self.calls.push("update");
            self.deltas.push(dt);
        }

        fn resolve(&mut self) {
            self.calls.push("resolve");
        }

        fn render(&mut self) -> Result<()> {
            self.calls.push("render");
            Ok(())
        }
    }

    #[test]
    fn test_idle_loop_runs_nothing() {
        let mut game_loop = GameLoop::new();
        let mut logic = TraceLogic::default();

        let outcome = game_loop.run_frame(&mut logic, Instant::now()).unwrap();
        assert_eq!(outcome, FrameOutcome::Idle);
        assert!(logic.calls.is_empty());
    }

    #[test]
    fn test_phases_run_in_order_every_frame() {
        let t0 = Instant::now();
        let mut game_loop = GameLoop::new();
        game_loop.start(t0, Duration::from_secs(10));
        let mut logic = TraceLogic::default();

        for frame in 1..=3 {
            let outcome = game_loop
                .run_frame(&mut logic, t0 + Duration::from_millis(33 * frame))
                .unwrap();
            assert_eq!(outcome, FrameOutcome::Ran);
        }

        assert_eq!(
            logic.calls,
            vec![
                "update", "resolve", "render", "update", "resolve", "render", "update", "resolve",
                "render"
            ]
        );
    }

    #[test]
    fn test_delta_is_elapsed_seconds_since_last_frame() {
        let t0 = Instant::now();
        let mut game_loop = GameLoop::new();
        game_loop.start(t0, Duration::from_secs(10));
        let mut logic = TraceLogic::default();

        game_loop
            .run_frame(&mut logic, t0 + Duration::from_millis(100))
            .unwrap();
        game_loop
            .run_frame(&mut logic, t0 + Duration::from_millis(150))
            .unwrap();

        assert!((logic.deltas[0] - 0.1).abs() < 1e-6);
        assert!((logic.deltas[1] - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_zero_delta_passes_through() {
        let t0 = Instant::now();
        let mut game_loop = GameLoop::new();
        game_loop.start(t0, Duration::from_secs(10));
        let mut logic = TraceLogic::default();

        game_loop.run_frame(&mut logic, t0).unwrap();
        assert_eq!(logic.deltas, vec![0.0]);
    }

    #[test]
    fn test_deadline_expires_the_session() {
        let t0 = Instant::now();
        let mut game_loop = GameLoop::new();
        game_loop.start(t0, Duration::from_secs(1));
        let mut logic = TraceLogic::default();

        let outcome = game_loop
            .run_frame(&mut logic, t0 + Duration::from_secs(1))
            .unwrap();
        assert_eq!(outcome, FrameOutcome::Expired);
        assert!(!game_loop.is_running());
        // No phase runs on the expired frame.
        assert!(logic.calls.is_empty());
    }

    #[test]
    fn test_stop_goes_idle() {
        let mut game_loop = GameLoop::new();
        game_loop.start(Instant::now(), Duration::from_secs(5));
        assert!(game_loop.is_running());

        game_loop.stop();
        assert!(!game_loop.is_running());
    }
}
