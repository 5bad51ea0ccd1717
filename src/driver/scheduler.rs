use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tokio::time::{interval, Interval};

/// Source of frame ticks: the seam between the loop driver and the host
/// scheduler. Production uses a tokio interval; tests preload instants and
/// step through them without real time passing.
#[allow(async_fn_in_trait)]
pub trait FrameScheduler {
    /// Wait for the next frame slot; `None` once the source is exhausted
    async fn next_frame(&mut self) -> Option<Instant>;
}

/// Host scheduler backed by a tokio interval
pub struct IntervalScheduler {
    interval: Interval,
}

impl IntervalScheduler {
    pub fn new(period: Duration) -> Self {
        Self {
            interval: interval(period),
        }
    }
}

impl FrameScheduler for IntervalScheduler {
    async fn next_frame(&mut self) -> Option<Instant> {
        self.interval.tick().await;
        Some(Instant::now())
    }
}

/// Deterministic stepper for tests: yields a preloaded queue of frame
/// timestamps immediately, then reports exhaustion
pub struct ManualScheduler {
    frames: VecDeque<Instant>,
}

impl ManualScheduler {
    pub fn new(frames: impl IntoIterator<Item = Instant>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

impl FrameScheduler for ManualScheduler {
    async fn next_frame(&mut self) -> Option<Instant> {
        self.frames.pop_front()
    }
}
