use std::time::{Duration, Instant};

/// Wall-clock bookkeeping for timed sessions: elapsed time against the
/// configured duration, plus running totals across sessions.
pub struct SessionStats {
    pub start_time: Instant,
    pub elapsed: Duration,
    pub duration: Duration,
    pub best_score: u32,
    pub sessions_played: u32,
}

impl SessionStats {
    pub fn new(duration: Duration) -> Self {
        Self {
            start_time: Instant::now(),
            elapsed: Duration::ZERO,
            duration,
            best_score: 0,
            sessions_played: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed = self.start_time.elapsed();
    }

    pub fn on_session_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed = Duration::ZERO;
    }

    pub fn on_session_over(&mut self, final_score: u32) {
        self.sessions_played += 1;
        if final_score > self.best_score {
            self.best_score = final_score;
        }
    }

    /// Time left in the current session
    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.elapsed)
    }

    pub fn format_remaining(&self) -> String {
        let total_secs = self.remaining().as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}
