use std::time::{Duration, Instant};

use crate::frame::FrameInfo;

/// Scene clock - elapsed time since start plus per-tick delta
///
/// Ticks either from the monotonic wall clock (`tick`) or from a delta the
/// host already measured (`advance`). Elapsed time never decreases.
#[derive(Debug)]
pub struct FrameClock {
    last_tick: Instant,
    elapsed: f64,
    frame_number: u64,
}

impl FrameClock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            elapsed: 0.0,
            frame_number: 0,
        }
    }

    /// Measure the wall-clock delta since the last tick and advance
    pub fn tick(&mut self) -> FrameInfo {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        self.step(delta)
    }

    /// Advance by a host-supplied delta in seconds
    /// Negative or non-finite deltas count as zero
    pub fn advance(&mut self, delta: f32) -> FrameInfo {
        self.last_tick = Instant::now();
        self.step(delta)
    }

    fn step(&mut self, delta: f32) -> FrameInfo {
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        self.elapsed += delta as f64;

        let info = FrameInfo::new(self.frame_number, self.elapsed as f32, delta);
        self.frame_number += 1;
        info
    }

    /// Seconds since the clock started
    pub fn elapsed(&self) -> f32 {
        self.elapsed as f32
    }

    /// Elapsed time rounded to whole milliseconds, for millisecond schedules
    pub fn elapsed_millis(&self) -> Duration {
        Duration::from_millis((self.elapsed * 1000.0).round() as u64)
    }

    /// Number of ticks issued so far
    pub fn frame_count(&self) -> u64 {
        self.frame_number
    }

    /// Restart from zero without touching the frame counter
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
        self.elapsed = 0.0;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
