/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the scene started
    pub time: f32,
    /// Seconds since the previous tick
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }

    /// Delta limited to `max` seconds, for consumers that integrate over `dt`
    pub fn clamped_delta(&self, max: f32) -> f32 {
        self.delta.clamp(0.0, max)
    }
}

/// Infinite iterator of synthetic ticks at a fixed rate
/// Used for headless runs where no display refresh drives the scene
#[derive(Debug, Clone)]
pub struct FixedRateFrames {
    frame_number: u64,
    step: f32,
    time: f64,
}

impl FixedRateFrames {
    pub fn new(hz: f32) -> Self {
        Self {
            frame_number: 0,
            step: 1.0 / hz.max(f32::EPSILON),
            time: 0.0,
        }
    }

    pub fn step(&self) -> f32 {
        self.step
    }
}

impl Iterator for FixedRateFrames {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let delta = if self.frame_number == 0 { 0.0 } else { self.step };
        // Accumulate in f64 so long runs don't drift
        self.time += delta as f64;

        let info = FrameInfo::new(self.frame_number, self.time as f32, delta);
        self.frame_number += 1;
        Some(info)
    }
}
