//! Time management utilities
//!
//! Frame statistics live in explicit objects owned by the render loop rather
//! than in process-wide statics, so every loop gets its own sample window.

use std::time::{Duration, Instant};

/// FPS reported before any frame time has been measured
pub const FALLBACK_FPS: f32 = 60.0;

/// Rolling-average FPS counter over a fixed window of frame times
#[derive(Debug, Clone)]
pub struct FpsCounter {
    samples: Vec<Duration>,
    sample_count: usize,
    current_frame: usize,
    last_tick: Option<Instant>,
    fps: f32,
}

impl FpsCounter {
    /// Create a counter averaging over `sample_count` frames (at least one)
    pub fn new(sample_count: usize) -> Self {
        let sample_count = sample_count.max(1);
        Self {
            samples: vec![Duration::ZERO; sample_count],
            sample_count,
            current_frame: 0,
            last_tick: None,
            fps: FALLBACK_FPS,
        }
    }

    /// Record the time since the previous `tick` and return the updated FPS
    ///
    /// The first call only starts the clock.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        if let Some(last) = self.last_tick.replace(now) {
            self.record(now.duration_since(last));
        }
        self.fps
    }

    /// Push a measured frame time into the window and recompute the average
    pub fn record(&mut self, frame_time: Duration) -> f32 {
        self.samples[self.current_frame % self.sample_count] = frame_time;
        self.current_frame += 1;

        let count = self.current_frame.min(self.sample_count);
        let average = self.samples[..count].iter().sum::<Duration>() / count as u32;

        self.fps = if average > Duration::ZERO {
            1.0 / average.as_secs_f32()
        } else {
            FALLBACK_FPS
        };
        self.fps
    }

    /// Most recently computed FPS
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Number of frames recorded so far
    pub fn frames_recorded(&self) -> usize {
        self.current_frame
    }

    /// Clear all samples and restart the clock
    pub fn reset(&mut self) {
        self.samples.fill(Duration::ZERO);
        self.current_frame = 0;
        self.last_tick = None;
        self.fps = FALLBACK_FPS;
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new(10)
    }
}

/// Caps the frame rate by sleeping off whatever is left of the frame budget
#[derive(Debug, Clone, Copy)]
pub struct FrameLimiter {
    frame_budget: Duration,
}

impl FrameLimiter {
    /// Create a limiter for `max_fps` frames per second
    ///
    /// Non-positive or non-finite values disable limiting.
    pub fn new(max_fps: f32) -> Self {
        let frame_budget = if max_fps.is_finite() && max_fps > 0.0 {
            Duration::from_secs_f64(1.0 / f64::from(max_fps))
        } else {
            Duration::ZERO
        };
        Self { frame_budget }
    }

    /// Target duration of one frame
    pub fn frame_budget(&self) -> Duration {
        self.frame_budget
    }

    /// Time left in the budget after a frame that took `frame_elapsed`
    pub fn remaining(&self, frame_elapsed: Duration) -> Option<Duration> {
        self.frame_budget
            .checked_sub(frame_elapsed)
            .filter(|left| !left.is_zero())
    }

    /// Sleep for the remainder of the frame budget, if any
    pub fn wait(&self, frame_elapsed: Duration) {
        if let Some(left) = self.remaining(frame_elapsed) {
            std::thread::sleep(left);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fps_counter_starts_at_fallback() {
        let counter = FpsCounter::new(10);
        assert_eq!(counter.fps(), FALLBACK_FPS);
        assert_eq!(counter.frames_recorded(), 0);
    }

    #[test]
    fn test_fps_counter_averages_partial_window() {
        let mut counter = FpsCounter::new(10);
        counter.record(Duration::from_millis(10));
        let fps = counter.record(Duration::from_millis(30));

        // Only the two filled samples count: average 20ms
        assert_relative_eq!(fps, 50.0, epsilon = 1e-3);
    }

    #[test]
    fn test_fps_counter_window_wraps() {
        let mut counter = FpsCounter::new(2);
        counter.record(Duration::from_millis(100));
        counter.record(Duration::from_millis(10));
        let fps = counter.record(Duration::from_millis(10));

        // The 100ms sample has been overwritten
        assert_relative_eq!(fps, 100.0, epsilon = 1e-3);
    }

    #[test]
    fn test_fps_counter_zero_frame_time_uses_fallback() {
        let mut counter = FpsCounter::new(4);
        assert_eq!(counter.record(Duration::ZERO), FALLBACK_FPS);
    }

    #[test]
    fn test_fps_counter_reset() {
        let mut counter = FpsCounter::new(4);
        counter.record(Duration::from_millis(5));
        counter.reset();
        assert_eq!(counter.frames_recorded(), 0);
        assert_eq!(counter.fps(), FALLBACK_FPS);
    }

    #[test]
    fn test_frame_limiter_remaining() {
        let limiter = FrameLimiter::new(50.0);
        assert_eq!(limiter.frame_budget(), Duration::from_millis(20));
        assert_eq!(
            limiter.remaining(Duration::from_millis(5)),
            Some(Duration::from_millis(15))
        );
        assert_eq!(limiter.remaining(Duration::from_millis(25)), None);
    }

    #[test]
    fn test_frame_limiter_disabled() {
        let limiter = FrameLimiter::new(0.0);
        assert_eq!(limiter.frame_budget(), Duration::ZERO);
        assert_eq!(limiter.remaining(Duration::ZERO), None);
    }
}
