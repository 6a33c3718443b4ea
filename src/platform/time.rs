//! Frame timing
//!
//! `FrameClock` supplies the per-frame delta; `FramePacer` sleeps out the
//! rest of a frame to honor a frame-rate cap.

use std::time::{Duration, Instant};

/// Monotonic clock measuring time between frames
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous restart (or creation); never negative
    pub fn restart(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last);
        self.last = now;
        dt.as_secs_f32()
    }
}

/// Sleeps to cap the frame rate
#[derive(Debug, Clone)]
pub struct FramePacer {
    frame: Option<Duration>,
    frame_start: Instant,
}

impl FramePacer {
    /// `fps == 0` disables pacing
    pub fn new(fps: u32) -> Self {
        Self {
            frame: (fps > 0).then(|| Duration::from_secs_f64(1.0 / fps as f64)),
            frame_start: Instant::now(),
        }
    }

    /// Target frame duration, if capped
    pub fn frame_duration(&self) -> Option<Duration> {
        self.frame
    }

    /// Sleep until the current frame has lasted its target duration, then
    /// start the next one.
    pub fn wait(&mut self) {
        if let Some(target) = self.frame {
            let spent = self.frame_start.elapsed();
            if spent < target {
                std::thread::sleep(target - spent);
            }
        }
        self.frame_start = Instant::now();
    }
}
