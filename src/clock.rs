//! Frame pacing.

use std::time::{Duration, Instant};

/// Caps the loop at a target frame rate and reports how long each frame
/// really took.
#[derive(Debug)]
pub struct FrameClock {
    frame: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / fps.max(1),
            last: Instant::now(),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Sleep out the rest of the current frame, then return the milliseconds
    /// elapsed since the previous call (or since construction).
    pub fn tick(&mut self) -> u32 {
        let elapsed = self.last.elapsed();
        if elapsed < self.frame {
            std::thread::sleep(self.frame - elapsed);
        }
        let now = Instant::now();
        let dt = now.duration_since(self.last);
        self.last = now;
        u32::try_from(dt.as_millis()).unwrap_or(u32::MAX)
    }
}
