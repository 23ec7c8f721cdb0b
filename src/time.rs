//! Animation clock.
//!
//! A [`Clock`] is the single time source for a rendering loop: monotonic
//! elapsed seconds since start, per-frame delta, frame counting, and a
//! periodically refreshed FPS estimate. The oscillator never reads the
//! clock itself; the host loop calls [`Clock::tick`] once per frame and
//! threads the elapsed value into [`crate::ParticleField::advance`]
//! explicitly, which keeps the core free of ambient state and trivially
//! testable.
//!
//! # Example
//!
//! ```ignore
//! let mut clock = Clock::new();
//!
//! // In the frame callback:
//! let elapsed = clock.tick();
//! let transforms = field.advance(elapsed);
//! ```

use std::time::{Duration, Instant};

/// How often the FPS estimate is recomputed.
const FPS_REFRESH: Duration = Duration::from_millis(500);

/// Monotonic elapsed-time source for frame-driven animation.
#[derive(Debug)]
pub struct Clock {
    /// When the clock started (pauses excluded via `pause_accum`).
    started: Instant,
    /// When the last tick occurred.
    last_tick: Instant,
    /// Cached elapsed seconds as of the last tick.
    elapsed_secs: f32,
    /// Seconds between the last two ticks.
    delta_secs: f32,
    /// Ticks since start.
    frames: u64,
    /// Total time spent paused.
    pause_accum: Duration,
    /// Whether the clock is paused.
    paused: bool,
    /// Latest FPS estimate.
    fps: f32,
    /// Frame count at the last FPS refresh.
    fps_frames: u64,
    /// Time of the last FPS refresh.
    fps_refreshed: Instant,
}

impl Clock {
    /// Create a clock starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last_tick: now,
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            frames: 0,
            pause_accum: Duration::ZERO,
            paused: false,
            fps: 0.0,
            fps_frames: 0,
            fps_refreshed: now,
        }
    }

    /// Advance the clock one frame and return the elapsed seconds.
    ///
    /// Call exactly once per rendering frame. While paused, elapsed time
    /// holds still and delta is zero.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();

        if self.paused {
            self.delta_secs = 0.0;
            return self.elapsed_secs;
        }

        self.delta_secs = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        self.elapsed_secs = (now.duration_since(self.started) - self.pause_accum).as_secs_f32();
        self.frames += 1;

        let since_refresh = now.duration_since(self.fps_refreshed);
        if since_refresh >= FPS_REFRESH {
            let frames = self.frames - self.fps_frames;
            self.fps = frames as f32 / since_refresh.as_secs_f32();
            self.fps_frames = self.frames;
            self.fps_refreshed = now;
        }

        self.elapsed_secs
    }

    /// Elapsed seconds as of the last tick.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    /// Seconds between the last two ticks.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Ticks since start.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Latest FPS estimate (refreshed about twice a second).
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Whether the clock is paused.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Freeze elapsed time. Subsequent ticks return the same elapsed value
    /// with zero delta.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume after a pause; the paused span does not count as elapsed.
    pub fn resume(&mut self) {
        if self.paused {
            let now = Instant::now();
            self.pause_accum += now.duration_since(self.last_tick);
            self.last_tick = now;
            self.paused = false;
        }
    }

    /// Toggle between paused and running.
    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Reset to a fresh clock starting now.
    pub fn reset(&mut self) {
        *self = Clock::new();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
