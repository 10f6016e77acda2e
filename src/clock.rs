//! Frame timing for stepping loops.
//!
//! The original scripts capped their loop at 60 Hz and printed the
//! frame rate every iteration. [`FrameClock`] provides the headless
//! equivalent: call [`FrameClock::tick`] once per frame to get the
//! delta, and read [`FrameClock::fps`] for a smoothed rate estimate.
//! A fixed delta can be pinned for deterministic stepping.

use std::time::{Duration, Instant};

/// Per-frame timing: delta, elapsed, frame count, FPS estimate.
#[derive(Debug)]
pub struct FrameClock {
    start: Instant,
    last_tick: Instant,
    delta_secs: f32,
    frame_count: u64,
    fps: f32,
    fps_frame_count: u64,
    fps_window_start: Instant,
    paused: bool,
    pause_elapsed: Duration,
    fixed_delta: Option<f32>,
}

/// FPS is re-estimated over windows of this length.
const FPS_WINDOW: Duration = Duration::from_millis(500);

impl FrameClock {
    /// A clock starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
            delta_secs: 0.0,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_window_start: now,
            paused: false,
            pause_elapsed: Duration::ZERO,
            fixed_delta: None,
        }
    }

    /// Advance one frame and return the delta in seconds.
    ///
    /// While paused the delta is 0 and the frame count holds still.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        if self.paused {
            self.delta_secs = 0.0;
            return 0.0;
        }

        let raw_delta = now.duration_since(self.last_tick).as_secs_f32();
        self.delta_secs = self.fixed_delta.unwrap_or(raw_delta);
        self.last_tick = now;
        self.frame_count += 1;

        let window = now.duration_since(self.fps_window_start);
        if window >= FPS_WINDOW {
            let frames = self.frame_count - self.fps_frame_count;
            self.fps = frames as f32 / window.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_window_start = now;
        }

        self.delta_secs
    }

    /// Seconds since the clock started, excluding paused time.
    pub fn elapsed(&self) -> f32 {
        (self.start.elapsed() - self.pause_elapsed).as_secs_f32()
    }

    /// Delta returned by the latest [`FrameClock::tick`].
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Frames ticked so far.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Smoothed frames-per-second estimate.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Whether the clock is paused.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Stop the clock; ticks return 0 until resumed.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume after a pause. Paused time does not count as elapsed.
    pub fn resume(&mut self) {
        if self.paused {
            let now = Instant::now();
            self.pause_elapsed += now.duration_since(self.last_tick);
            self.last_tick = now;
            self.paused = false;
        }
    }

    /// Pin the delta to a fixed value for deterministic stepping, or
    /// `None` to use wall-clock timing again.
    pub fn set_fixed_delta(&mut self, delta: Option<f32>) {
        self.fixed_delta = delta;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
