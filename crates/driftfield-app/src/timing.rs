//! Frame timing.
//!
//! Wall-clock pacing for the presentation loop: manual FPS limiting when
//! VSync is off, and an FPS counter for diagnostics. The
//! simulation itself does not consume wall-clock time; its field clock
//! advances by a fixed step per frame.

use std::time::{Duration, Instant};

/// Frame timing manager.
#[derive(Debug)]
pub struct FrameTiming {
    /// Target frames per second
    target_fps: u32,
    /// Time budget per frame
    frame_budget: Duration,
    /// Time of last frame start
    last_frame: Instant,
    /// Whether VSync is enabled (disables manual frame limiting)
    vsync: bool,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new(60)
    }
}

impl FrameTiming {
    /// Create a new frame timing manager.
    ///
    /// # Arguments
    /// * `target_fps` - Target frames per second for frame limiting
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let target_fps = target_fps.max(1);
        Self {
            target_fps,
            frame_budget: Duration::from_secs_f64(1.0 / f64::from(target_fps)),
            last_frame: Instant::now(),
            vsync: true,
        }
    }

    /// Create with VSync setting.
    #[must_use]
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Mark the start of a frame; `sleep_remainder` measures from here.
    ///
    /// Also used to re-arm the limiter after window creation or a long
    /// stall.
    pub fn begin_frame(&mut self) {
        self.last_frame = Instant::now();
    }

    /// Sleep for the remainder of the frame budget (if VSync is off).
    pub fn sleep_remainder(&self) {
        if self.vsync {
            return;
        }

        let elapsed = self.last_frame.elapsed();
        if elapsed < self.frame_budget {
            let sleep_time = self.frame_budget - elapsed;
            // Use spin sleep for more accurate timing on short durations
            if sleep_time > Duration::from_millis(1) {
                std::thread::sleep(sleep_time - Duration::from_millis(1));
            }
            // Spin for the remainder
            while self.last_frame.elapsed() < self.frame_budget {
                std::hint::spin_loop();
            }
        }
    }

    /// Frame budget at the current target FPS.
    #[must_use]
    pub const fn frame_budget(&self) -> Duration {
        self.frame_budget
    }

    /// Get the target FPS.
    #[must_use]
    pub const fn target_fps(&self) -> u32 {
        self.target_fps
    }

}

/// Simple FPS counter for periodic diagnostics.
#[derive(Debug)]
pub struct FpsCounter {
    /// Frame count since last update
    frame_count: u32,
    /// Time of last FPS calculation
    last_update: Instant,
    /// Update interval
    update_interval: Duration,
    /// Current FPS value
    current_fps: f32,
    /// Current frame time in ms
    current_frame_time: f32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    /// Create a new FPS counter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            frame_count: 0,
            last_update: Instant::now(),
            update_interval: Duration::from_secs(5),
            current_fps: 0.0,
            current_frame_time: 0.0,
        }
    }

    /// Tick the counter. Returns `Some((fps, frame_time_ms))` on the frames
    /// where a new value was computed.
    pub fn tick(&mut self) -> Option<(f32, f32)> {
        self.frame_count += 1;

        let elapsed = self.last_update.elapsed();
        if elapsed >= self.update_interval {
            let secs = elapsed.as_secs_f32();
            self.current_fps = self.frame_count as f32 / secs;
            self.current_frame_time = (secs / self.frame_count as f32) * 1000.0;
            self.frame_count = 0;
            self.last_update = Instant::now();
            return Some((self.current_fps, self.current_frame_time));
        }

        None
    }

    /// Get current FPS.
    #[must_use]
    pub const fn fps(&self) -> f32 {
        self.current_fps
    }

    /// Get current frame time in milliseconds.
    #[must_use]
    pub const fn frame_time_ms(&self) -> f32 {
        self.current_frame_time
    }
}
