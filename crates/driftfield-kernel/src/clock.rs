//! Deterministic frame clock.
//!
//! The field time advances by a fixed step once per frame regardless of
//! actual elapsed wall-clock time, so the simulation is reproducible
//! independent of frame-rate jitter.

/// Time added to the field clock each frame (a 60 Hz frame in milliseconds).
pub const TIME_STEP: f64 = 16.0;

/// Monotonic field clock advanced by a fixed step each frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FieldClock {
    time: f64,
    frames: u64,
}

impl FieldClock {
    /// Creates a clock at time zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            time: 0.0,
            frames: 0,
        }
    }

    /// Advances the clock by one frame and returns the new time.
    pub fn advance(&mut self) -> f64 {
        self.time += TIME_STEP;
        self.frames += 1;
        self.time
    }

    /// Current field time.
    #[must_use]
    pub const fn time(&self) -> f64 {
        self.time
    }

    /// Number of frames advanced so far.
    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_starts_at_zero() {
        let clock = FieldClock::new();
        assert_eq!(clock.time(), 0.0);
        assert_eq!(clock.frames(), 0);
    }

    #[test]
    fn test_clock_fixed_step() {
        let mut clock = FieldClock::new();
        assert_eq!(clock.advance(), TIME_STEP);
        assert_eq!(clock.advance(), TIME_STEP * 2.0);
        assert_eq!(clock.frames(), 2);
    }

    #[test]
    fn test_clock_is_monotonic() {
        let mut clock = FieldClock::new();
        let mut last = clock.time();
        for _ in 0..1000 {
            let t = clock.advance();
            assert!(t > last);
            last = t;
        }
    }
}
