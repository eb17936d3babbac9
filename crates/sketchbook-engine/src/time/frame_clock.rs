use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds (clamped).
    pub dt: f32,

    /// Seconds since the clock was created, unclamped.
    ///
    /// Animations keyed on absolute time (the rotating cube) read this
    /// instead of accumulating `dt`, so clamping never skews them.
    pub elapsed: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Delta time is clamped: the minimum guards against zero-dt from tight
/// loops, the maximum against simulation jumps after a debugger pause or a
/// minimized window.
#[derive(Debug, Clone)]
pub struct FrameClock {
    started: Instant,
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a new clock with default clamps (0.1 ms .. 250 ms).
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last: now,
            frame_index: 0,
            dt_min: Duration::from_micros(100),
            dt_max: Duration::from_millis(250),
        }
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        let now = Instant::now();
        Self {
            started: now,
            last: now,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the delta-time baseline, leaving `elapsed` alone.
    ///
    /// Useful when resuming after a suspension so the first frame back does
    /// not see a huge delta.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);
        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            elapsed: now.saturating_duration_since(self.started).as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_index_counts_up_from_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
        assert_eq!(clock.tick().frame_index, 2);
    }

    #[test]
    fn dt_is_clamped_to_minimum_in_tight_loop() {
        let mut clock = FrameClock::with_clamps(
            Duration::from_millis(5),
            Duration::from_millis(250),
        );
        // Back-to-back ticks elapse far less than 5 ms.
        clock.tick();
        let ft = clock.tick();
        assert!(ft.dt >= 0.005);
    }

    #[test]
    fn dt_is_clamped_to_maximum_after_stall() {
        let mut clock = FrameClock::with_clamps(
            Duration::from_micros(100),
            Duration::from_millis(1),
        );
        clock.tick();
        std::thread::sleep(Duration::from_millis(10));
        let ft = clock.tick();
        assert!(ft.dt <= 0.001 + f32::EPSILON);
    }

    #[test]
    fn elapsed_never_decreases() {
        let mut clock = FrameClock::new();
        let a = clock.tick().elapsed;
        let b = clock.tick().elapsed;
        let c = clock.tick().elapsed;
        assert!(a <= b && b <= c);
    }

    #[test]
    fn reset_does_not_rewind_elapsed() {
        let mut clock = FrameClock::new();
        let before = clock.tick().elapsed;
        std::thread::sleep(Duration::from_millis(2));
        clock.reset();
        let after = clock.tick().elapsed;
        assert!(after >= before);
    }
}
