use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Clamped time since the previous tick, in seconds. Use for animation.
    pub dt: f32,

    /// Unclamped time since the previous tick. Use for measurement.
    pub raw_dt: Duration,

    /// Time since the clock was created.
    pub elapsed: Duration,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

impl FrameTime {
    /// Unclamped frame interval in milliseconds.
    #[inline]
    pub fn raw_dt_ms(&self) -> f64 {
        self.raw_dt.as_secs_f64() * 1000.0
    }
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Delta time is clamped to avoid pathological values when the application is paused
/// by the debugger, minimized, or stalls. The unclamped interval is reported alongside
/// so statistics see what actually happened.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a new clock with default clamps.
    ///
    /// Clamp rationale:
    /// - minimum prevents zero-dt behavior from tight loops on some platforms
    /// - maximum prevents animation jumps after long stalls
    pub fn new() -> Self {
        Self::with_clamps(
            Duration::from_micros(100), // 0.0001s
            Duration::from_millis(250), // 0.25s
        )
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the previous-tick baseline. `elapsed` keeps counting from creation.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let raw_dt = now.saturating_duration_since(self.last);
        let dt = raw_dt.clamp(self.dt_min, self.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            raw_dt,
            elapsed: now.saturating_duration_since(self.start),
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
    fn frame_index_counts_ticks() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
        assert_eq!(clock.tick().frame_index, 2);
    }

    #[test]
    fn raw_dt_is_not_clamped() {
        let mut clock = FrameClock::new();
        let base = clock.last;
        let ft = clock.tick_at(base + Duration::from_secs(2));
        assert_eq!(ft.raw_dt, Duration::from_secs(2));
        assert_eq!(ft.raw_dt_ms(), 2000.0);
        assert_eq!(ft.dt, 0.25);
    }

    #[test]
    fn dt_is_raised_to_minimum() {
        let mut clock = FrameClock::new();
        let base = clock.last;
        let ft = clock.tick_at(base);
        assert_eq!(ft.raw_dt, Duration::ZERO);
        assert_eq!(ft.dt, Duration::from_micros(100).as_secs_f32());
    }

    #[test]
    fn elapsed_accumulates_from_creation() {
        let mut clock = FrameClock::new();
        let base = clock.start;
        clock.tick_at(base + Duration::from_millis(10));
        let ft = clock.tick_at(base + Duration::from_millis(25));
        assert_eq!(ft.raw_dt, Duration::from_millis(15));
        assert_eq!(ft.elapsed, Duration::from_millis(25));
    }

    #[test]
    fn reset_keeps_elapsed_origin() {
        let mut clock = FrameClock::new();
        let start = clock.start;
        clock.reset();
        assert_eq!(clock.start, start);
        assert!(clock.last >= start);
    }
}
