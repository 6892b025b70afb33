use std::fmt;

/// Number of samples kept in the moving-average window.
pub const WINDOW_LEN: usize = 10;

/// Starting value of the running minimum, in milliseconds.
///
/// Any session whose frames never drop below 1 ms keeps reporting `1.0` as
/// its minimum. Use [`FrameTimings::with_min_sentinel`] with `f64::INFINITY`
/// for a minimum that always tracks the smallest recorded sample.
pub const DEFAULT_MIN_SENTINEL_MS: f64 = 1.0;

/// Frame-timing statistics over a session.
///
/// Keeps the last [`WINDOW_LEN`] samples in a ring buffer for the moving
/// average, plus running extrema over every sample ever recorded. The extrema
/// are never reset.
///
/// All values are milliseconds.
#[derive(Debug, Clone)]
pub struct FrameTimings {
    samples: [f64; WINDOW_LEN],
    cursor: usize,
    last: f64,
    min: f64,
    max: f64,
    frames: u64,
}

impl FrameTimings {
    /// Creates an empty collector with the default `1.0` ms minimum sentinel.
    pub fn new() -> Self {
        Self::with_min_sentinel(DEFAULT_MIN_SENTINEL_MS)
    }

    /// Creates an empty collector whose running minimum starts at `min_ms`.
    pub fn with_min_sentinel(min_ms: f64) -> Self {
        Self {
            samples: [0.0; WINDOW_LEN],
            cursor: 0,
            last: 0.0,
            min: min_ms,
            max: 0.0,
            frames: 0,
        }
    }

    /// Records one frame duration.
    pub fn record(&mut self, sample_ms: f64) {
        debug_assert!(
            sample_ms.is_finite() && sample_ms >= 0.0,
            "FrameTimings::record: invalid sample {sample_ms}"
        );

        self.samples[self.cursor] = sample_ms;
        self.cursor = (self.cursor + 1) % WINDOW_LEN;

        if sample_ms < self.min {
            self.min = sample_ms;
        }
        if sample_ms > self.max {
            self.max = sample_ms;
        }

        self.last = sample_ms;
        self.frames = self.frames.wrapping_add(1);
    }

    /// Mean of all window slots.
    ///
    /// Slots that have not been written yet count as zero, so the first
    /// [`WINDOW_LEN`] frames are biased low: after `n < WINDOW_LEN` records the
    /// result is `sum / WINDOW_LEN`, not `sum / n`.
    pub fn average(&self) -> f64 {
        self.samples.iter().sum::<f64>() / WINDOW_LEN as f64
    }

    /// Smallest sample seen this session (or the sentinel).
    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest sample seen this session.
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Most recently recorded sample; `0.0` before the first record.
    #[inline]
    pub fn last(&self) -> f64 {
        self.last
    }

    /// Number of samples recorded so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Snapshot of the current values for display.
    pub fn report(&self) -> FrameReport {
        FrameReport {
            render_ms: self.last,
            min_ms: self.min,
            average_ms: self.average(),
            max_ms: self.max,
        }
    }
}

impl Default for FrameTimings {
    fn default() -> Self {
        Self::new()
    }
}

/// One frame's worth of timing output.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameReport {
    pub render_ms: f64,
    pub min_ms: f64,
    pub average_ms: f64,
    pub max_ms: f64,
}

impl fmt::Display for FrameReport {
    /// Four lines, no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Render Time: {:.3} ms", self.render_ms)?;
        writeln!(f, "Min: {:.3} ms", self.min_ms)?;
        writeln!(f, "Average: {:.3} ms", self.average_ms)?;
        write!(f, "Max: {:.3} ms", self.max_ms)
    }
}
