//! Time subsystem.
//!
//! Provides stable, testable frame timing utilities without coupling to the runtime.
//! Intended usage:
//! - one `FrameClock` per render loop; call `tick()` once per presented frame
//! - feed `FrameTime::raw_dt_ms()` into a `FrameTimings` and print its `report()`

mod frame_clock;
mod frame_stats;

pub use frame_clock::{FrameClock, FrameTime};
pub use frame_stats::{FrameReport, FrameTimings, DEFAULT_MIN_SENTINEL_MS, WINDOW_LEN};
