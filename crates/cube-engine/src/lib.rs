//! Cube engine crate.
//!
//! Platform + GPU runtime for the spinning-cube smoke test, plus the
//! frame-timing statistics it reports.

pub mod coords;
pub mod core;
pub mod device;
pub mod logging;
pub mod render;
pub mod time;
pub mod window;
