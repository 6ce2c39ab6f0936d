//! Utility Module
//!
//! - [`Timer`]: frame clock for driving per-frame updates

pub mod time;

pub use time::Timer;
