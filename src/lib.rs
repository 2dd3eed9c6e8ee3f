//! Keystroke Delay - per-character typing delay statistics
//!
//! Reads characters until a terminator, records how long each one took to
//! arrive, and charts the average delay per character in ascending order.

pub mod chart;
pub mod config;
pub mod input;
pub mod report;
pub mod stats;
pub mod ui;

pub use config::Config;
