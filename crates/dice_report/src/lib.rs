//! # Dice Report (Text Rendering Layer)
//!
//! Turns raw engine output into plain-text report fragments:
//! - [`basic_stats`]: mean, median, population standard deviation
//! - [`ascii_histogram`]: fixed-width ASCII bar chart
//! - [`summarise_rolls`]: the full plain-rolls report
//!
//! All functions are pure string/number computation; printing and
//! persistence live in the service layer.

pub mod histogram;
pub mod report;
pub mod stats;

pub use histogram::{ascii_histogram, DEFAULT_HISTOGRAM_WIDTH, EMPTY_HISTOGRAM};
pub use report::summarise_rolls;
pub use stats::{basic_stats, SummaryStats};
