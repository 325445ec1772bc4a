//! Data model: samples, the rolling history ring, and derived stats.

mod history;
mod sample;
mod stats;

pub use history::{History, HISTORY_CAPACITY};
pub use sample::Sample;
pub use stats::Stats;
