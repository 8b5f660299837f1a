//! Command implementations

pub mod play;
pub mod stats;

pub use play::{PlayOutcome, run_play};
pub use stats::{reset_stats, show_stats};
