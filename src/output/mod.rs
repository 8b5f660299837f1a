//! Terminal output formatting
//!
//! Colored guess feedback and the statistics report.

pub mod display;
pub mod formatters;

pub use display::{print_outcome, print_report, render_report};
pub use formatters::{colorize_guess, letter_colors};
