//! Display functions for game feedback and statistics

use super::formatters::{colorize_guess, distribution_bar};
use crate::core::{GuessOutcome, Word};
use crate::stats::PlayerStats;
use std::fmt::Write as _;
use std::io::{self, Write};

/// Print the feedback line for one guess: `Result: ` plus colored letters
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_outcome<W: Write>(out: &mut W, guess: &Word, outcome: &GuessOutcome) -> io::Result<()> {
    writeln!(out, "Result: {}", colorize_guess(guess, outcome))
}

/// Build the stats report
///
/// # Examples
/// ```
/// use yorkle::output::render_report;
/// use yorkle::stats::PlayerStats;
///
/// let stats = PlayerStats { wins_per_attempts: [0, 3, 0, 0, 0, 0], losses: 1 };
/// let report = render_report(&stats);
/// assert!(report.starts_with("Played: 4\nWin %: 75.0%\n"));
/// assert!(report.contains("2: *** 3\n"));
/// ```
#[must_use]
pub fn render_report(stats: &PlayerStats) -> String {
    let mut report = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(report, "Played: {}", stats.played());
    let _ = writeln!(report, "Win %: {:.1}%", stats.win_rate());
    let _ = writeln!(report);
    let _ = writeln!(report, "Guess distribution:");
    for (i, &wins) in stats.wins_per_attempts.iter().enumerate() {
        let _ = writeln!(report, "{}: {}", i + 1, distribution_bar(wins));
    }

    report
}

/// Print the stats report
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_report<W: Write>(out: &mut W, stats: &PlayerStats) -> io::Result<()> {
    out.write_all(render_report(stats).as_bytes())
}
