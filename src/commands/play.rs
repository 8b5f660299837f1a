//! Interactive game mode
//!
//! Line-based game loop: one guess per line, colored feedback after each
//! accepted guess, stats updated and shown when the game ends.

use crate::config::GameConfig;
use crate::core::MAX_NUM_ATTEMPTS;
use crate::error::GameError;
use crate::game::{GameSession, GameStatus};
use crate::output::{print_outcome, print_report};
use crate::stats::StatsStore;
use crate::wordlists::{load_answer, load_catalog};
use anyhow::Result;
use std::io::{BufRead, Write};

/// How a played game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Won { attempts: usize },
    Lost,
    /// Input ended before the game finished; stats are left untouched
    Abandoned,
}

/// Play one game reading guesses from `input`
///
/// Rejections and warnings go to `err`, everything else to `out`.
///
/// # Errors
///
/// Returns an error if the word list or answer cannot be loaded, or on an
/// I/O error talking to the player. Failing to save stats is only a warning.
pub fn run_play<R, W, E>(
    config: &GameConfig,
    mut input: R,
    out: &mut W,
    err: &mut E,
) -> Result<PlayOutcome>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    config.validate()?;
    let catalog = load_catalog(&config.word_list_path, config.max_valid_words)?;
    let answer = load_answer(&config.answer_path)?;
    let store = StatsStore::new(&config.stats_path);
    let stats = store.load();

    let mut session = GameSession::new(answer);

    let attempts_used = loop {
        if let Some(attempts) = session.attempts_used_for_stats() {
            break attempts;
        }

        write!(out, "Attempt #{}: ", session.attempt_number())?;
        out.flush()?;

        let Some(guess) = read_guess(&mut input)? else {
            writeln!(out)?;
            tracing::info!(attempt = session.attempt_number(), "input closed, game abandoned");
            return Ok(PlayOutcome::Abandoned);
        };

        match session.submit(&catalog, &guess) {
            Ok(record) => print_outcome(out, &record.word, &record.outcome)?,
            Err(rejection @ GameError::InvalidGuess(_)) => writeln!(err, "{rejection}")?,
            Err(other) => return Err(other.into()),
        }
    };

    let outcome = match session.status() {
        GameStatus::Won { attempts } => {
            let plural = if attempts == 1 { "attempt" } else { "attempts" };
            writeln!(out, "\nYou got it in {attempts} {plural}!")?;
            PlayOutcome::Won { attempts }
        }
        _ => {
            writeln!(
                out,
                "\nOut of attempts ({MAX_NUM_ATTEMPTS}). The answer was: {}",
                session.answer().text().to_uppercase()
            )?;
            PlayOutcome::Lost
        }
    };

    let stats = stats.record_outcome(attempts_used);
    if let Err(e) = store.persist(&stats) {
        tracing::warn!(error = %e, "stats not saved");
        writeln!(err, "Warning: {e}. This game was not recorded.")?;
    }

    for record in session.history() {
        writeln!(out, "{}", record.outcome.to_emoji())?;
    }

    writeln!(out)?;
    print_report(out, &stats)?;

    Ok(outcome)
}

/// Read the next non-blank line and return its first token
///
/// Bytes that are not UTF-8 are replaced rather than rejected, so the
/// guess still reaches validation. `None` at end of input.
fn read_guess<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        // Blank lines are skipped without a new prompt
        if let Some(token) = String::from_utf8_lossy(&buf).split_whitespace().next() {
            return Ok(Some(token.to_string()));
        }
    }
}
