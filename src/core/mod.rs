//! Core domain types for the guessing game
//!
//! Pure, side-effect free types: words, per-letter results and the
//! evaluation rules that connect them.

mod outcome;
mod word;

pub use outcome::{GuessOutcome, LetterResult, evaluate};
pub use word::{WORD_SIZE, Word, WordError};

/// Number of guesses a player gets per game
pub const MAX_NUM_ATTEMPTS: usize = 6;
