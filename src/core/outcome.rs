//! Per-letter guess feedback and the evaluation rules that produce it
//!
//! Each letter of a guess is classified as one of:
//! - `InPlace` (letter in the answer at this position)
//! - `WrongPlace` (letter in the answer at another, still unmatched, position)
//! - `Incorrect` (no unmatched occurrence left in the answer)

use super::{WORD_SIZE, Word};
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterResult {
    InPlace,
    WrongPlace,
    Incorrect,
}

impl LetterResult {
    /// Single-character symbol: `G`, `Y` or `-`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::InPlace => 'G',
            Self::WrongPlace => 'Y',
            Self::Incorrect => '-',
        }
    }

    /// Emoji square used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::InPlace => '🟩',
            Self::WrongPlace => '🟨',
            Self::Incorrect => '⬜',
        }
    }
}

/// Feedback for one guess: one [`LetterResult`] per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessOutcome {
    results: [LetterResult; WORD_SIZE],
}

impl GuessOutcome {
    /// Wrap an explicit result sequence
    #[must_use]
    pub const fn new(results: [LetterResult; WORD_SIZE]) -> Self {
        Self { results }
    }

    /// Evaluate `guess` against `answer`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and consume those answer positions
    /// 2. Second pass: for every other position, take the lowest-indexed
    ///    unconsumed answer letter equal to the guessed letter, if any
    ///
    /// # Examples
    /// ```
    /// use yorkle::core::{GuessOutcome, LetterResult::*, Word};
    ///
    /// let answer = Word::new("bread").unwrap();
    /// let guess = Word::new("erase").unwrap();
    /// let outcome = GuessOutcome::evaluate(&answer, &guess);
    ///
    /// assert_eq!(
    ///     outcome.results(),
    ///     &[WrongPlace, InPlace, WrongPlace, Incorrect, Incorrect]
    /// );
    /// assert!(!outcome.is_correct());
    /// ```
    #[must_use]
    // Allow: indices address answer, guess, results and consumed together
    #[allow(clippy::needless_range_loop)]
    pub fn evaluate(answer: &Word, guess: &Word) -> Self {
        let answer = answer.chars();
        let guess = guess.chars();

        let mut results = [LetterResult::Incorrect; WORD_SIZE];
        let mut consumed = [false; WORD_SIZE];

        for i in 0..WORD_SIZE {
            if guess[i] == answer[i] {
                results[i] = LetterResult::InPlace;
                consumed[i] = true;
            }
        }

        for i in 0..WORD_SIZE {
            if results[i] == LetterResult::InPlace {
                continue;
            }
            if let Some(j) = (0..WORD_SIZE).find(|&j| !consumed[j] && answer[j] == guess[i]) {
                results[i] = LetterResult::WrongPlace;
                consumed[j] = true;
            }
        }

        Self { results }
    }

    /// Per-position results in guess order
    #[inline]
    #[must_use]
    pub const fn results(&self) -> &[LetterResult; WORD_SIZE] {
        &self.results
    }

    /// True iff every letter is `InPlace`
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.results.iter().all(|&r| r == LetterResult::InPlace)
    }

    /// Number of positions classified as `kind`
    #[must_use]
    pub fn count(&self, kind: LetterResult) -> usize {
        self.results.iter().filter(|&&r| r == kind).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.results.iter().map(|r| r.emoji()).collect()
    }
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.results
            .iter()
            .try_for_each(|r| write!(f, "{}", r.symbol()))
    }
}

/// Evaluate `guess` against `answer`; see [`GuessOutcome::evaluate`]
#[must_use]
pub fn evaluate(answer: &Word, guess: &Word) -> GuessOutcome {
    GuessOutcome::evaluate(answer, guess)
}
