//! One game: validates guesses, evaluates them and tracks attempts

use crate::core::{GuessOutcome, MAX_NUM_ATTEMPTS, Word};
use crate::error::GameError;
use crate::wordlists::WordCatalog;

/// Where a game currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { attempts: usize },
    Lost,
}

/// An accepted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: Word,
    pub outcome: GuessOutcome,
}

/// State of a single game against one secret answer
#[derive(Debug, Clone)]
pub struct GameSession {
    answer: Word,
    history: Vec<GuessRecord>,
}

impl GameSession {
    #[must_use]
    pub fn new(answer: Word) -> Self {
        Self {
            answer,
            history: Vec::with_capacity(MAX_NUM_ATTEMPTS),
        }
    }

    #[must_use]
    pub fn answer(&self) -> &Word {
        &self.answer
    }

    /// Accepted guesses so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// 1-based number of the next attempt
    #[must_use]
    pub fn attempt_number(&self) -> usize {
        self.history.len() + 1
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self.history.last() {
            Some(last) if last.outcome.is_correct() => GameStatus::Won {
                attempts: self.history.len(),
            },
            _ if self.history.len() >= MAX_NUM_ATTEMPTS => GameStatus::Lost,
            _ => GameStatus::InProgress,
        }
    }

    /// Attempt count to feed into the stats: the winning attempt, or one
    /// past the limit for a loss. `None` while the game is running.
    #[must_use]
    pub fn attempts_used_for_stats(&self) -> Option<usize> {
        match self.status() {
            GameStatus::Won { attempts } => Some(attempts),
            GameStatus::Lost => Some(MAX_NUM_ATTEMPTS + 1),
            GameStatus::InProgress => None,
        }
    }

    /// Submit raw player input as the next guess, returning the accepted record
    ///
    /// Input is trimmed and lowercased. Rejected guesses do not use up an
    /// attempt.
    ///
    /// # Errors
    ///
    /// Returns `InvalidGuess` when the word has the wrong shape or is not in
    /// `catalog`, and `GameOver` once the game has finished.
    ///
    /// # Examples
    /// ```
    /// use yorkle::core::Word;
    /// use yorkle::game::{GameSession, GameStatus};
    /// use yorkle::wordlists::WordCatalog;
    ///
    /// let catalog = WordCatalog::from_tokens(["bread", "erase"], 100);
    /// let mut game = GameSession::new(Word::new("bread").unwrap());
    ///
    /// assert!(game.submit(&catalog, "zzzzz").is_err());
    /// assert!(!game.submit(&catalog, "erase").unwrap().outcome.is_correct());
    /// assert!(game.submit(&catalog, "BREAD").unwrap().outcome.is_correct());
    /// assert_eq!(game.status(), GameStatus::Won { attempts: 2 });
    /// ```
    pub fn submit(&mut self, catalog: &WordCatalog, raw: &str) -> Result<&GuessRecord, GameError> {
        if self.status() != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }

        let text = raw.trim().to_lowercase();
        let word = Word::new(text.as_str()).map_err(|_| GameError::InvalidGuess(text.clone()))?;
        if !catalog.contains(word.text()) {
            return Err(GameError::InvalidGuess(text));
        }

        let outcome = GuessOutcome::evaluate(&self.answer, &word);
        tracing::debug!(attempt = self.attempt_number(), guess = %word, result = %outcome, "guess evaluated");
        self.history.push(GuessRecord { word, outcome });
        Ok(&self.history[self.history.len() - 1])
    }
}
