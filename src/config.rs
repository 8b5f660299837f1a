//! Game configuration
//!
//! Locations of the word list, today's answer and the stats file, plus the
//! catalog capacity. Built from the command line by the binary.

use std::path::PathBuf;

use crate::error::GameError;

/// Default word list location
pub const WORD_LIST_FILENAME: &str = "words.txt";

/// Default answer location
pub const TODAYS_ANSWER_FILENAME: &str = "answer.txt";

/// Default stats location
pub const STATS_FILENAME: &str = "stats.txt";

/// Default cap on the number of words kept from the word list
pub const DEFAULT_MAX_VALID_WORDS: usize = 15_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub word_list_path: PathBuf,
    pub answer_path: PathBuf,
    pub stats_path: PathBuf,
    pub max_valid_words: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            word_list_path: PathBuf::from(WORD_LIST_FILENAME),
            answer_path: PathBuf::from(TODAYS_ANSWER_FILENAME),
            stats_path: PathBuf::from(STATS_FILENAME),
            max_valid_words: DEFAULT_MAX_VALID_WORDS,
        }
    }
}

impl GameConfig {
    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Config` if the catalog capacity is zero.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.max_valid_words == 0 {
            return Err(GameError::Config("max_valid_words must be > 0".into()));
        }
        Ok(())
    }
}
