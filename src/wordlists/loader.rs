//! Word list and answer loading
//!
//! Both sources are plain text files of whitespace-separated tokens.

use super::WordCatalog;
use crate::core::Word;
use crate::error::GameError;
use std::fs;
use std::path::Path;

fn read_source(path: &Path) -> Result<String, GameError> {
    fs::read_to_string(path).map_err(|source| GameError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the catalog of valid guesses from a file
///
/// # Errors
///
/// Returns `SourceUnavailable` if the file cannot be read and
/// `EmptyWordList` if it yields no playable words.
///
/// # Examples
/// ```no_run
/// use yorkle::wordlists::loader::load_catalog;
///
/// let catalog = load_catalog("words.txt", 15_000).unwrap();
/// println!("Loaded {} words", catalog.len());
/// ```
pub fn load_catalog<P: AsRef<Path>>(path: P, capacity: usize) -> Result<WordCatalog, GameError> {
    let path = path.as_ref();
    let content = read_source(path)?;

    let catalog = WordCatalog::from_tokens(content.split_whitespace(), capacity);
    if catalog.is_empty() {
        return Err(GameError::EmptyWordList(path.to_path_buf()));
    }

    if catalog.len() == catalog.capacity() {
        tracing::debug!(capacity = catalog.capacity(), "word list filled the catalog, later entries ignored");
    }
    tracing::debug!(path = %path.display(), words = catalog.len(), "loaded word list");
    Ok(catalog)
}

/// Load today's answer: the first token of the file
///
/// # Errors
///
/// Returns `SourceUnavailable` if the file cannot be read and
/// `InvalidAnswer` if it is empty or its first token is not a playable word.
pub fn load_answer<P: AsRef<Path>>(path: P) -> Result<Word, GameError> {
    let path = path.as_ref();
    let content = read_source(path)?;

    let token = content
        .split_whitespace()
        .next()
        .ok_or_else(|| GameError::InvalidAnswer {
            path: path.to_path_buf(),
            reason: "file is empty".into(),
        })?;

    Word::new(token).map_err(|e| GameError::InvalidAnswer {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
