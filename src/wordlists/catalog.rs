//! Catalog of words the player is allowed to guess

use crate::core::WORD_SIZE;
use rustc_hash::FxHashSet;

/// Fixed-capacity, read-only set of valid guess words
///
/// Entries are kept verbatim (no case folding) in source order. Once
/// `capacity` words are stored, further tokens are ignored.
#[derive(Debug, Clone)]
pub struct WordCatalog {
    words: Vec<String>,
    index: FxHashSet<String>,
    capacity: usize,
}

impl WordCatalog {
    /// Build a catalog from a token stream
    ///
    /// Tokens whose length is not [`WORD_SIZE`] and repeated tokens are
    /// skipped and do not count towards `capacity`.
    ///
    /// # Examples
    /// ```
    /// use yorkle::wordlists::WordCatalog;
    ///
    /// let catalog = WordCatalog::from_tokens(["crane", "slate", "irate"], 2);
    /// assert!(catalog.contains("slate"));
    /// assert!(!catalog.contains("irate"));
    /// ```
    pub fn from_tokens<I, S>(tokens: I, capacity: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut index = FxHashSet::default();

        for token in tokens {
            if words.len() >= capacity {
                break;
            }
            let token = token.as_ref();
            if token.chars().count() != WORD_SIZE {
                tracing::debug!(token, "skipping word list entry of wrong length");
                continue;
            }
            if index.insert(token.to_string()) {
                words.push(token.to_string());
            }
        }

        Self {
            words,
            index,
            capacity,
        }
    }

    /// Check whether `word` is a valid guess
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// Number of stored words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Maximum number of words this catalog keeps
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Stored words in source order
    #[cfg(test)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership() {
        let catalog = WordCatalog::from_tokens(["crane", "slate"], 10);
        assert!(catalog.contains("crane"));
        assert!(catalog.contains("slate"));
        assert!(!catalog.contains("irate"));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn truncates_at_capacity() {
        let catalog = WordCatalog::from_tokens(["crane", "slate", "irate", "audio"], 3);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.capacity(), 3);
        assert!(catalog.contains("irate"));
        assert!(!catalog.contains("audio"));
    }

    #[test]
    fn entries_are_verbatim() {
        let catalog = WordCatalog::from_tokens(["CRANE"], 10);
        assert!(catalog.contains("CRANE"));
        assert!(!catalog.contains("crane"));
    }

    #[test]
    fn skips_wrong_length_and_duplicates() {
        let catalog = WordCatalog::from_tokens(["crane", "toolong", "abc", "crane", "slate"], 2);
        assert_eq!(catalog.iter().collect::<Vec<_>>(), vec!["crane", "slate"]);
    }

    #[test]
    fn empty_source() {
        let catalog = WordCatalog::from_tokens(Vec::<String>::new(), 10);
        assert!(catalog.is_empty());
    }
}
