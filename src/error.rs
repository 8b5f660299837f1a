use std::path::PathBuf;

/// Errors surfaced by the game library.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("cannot read {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("word list {0} contains no playable words")]
    EmptyWordList(PathBuf),

    #[error("answer in {path} is not playable: {reason}")]
    InvalidAnswer { path: PathBuf, reason: String },

    #[error("'{0}' is not a valid word.")]
    InvalidGuess(String),

    #[error("the game is already over")]
    GameOver,

    #[error("failed to save stats to {path}: {source}")]
    PersistenceWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_guess_display() {
        let err = GameError::InvalidGuess("xyzzy".into());
        assert_eq!(err.to_string(), "'xyzzy' is not a valid word.");
    }

    #[test]
    fn source_unavailable_display() {
        let err = GameError::SourceUnavailable {
            path: PathBuf::from("words.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "cannot read words.txt: missing");
    }

    #[test]
    fn config_display() {
        let err = GameError::Config("max_valid_words must be > 0".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: max_valid_words must be > 0"
        );
    }
}
