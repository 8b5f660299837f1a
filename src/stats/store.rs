//! File-backed persistence for [`PlayerStats`]

use super::PlayerStats;
use crate::error::GameError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Reads and writes the stats record at a fixed path
#[derive(Debug, Clone)]
pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load stats, starting from zero when no usable file exists
    ///
    /// A truncated or corrupted file is recovered field by field.
    #[must_use]
    pub fn load(&self) -> PlayerStats {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return PlayerStats::default(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "cannot read stats, starting from zero");
                return PlayerStats::default();
            }
        };

        let (stats, clean) = PlayerStats::parse(&text);
        if !clean {
            tracing::warn!(path = %self.path.display(), "stats file is malformed, missing fields set to zero");
        }
        stats
    }

    /// Overwrite the stats file with `stats`
    ///
    /// # Errors
    ///
    /// Returns `PersistenceWrite` if the file cannot be written.
    pub fn persist(&self, stats: &PlayerStats) -> Result<(), GameError> {
        fs::write(&self.path, stats.to_string()).map_err(|source| GameError::PersistenceWrite {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), "stats saved");
        Ok(())
    }

    /// Forget all history by deleting the stats file
    ///
    /// # Errors
    ///
    /// Returns `PersistenceWrite` if an existing file cannot be removed.
    pub fn reset(&self) -> Result<(), GameError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(GameError::PersistenceWrite {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
