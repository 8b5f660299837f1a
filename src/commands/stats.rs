//! Stats inspection and reset

use crate::config::GameConfig;
use crate::output::print_report;
use crate::stats::StatsStore;
use anyhow::Result;
use std::io::Write;

/// Print the saved stats report
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn show_stats<W: Write>(config: &GameConfig, out: &mut W) -> Result<()> {
    let stats = StatsStore::new(&config.stats_path).load();
    print_report(out, &stats)?;
    Ok(())
}

/// Delete the saved stats
///
/// # Errors
///
/// Returns an error if the stats file exists but cannot be removed.
pub fn reset_stats<W: Write>(config: &GameConfig, out: &mut W) -> Result<()> {
    let store = StatsStore::new(&config.stats_path);
    store.reset()?;
    writeln!(out, "Stats reset ({} removed).", store.path().display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config_in(dir: &tempfile::TempDir) -> GameConfig {
        GameConfig {
            stats_path: dir.path().join("stats.txt"),
            ..GameConfig::default()
        }
    }

    #[test]
    fn show_saved_stats() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        fs::write(&config.stats_path, "0 1 1 0 0 0 0\n").unwrap();

        let mut out = Vec::new();
        show_stats(&config, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Played: 2\nWin %: 100.0%\n"));
        assert!(text.contains("2: * 1\n3: * 1\n"));
    }

    #[test]
    fn reset_then_show_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        fs::write(&config.stats_path, "5 5 5 5 5 5 5\n").unwrap();

        let mut out = Vec::new();
        reset_stats(&config, &mut out).unwrap();
        assert!(!config.stats_path.exists());

        let mut out = Vec::new();
        show_stats(&config, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("Played: 0\n"));
    }
}
