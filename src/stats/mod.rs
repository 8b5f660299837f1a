//! Cumulative player statistics
//!
//! A histogram of wins per attempt count plus a loss counter, stored on disk
//! as one line of `MAX_NUM_ATTEMPTS + 1` space-separated integers.

mod store;

pub use store::StatsStore;

use crate::core::MAX_NUM_ATTEMPTS;
use std::fmt;

/// Win histogram and loss counter across all finished games
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerStats {
    /// `wins_per_attempts[i]` counts games won on attempt `i + 1`
    pub wins_per_attempts: [u32; MAX_NUM_ATTEMPTS],
    /// Games where every attempt was used without finding the answer
    pub losses: u32,
}

impl PlayerStats {
    /// Fold one finished game into the stats
    ///
    /// `attempts_used` in `1..=MAX_NUM_ATTEMPTS` counts as a win in that
    /// bucket; anything else counts as a loss.
    ///
    /// # Examples
    /// ```
    /// use yorkle::stats::PlayerStats;
    ///
    /// let stats = PlayerStats::default().record_outcome(3).record_outcome(7);
    /// assert_eq!(stats.wins_per_attempts[2], 1);
    /// assert_eq!(stats.losses, 1);
    /// ```
    #[must_use]
    pub fn record_outcome(mut self, attempts_used: usize) -> Self {
        match attempts_used {
            1..=MAX_NUM_ATTEMPTS => {
                let bucket = &mut self.wins_per_attempts[attempts_used - 1];
                *bucket = bucket.saturating_add(1);
            }
            _ => self.losses = self.losses.saturating_add(1),
        }
        self
    }

    /// Total games won
    #[must_use]
    pub fn wins(&self) -> u64 {
        self.wins_per_attempts.iter().map(|&w| u64::from(w)).sum()
    }

    /// Total games finished, won or lost
    #[must_use]
    pub fn played(&self) -> u64 {
        self.wins() + u64::from(self.losses)
    }

    /// Percentage of games won, `0.0` when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        match self.played() {
            0 => 0.0,
            played => 100.0 * self.wins() as f64 / played as f64,
        }
    }

    /// Parse the on-disk record, best effort
    ///
    /// Missing or unparsable fields become zero. Returns the stats and
    /// whether every field was read cleanly.
    #[must_use]
    pub fn parse(text: &str) -> (Self, bool) {
        let mut tokens = text.split_whitespace();
        let mut clean = true;
        let mut next = || match tokens.next().map(str::parse::<u32>) {
            Some(Ok(value)) => value,
            _ => {
                clean = false;
                0
            }
        };

        let mut stats = Self::default();
        for bucket in &mut stats.wins_per_attempts {
            *bucket = next();
        }
        stats.losses = next();

        (stats, clean)
    }
}

/// Formats the exact on-disk record, newline included
impl fmt::Display for PlayerStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for wins in &self.wins_per_attempts {
            write!(f, "{wins} ")?;
        }
        writeln!(f, "{}", self.losses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_in_three_fills_bucket_two() {
        let before = PlayerStats::default();
        let after = before.record_outcome(3);

        assert_eq!(after.wins_per_attempts, [0, 0, 1, 0, 0, 0]);
        assert_eq!(after.losses, before.losses);
    }

    #[test]
    fn seven_attempts_is_a_loss() {
        let after = PlayerStats::default().record_outcome(MAX_NUM_ATTEMPTS + 1);

        assert_eq!(after.losses, 1);
        assert_eq!(after.wins_per_attempts, [0; MAX_NUM_ATTEMPTS]);
    }

    #[test]
    fn boundary_attempts() {
        let stats = PlayerStats::default().record_outcome(1).record_outcome(6);
        assert_eq!(stats.wins_per_attempts, [1, 0, 0, 0, 0, 1]);

        let stats = PlayerStats::default().record_outcome(0);
        assert_eq!(stats.losses, 1);
    }

    #[test]
    fn counters_saturate() {
        let stats = PlayerStats {
            wins_per_attempts: [u32::MAX; MAX_NUM_ATTEMPTS],
            losses: u32::MAX,
        };
        assert_eq!(stats.record_outcome(2).wins_per_attempts[1], u32::MAX);
        assert_eq!(stats.record_outcome(9).losses, u32::MAX);
    }

    #[test]
    fn win_rate() {
        let stats = PlayerStats {
            wins_per_attempts: [0, 3, 17, 21, 6, 8],
            losses: 2,
        };
        assert_eq!(stats.played(), 57);
        assert_eq!(format!("{:.1}", stats.win_rate()), "96.5");
    }

    #[test]
    fn win_rate_without_games() {
        assert!(PlayerStats::default().win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn display_matches_disk_layout() {
        let stats = PlayerStats {
            wins_per_attempts: [0, 3, 17, 21, 6, 8],
            losses: 2,
        };
        assert_eq!(stats.to_string(), "0 3 17 21 6 8 2\n");
    }

    #[test]
    fn parse_clean_record() {
        let (stats, clean) = PlayerStats::parse("1 2 3 4 5 6 7\n");
        assert!(clean);
        assert_eq!(stats.wins_per_attempts, [1, 2, 3, 4, 5, 6]);
        assert_eq!(stats.losses, 7);
    }

    #[test]
    fn parse_truncated_record_defaults_to_zero() {
        let (stats, clean) = PlayerStats::parse("4 5");
        assert!(!clean);
        assert_eq!(stats.wins_per_attempts, [4, 5, 0, 0, 0, 0]);
        assert_eq!(stats.losses, 0);
    }

    #[test]
    fn parse_garbage_field_defaults_to_zero() {
        let (stats, clean) = PlayerStats::parse("1 x 3 4 5 6 -1");
        assert!(!clean);
        assert_eq!(stats.wins_per_attempts, [1, 0, 3, 4, 5, 6]);
        assert_eq!(stats.losses, 0);
    }
}
