//! Formatting utilities for terminal output

use crate::core::{GuessOutcome, LetterResult, Word};
use colored::{Color, Colorize};

/// Foreground and background color for one letter classification
#[must_use]
pub const fn letter_colors(result: LetterResult) -> (Color, Color) {
    match result {
        LetterResult::InPlace => (Color::Black, Color::Green),
        LetterResult::WrongPlace => (Color::Yellow, Color::Black),
        LetterResult::Incorrect => (Color::White, Color::Black),
    }
}

/// Render each letter of `guess` in the colors of its classification
#[must_use]
pub fn colorize_guess(guess: &Word, outcome: &GuessOutcome) -> String {
    guess
        .text()
        .chars()
        .zip(outcome.results())
        .map(|(letter, &result)| {
            let (fg, bg) = letter_colors(result);
            letter.to_string().color(fg).on_color(bg).to_string()
        })
        .collect()
}

/// Longest bar drawn for a distribution bucket
pub const MAX_BAR_WIDTH: usize = 50;

/// Star bar for one distribution bucket: `"*** 3"`, or just `"0"` when empty
///
/// One star per win, clamped to [`MAX_BAR_WIDTH`] stars.
#[must_use]
pub fn distribution_bar(count: u32) -> String {
    if count == 0 {
        return "0".to_string();
    }
    let stars = (count as usize).min(MAX_BAR_WIDTH);
    format!("{} {count}", "*".repeat(stars))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_colors_are_distinct() {
        let in_place = letter_colors(LetterResult::InPlace);
        let wrong_place = letter_colors(LetterResult::WrongPlace);
        let incorrect = letter_colors(LetterResult::Incorrect);

        assert_eq!(in_place, (Color::Black, Color::Green));
        assert_ne!(in_place, wrong_place);
        assert_ne!(wrong_place, incorrect);
        assert_ne!(in_place, incorrect);
    }

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                chars.by_ref().find(|&c| c == 'm');
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn colorize_guess_keeps_letters_in_order() {
        let answer = Word::new("bread").unwrap();
        let guess = Word::new("erase").unwrap();
        let rendered = colorize_guess(&guess, &GuessOutcome::evaluate(&answer, &guess));

        assert_eq!(strip_ansi(&rendered), "erase");
    }

    #[test]
    fn distribution_bar_empty() {
        assert_eq!(distribution_bar(0), "0");
    }

    #[test]
    fn distribution_bar_clamped() {
        let bar = distribution_bar(u32::MAX);
        assert_eq!(bar, format!("{} {}", "*".repeat(MAX_BAR_WIDTH), u32::MAX));
        assert_eq!(distribution_bar(51).matches('*').count(), MAX_BAR_WIDTH);
    }

    #[test]
    fn distribution_bar_counts() {
        assert_eq!(distribution_bar(1), "* 1");
        assert_eq!(distribution_bar(3), "*** 3");
    }
}
