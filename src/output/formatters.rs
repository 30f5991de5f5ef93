//! Formatting utilities for terminal output

use crate::commands::AttemptRecord;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Render a guess path as "SLATE 🟩🟨🟩🟨🟩 → STALE 🟩🟩🟩🟩🟩"
#[must_use]
pub fn progression(attempts: &[AttemptRecord]) -> String {
    attempts
        .iter()
        .map(|a| format!("{} {}", a.guess.text().to_uppercase(), a.mask.to_emoji()))
        .collect::<Vec<_>>()
        .join(" → ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ClueMask, Word};

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn progression_joins_attempts() {
        let secret = Word::new("stale").unwrap();
        let guess = Word::new("slate").unwrap();
        let attempts = vec![
            AttemptRecord {
                attempt: 1,
                mask: ClueMask::score(&guess, &secret),
                guess,
            },
            AttemptRecord {
                attempt: 2,
                guess: secret,
                mask: ClueMask::SOLVED,
            },
        ];

        assert_eq!(
            progression(&attempts),
            "SLATE 🟩🟨🟩🟨🟩 → STALE 🟩🟩🟩🟩🟩"
        );
    }
}
