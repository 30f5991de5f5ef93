//! Feedback scoring for a guess against a secret word
//!
//! A clue mask holds one [`CluePosition`] per letter slot. Scoring uses a
//! per-letter yellow budget so repeated letters are never over-credited:
//! greens are settled first, then the remaining occurrences of each letter in
//! the secret are handed out as yellows to the leftmost gray slots.

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback state of a single letter slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CluePosition {
    /// Letter matches the secret at this position
    Green,
    /// Letter occurs elsewhere in the secret
    Yellow,
    /// Letter has no unaccounted occurrence in the secret
    Gray,
}

impl CluePosition {
    /// Single-letter code used in result files: `g`, `y` or `x`
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Green => 'g',
            Self::Yellow => 'y',
            Self::Gray => 'x',
        }
    }

    /// Colored square for terminal output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Gray => '⬜',
        }
    }

    const fn from_code(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            'X' | 'x' | '-' | '_' | '⬜' => Some(Self::Gray),
            _ => None,
        }
    }
}

/// Per-position feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClueMask([CluePosition; WORD_LENGTH]);

impl ClueMask {
    /// All greens (perfect match)
    pub const SOLVED: Self = Self([CluePosition::Green; WORD_LENGTH]);

    /// Build a mask from explicit positions
    #[must_use]
    pub const fn new(positions: [CluePosition; WORD_LENGTH]) -> Self {
        Self(positions)
    }

    /// Score `guess` against `secret`
    ///
    /// # Examples
    /// ```
    /// use wordle_asp::core::{ClueMask, Word};
    ///
    /// let guess = Word::new("slate").unwrap();
    /// let secret = Word::new("stale").unwrap();
    /// let mask = ClueMask::score(&guess, &secret);
    ///
    /// // S(green) L(yellow) A(green) T(yellow) E(green)
    /// assert_eq!(mask.to_string(), "gygyg");
    /// ```
    #[must_use]
    pub fn score(guess: &Word, secret: &Word) -> Self {
        let mut positions = [CluePosition::Gray; WORD_LENGTH];
        let mut budget = secret.letter_counts();

        for (i, slot) in positions.iter_mut().enumerate() {
            if guess.char_at(i) == secret.char_at(i) {
                *slot = CluePosition::Green;
                budget[letter_index(guess.char_at(i))] -= 1;
            }
        }

        // Ascending scan, so the leftmost grays claim the remaining budget
        for (i, slot) in positions.iter_mut().enumerate() {
            if *slot != CluePosition::Gray {
                continue;
            }
            let remaining = &mut budget[letter_index(guess.char_at(i))];
            if *remaining > 0 {
                *slot = CluePosition::Yellow;
                *remaining -= 1;
            }
        }

        Self(positions)
    }

    /// Get the feedback at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> CluePosition {
        self.0[position]
    }

    /// All five positions in order
    #[inline]
    #[must_use]
    pub const fn positions(&self) -> &[CluePosition; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Count the number of green positions
    #[must_use]
    pub fn count_greens(&self) -> usize {
        self.count(CluePosition::Green)
    }

    /// Count the number of yellow positions
    #[must_use]
    pub fn count_yellows(&self) -> usize {
        self.count(CluePosition::Yellow)
    }

    fn count(self, state: CluePosition) -> usize {
        self.0.iter().filter(|&&p| p == state).count()
    }

    /// Render the mask as colored squares, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|p| p.emoji()).collect()
    }
}

const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

impl fmt::Display for ClueMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for position in &self.0 {
            write!(f, "{}", position.code())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for ClueMask {
    type Err = String;

    /// Parse "gyxxg", "GY--G" or "🟩🟨⬜⬜🟩"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut positions = [CluePosition::Gray; WORD_LENGTH];
        let mut chars = s.chars();

        for slot in &mut positions {
            let ch = chars
                .next()
                .ok_or_else(|| format!("Invalid clue mask (too short): {s}"))?;
            *slot = CluePosition::from_code(ch)
                .ok_or_else(|| format!("Invalid clue mask character '{ch}' in {s}"))?;
        }

        if chars.next().is_some() {
            return Err(format!("Invalid clue mask (too long): {s}"));
        }

        Ok(Self(positions))
    }
}
