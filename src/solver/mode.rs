//! Guess scoring modes
//!
//! A mode names the rule file that ranks the remaining candidates. The native
//! oracle evaluates the same ranking in-process.

use std::fmt;

/// Closed set of candidate ranking strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Sum of distinct-letter frequencies across candidates
    Frequency,
    /// Sum of same-position letter frequencies across candidates
    Positional,
    /// No ranking; the first candidate wins
    First,
}

/// Error for a mode name outside the supported set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeError(pub String);

impl fmt::Display for ModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown mode '{}' (expected one of: {})",
            self.0,
            Mode::NAMES.join(", ")
        )
    }
}

impl std::error::Error for ModeError {}

impl Mode {
    /// Every supported mode name
    pub const NAMES: [&'static str; 3] = ["frequency", "positional", "first"];

    /// Create a mode from its name (case-insensitive)
    ///
    /// # Errors
    /// Returns `ModeError` for names outside [`Mode::NAMES`].
    ///
    /// # Examples
    /// ```
    /// use wordle_asp::solver::Mode;
    ///
    /// assert_eq!(Mode::from_name("Frequency").unwrap(), Mode::Frequency);
    /// assert!(Mode::from_name("entropy").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self, ModeError> {
        match name.to_ascii_lowercase().as_str() {
            "frequency" => Ok(Self::Frequency),
            "positional" => Ok(Self::Positional),
            "first" => Ok(Self::First),
            _ => Err(ModeError(name.to_string())),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Frequency => "frequency",
            Self::Positional => "positional",
            Self::First => "first",
        }
    }

    /// File name of this mode's rule program
    #[must_use]
    pub fn rule_file(self) -> String {
        format!("{}.lp", self.name())
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Mode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
