//! Word list loading utilities
//!
//! Loading is strict: any token that is not a valid 5-letter word rejects the
//! whole list, since a silently shortened batch would misreport results.

use crate::core::{Word, WordError};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error loading a word list
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read
    Io { path: PathBuf, source: io::Error },
    /// A token on `line` (1-based) is not a valid word
    Malformed {
        line: usize,
        token: String,
        error: WordError,
    },
    /// The list holds no words
    Empty,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read word list {}: {source}", path.display())
            }
            Self::Malformed { line, token, error } => {
                write!(f, "line {line}: '{token}' is not a valid word: {error}")
            }
            Self::Empty => write!(f, "word list is empty"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Malformed { error, .. } => Some(error),
            Self::Empty => None,
        }
    }
}

/// Load words from a file
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be read, contains an invalid word,
/// or contains no words.
///
/// # Examples
/// ```no_run
/// use wordle_asp::wordlists::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_word_list(&content)?;
    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse whitespace-delimited words, in order
///
/// # Errors
///
/// Returns `LoadError::Malformed` for the first invalid token and
/// `LoadError::Empty` if there are no tokens.
pub fn parse_word_list(content: &str) -> Result<Vec<Word>, LoadError> {
    let mut words = Vec::new();

    for (index, line) in content.lines().enumerate() {
        for token in line.split_whitespace() {
            let word = Word::new(token).map_err(|error| LoadError::Malformed {
                line: index + 1,
                token: token.to_string(),
                error,
            })?;
            words.push(word);
        }
    }

    if words.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(words)
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_asp::wordlists::words_from_slice;
///
/// let words = words_from_slice(&["crane", "toolong", "slate"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
