//! Core domain types for the puzzle
//!
//! Words and clue masks are pure values with no solver dependencies.

mod clue;
mod word;

pub use clue::{ClueMask, CluePosition};
pub use word::{WORD_LENGTH, Word, WordError};
