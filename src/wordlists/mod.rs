//! Word list input
//!
//! The batch reads its target words from a whitespace-delimited file, once,
//! before any solving starts. The same list is the solver's vocabulary.

pub mod loader;

pub use loader::{LoadError, load_from_file, parse_word_list, words_from_slice};
