//! Batch Wordle solver driven by an answer-set programming engine
//!
//! Each target word is played from a fixed opening guess. Every guess is
//! scored against the target, the clue mask is encoded as logic facts, and a
//! constraint solver proposes the next guess from the accumulated facts.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_asp::commands::{SolveConfig, solve_word};
//! use wordle_asp::core::Word;
//! use wordle_asp::rules::RuleSet;
//! use wordle_asp::solver::{Mode, NativeOracle, SolverSession};
//! use wordle_asp::wordlists::words_from_slice;
//!
//! let vocabulary = words_from_slice(&["crane", "slate", "stale"]);
//! let rules = RuleSet::bundled(Mode::Frequency, &vocabulary);
//! let mut session = SolverSession::new(NativeOracle::new(Mode::Frequency, vocabulary), rules);
//!
//! let secret = Word::new("stale").unwrap();
//! let opening = Word::new("slate").unwrap();
//! let episode = solve_word(&mut session, &secret, &opening, SolveConfig::default()).unwrap();
//! assert_eq!(episode.attempt_count(), 2);
//! ```

// Core domain types
pub mod core;

// Clue mask to fact encoding
pub mod encoding;

// Solver session and oracles
pub mod solver;

// Logic program rules
pub mod rules;

// Word lists
pub mod wordlists;

// Solving loop and batch runner
pub mod commands;

// Result files and terminal output
pub mod output;
