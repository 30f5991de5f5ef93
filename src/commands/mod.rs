//! Command implementations

pub mod batch;
pub mod solve;

pub use batch::{BatchConfig, BatchError, BatchReport, BatchStatistics, WordResult, run_batch};
pub use solve::{
    AttemptRecord, DEFAULT_MAX_TRIES, Episode, EpisodeStatus, SolveConfig, solve_word,
};
