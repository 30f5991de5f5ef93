//! Batch solving over a word list
//!
//! Runs one episode per word with a shared solver session. Between words the
//! session is returned to its constant rules by retracting exactly the fact
//! groups the finished episode submitted.

use super::solve::{AttemptRecord, EpisodeStatus, SolveConfig, solve_word};
use crate::core::Word;
use crate::solver::{Oracle, SessionError, SolverSession};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};

/// Configuration for a batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchConfig {
    pub solve: SolveConfig,
    pub show_progress: bool,
}

/// Outcome for one target word
#[derive(Debug, Clone)]
pub struct WordResult {
    pub word: Word,
    pub status: EpisodeStatus,
    pub attempts: Vec<AttemptRecord>,
}

impl WordResult {
    #[must_use]
    pub fn attempt_count(&self) -> usize {
        self.attempts.len()
    }

    #[must_use]
    pub fn solved(&self) -> bool {
        self.status == EpisodeStatus::Matched
    }
}

/// Everything a completed batch produced
#[derive(Debug)]
pub struct BatchReport {
    /// One entry per input word, in input order
    pub results: Vec<WordResult>,
    pub duration: Duration,
    pub solver_calls: usize,
}

/// Summary numbers for a batch
#[derive(Debug, Clone, PartialEq)]
pub struct BatchStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub exhausted: usize,
    /// Mean attempts over solved words
    pub average_attempts: f64,
    pub max_attempts: usize,
    /// Solved words by attempt count
    pub distribution: BTreeMap<usize, usize>,
    /// Solved words needing the most attempts, hardest first
    pub hardest: Vec<(String, usize)>,
}

impl BatchReport {
    #[must_use]
    pub fn statistics(&self) -> BatchStatistics {
        let solved: Vec<&WordResult> = self.results.iter().filter(|r| r.solved()).collect();

        let mut distribution = BTreeMap::new();
        for result in &solved {
            *distribution.entry(result.attempt_count()).or_insert(0) += 1;
        }

        let total_attempts: usize = solved.iter().map(|r| r.attempt_count()).sum();
        let average_attempts = if solved.is_empty() {
            0.0
        } else {
            total_attempts as f64 / solved.len() as f64
        };

        let mut hardest: Vec<(String, usize)> = solved
            .iter()
            .map(|r| (r.word.text().to_string(), r.attempt_count()))
            .collect();
        hardest.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
        hardest.truncate(5);

        BatchStatistics {
            total_words: self.results.len(),
            solved: solved.len(),
            exhausted: self.results.len() - solved.len(),
            average_attempts,
            max_attempts: solved.iter().map(|r| r.attempt_count()).max().unwrap_or(0),
            distribution,
            hardest,
        }
    }
}

/// Fatal batch failure
#[derive(Debug)]
pub enum BatchError {
    /// The solver found the constraints for `word` contradictory
    Incoherent {
        word: Word,
        attempt: usize,
        attempts: Vec<AttemptRecord>,
    },
    /// The session failed while solving `word`
    Session { word: Word, source: SessionError },
    /// Session bookkeeping broke an invariant
    Invariant { word: Word, detail: String },
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incoherent { word, attempt, .. } => write!(
                f,
                "solver constraints became incoherent for '{word}' at attempt {attempt}"
            ),
            Self::Session { word, source } => write!(f, "solving '{word}' failed: {source}"),
            Self::Invariant { word, detail } => {
                write!(f, "internal error after '{word}': {detail}")
            }
        }
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Session { source, .. } => Some(source),
            Self::Incoherent { .. } | Self::Invariant { .. } => None,
        }
    }
}

/// Solve every word in `words`, in order, starting each from `opening`
///
/// # Errors
///
/// Returns `BatchError::Incoherent` on the first incoherent episode (the
/// batch is aborted), `BatchError::Session` if the oracle fails, and
/// `BatchError::Invariant` if fact groups leak between words.
pub fn run_batch<O: Oracle>(
    session: &mut SolverSession<O>,
    words: &[Word],
    opening: &Word,
    config: BatchConfig,
) -> Result<BatchReport, BatchError> {
    log::info!(
        "solving {} words from '{opening}' with {} mode, {} tries each",
        words.len(),
        session.rules().mode(),
        config.solve.max_tries
    );

    let pb = progress_bar(words.len(), config.show_progress);
    let start = Instant::now();
    let mut results = Vec::with_capacity(words.len());

    for word in words {
        ensure_clean(session, word, "before")?;

        let episode =
            solve_word(session, word, opening, config.solve).map_err(|source| BatchError::Session {
                word: word.clone(),
                source,
            })?;

        session
            .retract_all(&episode.handles)
            .map_err(|e| BatchError::Invariant {
                word: word.clone(),
                detail: e.to_string(),
            })?;
        ensure_clean(session, word, "after")?;

        if episode.status == EpisodeStatus::Incoherent {
            pb.abandon_with_message(format!("incoherent at {word}"));
            return Err(BatchError::Incoherent {
                word: word.clone(),
                attempt: episode.attempt_count() + 1,
                attempts: episode.attempts,
            });
        }

        results.push(WordResult {
            word: word.clone(),
            status: episode.status,
            attempts: episode.attempts,
        });

        if results.len() % 10 == 0 {
            let solved = results.iter().filter(|r| r.solved()).count();
            pb.set_message(format!("solved {solved}/{}", results.len()));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();
    log::info!(
        "batch finished in {:.2}s with {} solver calls",
        duration.as_secs_f64(),
        session.solver_calls()
    );

    Ok(BatchReport {
        results,
        duration,
        solver_calls: session.solver_calls(),
    })
}

fn ensure_clean<O: Oracle>(
    session: &SolverSession<O>,
    word: &Word,
    when: &str,
) -> Result<(), BatchError> {
    match session.active_groups() {
        0 => Ok(()),
        leaked => Err(BatchError::Invariant {
            word: word.clone(),
            detail: format!("{leaked} fact groups active {when} the episode"),
        }),
    }
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}
