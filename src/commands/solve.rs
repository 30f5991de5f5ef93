//! Single-word solving episode
//!
//! Plays one target word: the opening guess first, then solver proposals,
//! feeding each clue mask back to the session as a fact group.

use crate::core::{ClueMask, Word};
use crate::encoding::encode;
use crate::solver::{Handle, Oracle, Outcome, SessionError, SolverSession};

/// Default attempt budget per word
pub const DEFAULT_MAX_TRIES: usize = 6;

/// Configuration for solving a word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveConfig {
    pub max_tries: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(max_tries: usize) -> Self {
        Self { max_tries }
    }
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TRIES)
    }
}

/// One guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptRecord {
    /// 1-based attempt index
    pub attempt: usize,
    pub guess: Word,
    pub mask: ClueMask,
}

/// How an episode ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EpisodeStatus {
    /// The last attempt matched the secret
    Matched,
    /// The attempt budget ran out without a match
    Exhausted,
    /// The solver found the accumulated constraints contradictory
    Incoherent,
}

/// Result of solving one word
#[derive(Debug, Clone)]
pub struct Episode {
    pub secret: Word,
    pub status: EpisodeStatus,
    pub attempts: Vec<AttemptRecord>,
    /// Fact groups submitted during the episode, in submission order
    pub handles: Vec<Handle>,
}

impl Episode {
    fn new(secret: &Word) -> Self {
        Self {
            secret: secret.clone(),
            status: EpisodeStatus::Exhausted,
            attempts: Vec::new(),
            handles: Vec::new(),
        }
    }

    /// Number of guesses made
    #[must_use]
    pub fn attempt_count(&self) -> usize {
        self.attempts.len()
    }
}

/// Solve `secret`, starting from `opening`
///
/// The caller owns cleanup: every handle in the returned episode is still
/// active in `session`. If the session fails, the handles submitted so far
/// are retracted before the error is returned.
///
/// # Errors
///
/// Returns `SessionError` if the oracle fails.
pub fn solve_word<O: Oracle>(
    session: &mut SolverSession<O>,
    secret: &Word,
    opening: &Word,
    config: SolveConfig,
) -> Result<Episode, SessionError> {
    let mut episode = Episode::new(secret);

    if opening == secret {
        episode.attempts.push(AttemptRecord {
            attempt: 1,
            guess: opening.clone(),
            mask: ClueMask::SOLVED,
        });
        episode.status = EpisodeStatus::Matched;
        return Ok(episode);
    }

    match play(session, secret, opening, config, &mut episode) {
        Ok(()) => Ok(episode),
        Err(e) => {
            if let Err(cleanup) = session.retract_all(&episode.handles) {
                log::error!("cleanup after failure on {secret} also failed: {cleanup}");
            }
            Err(e)
        }
    }
}

fn play<O: Oracle>(
    session: &mut SolverSession<O>,
    secret: &Word,
    opening: &Word,
    config: SolveConfig,
    episode: &mut Episode,
) -> Result<(), SessionError> {
    let mut guess = opening.clone();

    for attempt in 1..=config.max_tries.max(1) {
        if attempt > 1 {
            match session.best_guess()? {
                Outcome::Solved { word, score } => {
                    log::debug!("{secret}: solver proposes {word} (score {score:?})");
                    guess = word;
                }
                Outcome::Incoherent => {
                    log::error!("{secret}: constraints incoherent at attempt {attempt}");
                    episode.status = EpisodeStatus::Incoherent;
                    return Ok(());
                }
            }
        }

        let mask = ClueMask::score(&guess, secret);
        let group = encode(&guess, &mask, attempt);
        log::debug!("{secret}: attempt {attempt} {guess} -> {mask}");
        episode.handles.push(session.submit(group));
        episode.attempts.push(AttemptRecord {
            attempt,
            guess: guess.clone(),
            mask,
        });

        if mask.is_solved() {
            episode.status = EpisodeStatus::Matched;
            return Ok(());
        }
    }

    log::warn!("{secret}: not solved within {} attempts", config.max_tries);
    episode.status = EpisodeStatus::Exhausted;
    Ok(())
}
