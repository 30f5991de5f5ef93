//! Solver session
//!
//! Holds the constant rules and the fact groups submitted so far. Each group
//! lives under a handle until it is retracted; the batch runner retracts a
//! word's handles in bulk once its episode ends.

use super::oracle::{Oracle, OracleError, Verdict};
use crate::core::Word;
use crate::encoding::FactGroup;
use crate::rules::RuleSet;
use rustc_hash::FxHashSet;
use std::fmt;

/// Opaque identifier of a submitted fact group
///
/// Handles are assigned in increasing order and never reused by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(u64);

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Best next guess, or the lack of one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The solver proposed `word`; `score` is the auxiliary score if reported
    Solved { word: Word, score: Option<i64> },
    /// The active constraints contradict each other
    Incoherent,
}

/// Session failure
#[derive(Debug)]
pub enum SessionError {
    /// Retraction of a handle that is not active
    UnknownHandle(Handle),
    /// The oracle could not produce a verdict
    Oracle(OracleError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownHandle(handle) => write!(f, "fact group {handle} is not active"),
            Self::Oracle(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnknownHandle(_) => None,
            Self::Oracle(e) => Some(e),
        }
    }
}

impl From<OracleError> for SessionError {
    fn from(e: OracleError) -> Self {
        Self::Oracle(e)
    }
}

/// Stateful front end to a solver oracle
pub struct SolverSession<O: Oracle> {
    oracle: O,
    rules: RuleSet,
    active: Vec<(Handle, FactGroup)>,
    next_handle: u64,
    solver_calls: usize,
}

impl<O: Oracle> SolverSession<O> {
    /// Create a session with only the constant rules active
    pub const fn new(oracle: O, rules: RuleSet) -> Self {
        Self {
            oracle,
            rules,
            active: Vec::new(),
            next_handle: 0,
            solver_calls: 0,
        }
    }

    /// Add a fact group; the solver is not consulted
    pub fn submit(&mut self, group: FactGroup) -> Handle {
        let handle = Handle(self.next_handle);
        self.next_handle += 1;
        log::debug!(
            "submit {handle}: {} facts from attempt {}",
            group.len(),
            group.attempt()
        );
        self.active.push((handle, group));
        handle
    }

    /// Remove a previously submitted fact group
    ///
    /// # Errors
    /// Returns `SessionError::UnknownHandle` if `handle` is not active.
    pub fn retract(&mut self, handle: Handle) -> Result<FactGroup, SessionError> {
        let index = self
            .active
            .iter()
            .position(|(h, _)| *h == handle)
            .ok_or(SessionError::UnknownHandle(handle))?;
        Ok(self.active.remove(index).1)
    }

    /// Remove every group in `handles`
    ///
    /// Either all handles are retracted or none are.
    ///
    /// # Errors
    /// Returns `SessionError::UnknownHandle` for the first handle that is not
    /// active (including a handle listed twice).
    pub fn retract_all(&mut self, handles: &[Handle]) -> Result<(), SessionError> {
        let mut doomed = FxHashSet::default();
        for handle in handles {
            if !doomed.insert(*handle) || !self.active.iter().any(|(h, _)| h == handle) {
                return Err(SessionError::UnknownHandle(*handle));
            }
        }

        self.active.retain(|(h, _)| !doomed.contains(h));
        log::debug!("retracted {} fact groups", handles.len());
        Ok(())
    }

    /// Number of active fact groups (constant rules are not counted)
    #[must_use]
    pub fn active_groups(&self) -> usize {
        self.active.len()
    }

    /// Number of times the oracle has been consulted
    #[must_use]
    pub const fn solver_calls(&self) -> usize {
        self.solver_calls
    }

    #[must_use]
    pub const fn rules(&self) -> &RuleSet {
        &self.rules
    }

    #[must_use]
    pub const fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Ask the oracle for the best next guess
    ///
    /// When several answers are equally optimal, the first one the oracle
    /// returned is chosen.
    ///
    /// # Errors
    /// Returns `SessionError::Oracle` if the oracle fails.
    pub fn best_guess(&mut self) -> Result<Outcome, SessionError> {
        let groups: Vec<&FactGroup> = self.active.iter().map(|(_, g)| g).collect();
        self.solver_calls += 1;

        let outcome = match self.oracle.solve(&self.rules, &groups)? {
            Verdict::Optimal(answers) => {
                if answers.len() > 1 {
                    log::debug!("{} tied optimal answers, taking the first", answers.len());
                }
                let best = answers
                    .into_iter()
                    .next()
                    .ok_or_else(|| OracleError::Parse("optimal verdict without answers".into()))?;
                Outcome::Solved {
                    word: best.winner,
                    score: best.score,
                }
            }
            Verdict::Incoherent => Outcome::Incoherent,
        };

        log::debug!("solver call {} over {} groups: {outcome:?}", self.solver_calls, groups.len());
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::Fact;
    use crate::solver::Mode;
    use crate::solver::oracle::Answer;
    use crate::solver::testing::ScriptedOracle;

    fn group(attempt: usize) -> FactGroup {
        FactGroup::new(attempt, vec![Fact::Attempt { attempt }])
    }

    fn answer(word: &str, score: Option<i64>) -> Answer {
        Answer {
            winner: Word::new(word).unwrap(),
            score,
        }
    }

    fn session(verdicts: Vec<Verdict>) -> SolverSession<ScriptedOracle> {
        SolverSession::new(
            ScriptedOracle::new(verdicts),
            RuleSet::bundled(Mode::First, &[]),
        )
    }

    #[test]
    fn submit_assigns_distinct_handles() {
        let mut session = session(vec![]);
        let a = session.submit(group(1));
        let b = session.submit(group(2));

        assert_ne!(a, b);
        assert_eq!(session.active_groups(), 2);
        assert_eq!(session.solver_calls(), 0);
    }

    #[test]
    fn retract_removes_only_that_group() {
        let mut session = session(vec![]);
        let a = session.submit(group(1));
        let b = session.submit(group(2));

        let removed = session.retract(a).unwrap();
        assert_eq!(removed.attempt(), 1);
        assert_eq!(session.active_groups(), 1);

        session.retract(b).unwrap();
        assert_eq!(session.active_groups(), 0);
    }

    #[test]
    fn retract_unknown_handle_fails() {
        let mut session = session(vec![]);
        let a = session.submit(group(1));
        session.retract(a).unwrap();

        assert!(matches!(
            session.retract(a),
            Err(SessionError::UnknownHandle(h)) if h == a
        ));
    }

    #[test]
    fn retract_all_is_all_or_nothing() {
        let mut session = session(vec![]);
        let a = session.submit(group(1));
        let b = session.submit(group(2));
        let stale = Handle(99);

        assert!(matches!(
            session.retract_all(&[a, stale]),
            Err(SessionError::UnknownHandle(h)) if h == stale
        ));
        assert_eq!(session.active_groups(), 2);

        assert!(session.retract_all(&[a, a]).is_err());
        assert_eq!(session.active_groups(), 2);

        session.retract_all(&[b, a]).unwrap();
        assert_eq!(session.active_groups(), 0);
    }

    #[test]
    fn handles_are_not_reused_after_retraction() {
        let mut session = session(vec![]);
        let a = session.submit(group(1));
        session.retract(a).unwrap();
        let b = session.submit(group(1));
        assert!(b > a);
    }

    #[test]
    fn best_guess_takes_first_of_tied_answers() {
        let mut session = session(vec![Verdict::Optimal(vec![
            answer("crane", Some(7)),
            answer("slate", Some(7)),
        ])]);

        assert_eq!(
            session.best_guess().unwrap(),
            Outcome::Solved {
                word: Word::new("crane").unwrap(),
                score: Some(7)
            }
        );
        assert_eq!(session.solver_calls(), 1);
    }

    #[test]
    fn best_guess_reports_incoherence() {
        let mut session = session(vec![Verdict::Incoherent]);
        assert_eq!(session.best_guess().unwrap(), Outcome::Incoherent);
    }

    #[test]
    fn best_guess_passes_active_groups_in_order() {
        let mut session = session(vec![Verdict::Incoherent, Verdict::Incoherent]);
        let a = session.submit(group(1));
        session.submit(group(2));
        session.best_guess().unwrap();
        session.retract(a).unwrap();
        session.best_guess().unwrap();

        assert_eq!(session.oracle().calls(), &[vec![1, 2], vec![2]]);
    }

    #[test]
    fn empty_optimal_verdict_is_an_error() {
        let mut session = session(vec![Verdict::Optimal(vec![])]);
        assert!(matches!(
            session.best_guess(),
            Err(SessionError::Oracle(OracleError::Parse(_)))
        ));
    }
}
