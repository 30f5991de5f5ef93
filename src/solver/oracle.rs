//! Solver oracle interface
//!
//! An oracle evaluates the rule program together with the active fact groups
//! and reports either its optimal answers or that no answer exists.

use crate::core::Word;
use crate::encoding::FactGroup;
use crate::rules::RuleSet;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

/// One optimal answer: the proposed guess and its optional auxiliary score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub winner: Word,
    pub score: Option<i64>,
}

/// Result of one oracle evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Optimal answers in the order the oracle produced them (never empty)
    Optimal(Vec<Answer>),
    /// The program has no answer
    Incoherent,
}

/// A synchronous constraint solver
///
/// Implementations must be deterministic for identical input so that batch
/// runs are reproducible.
pub trait Oracle {
    /// Evaluate `rules` together with `groups`, in submission order
    ///
    /// # Errors
    /// Returns `OracleError` if the solver cannot be run or its output cannot
    /// be understood.
    fn solve(&mut self, rules: &RuleSet, groups: &[&FactGroup]) -> Result<Verdict, OracleError>;
}

/// Failure to obtain a verdict from an oracle
#[derive(Debug)]
pub enum OracleError {
    /// The solver executable could not be started
    Spawn { program: PathBuf, source: io::Error },
    /// The program text could not be handed to the solver
    Io(io::Error),
    /// The solver exited unsuccessfully without a verdict
    Failed { status: ExitStatus, stderr: String },
    /// The solver output could not be parsed
    Parse(String),
}

impl fmt::Display for OracleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn { program, source } => {
                write!(f, "cannot start solver {}: {source}", program.display())
            }
            Self::Io(e) => write!(f, "cannot write solver program: {e}"),
            Self::Failed { status, stderr } => {
                write!(f, "solver exited with {status}")?;
                if !stderr.trim().is_empty() {
                    write!(f, ": {}", stderr.trim())?;
                }
                Ok(())
            }
            Self::Parse(msg) => write!(f, "unreadable solver output: {msg}"),
        }
    }
}

impl std::error::Error for OracleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Spawn { source, .. } => Some(source),
            Self::Io(e) => Some(e),
            Self::Failed { .. } | Self::Parse(_) => None,
        }
    }
}

impl From<io::Error> for OracleError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
