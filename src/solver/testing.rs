//! Oracle test double that replays canned verdicts

use super::oracle::{Oracle, OracleError, Verdict};
use crate::encoding::FactGroup;
use crate::rules::RuleSet;
use std::collections::VecDeque;

/// Replays verdicts in order and records the attempts it was shown
pub struct ScriptedOracle {
    verdicts: VecDeque<Verdict>,
    calls: Vec<Vec<usize>>,
}

impl ScriptedOracle {
    pub fn new(verdicts: Vec<Verdict>) -> Self {
        Self {
            verdicts: verdicts.into(),
            calls: Vec::new(),
        }
    }

    /// Attempt numbers of the groups passed to each call
    pub fn calls(&self) -> &[Vec<usize>] {
        &self.calls
    }
}

impl Oracle for ScriptedOracle {
    fn solve(&mut self, _rules: &RuleSet, groups: &[&FactGroup]) -> Result<Verdict, OracleError> {
        self.calls.push(groups.iter().map(|g| g.attempt()).collect());
        self.verdicts
            .pop_front()
            .ok_or_else(|| OracleError::Parse("script exhausted".to_string()))
    }
}
