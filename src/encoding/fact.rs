//! Ground facts and fact groups
//!
//! Each fact renders as a single answer-set programming atom. Positions are
//! stored zero-based and written one-based.

use std::fmt;

/// One constraint learned from a single attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fact {
    /// Letter confirmed at position
    Green { letter: u8, position: usize },
    /// Letter occurs in the secret but not at position, learned at `attempt`
    Yellow {
        letter: u8,
        position: usize,
        attempt: usize,
    },
    /// Letter is not at position, though it occurs elsewhere
    Excluded { letter: u8, position: usize },
    /// Letter never occurs in the secret
    Absent { letter: u8 },
    /// Marks that attempt `attempt` happened
    Attempt { attempt: usize },
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Green { letter, position } => {
                write!(f, "green({},{}).", char::from(letter), position + 1)
            }
            Self::Yellow {
                letter,
                position,
                attempt,
            } => write!(
                f,
                "yellow({},{},{attempt}).",
                char::from(letter),
                position + 1
            ),
            Self::Excluded { letter, position } => {
                write!(f, "excluded({},{}).", char::from(letter), position + 1)
            }
            Self::Absent { letter } => write!(f, "absent({}).", char::from(letter)),
            Self::Attempt { attempt } => write!(f, "attempt({attempt})."),
        }
    }
}

/// The facts produced by one attempt, submitted and retracted as a unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactGroup {
    attempt: usize,
    facts: Vec<Fact>,
}

impl FactGroup {
    #[must_use]
    pub const fn new(attempt: usize, facts: Vec<Fact>) -> Self {
        Self { attempt, facts }
    }

    /// Attempt number that produced this group (1-based)
    #[must_use]
    pub const fn attempt(&self) -> usize {
        self.attempt
    }

    #[must_use]
    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fact> {
        self.facts.iter()
    }

    /// Render the group as program text, one atom per line
    #[must_use]
    pub fn to_program(&self) -> String {
        let mut program = String::new();
        for fact in &self.facts {
            program.push_str(&fact.to_string());
            program.push('\n');
        }
        program
    }
}

impl<'a> IntoIterator for &'a FactGroup {
    type Item = &'a Fact;
    type IntoIter = std::slice::Iter<'a, Fact>;

    fn into_iter(self) -> Self::IntoIter {
        self.facts.iter()
    }
}
