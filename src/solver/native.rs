//! In-process oracle
//!
//! Evaluates the bundled rule semantics directly over typed facts: the
//! vocabulary is filtered to the candidates consistent with every active
//! group, each candidate is valued by the mode, and all candidates sharing
//! the best value are returned in vocabulary order.

use super::Mode;
use super::oracle::{Answer, Oracle, OracleError, Verdict};
use crate::core::{WORD_LENGTH, Word};
use crate::encoding::{Fact, FactGroup};
use crate::rules::RuleSet;
use rayon::prelude::*;

/// Oracle that needs no external solver
pub struct NativeOracle {
    mode: Mode,
    vocabulary: Vec<Word>,
}

impl NativeOracle {
    #[must_use]
    pub const fn new(mode: Mode, vocabulary: Vec<Word>) -> Self {
        Self { mode, vocabulary }
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }
}

impl Oracle for NativeOracle {
    fn solve(&mut self, _rules: &RuleSet, groups: &[&FactGroup]) -> Result<Verdict, OracleError> {
        let facts: Vec<Fact> = groups.iter().flat_map(|g| g.iter().copied()).collect();

        let candidates: Vec<&Word> = self
            .vocabulary
            .par_iter()
            .filter(|word| facts.iter().all(|fact| satisfies(word, fact)))
            .collect();

        if candidates.is_empty() {
            return Ok(Verdict::Incoherent);
        }

        let values = value_candidates(self.mode, &candidates);
        let best = values.iter().copied().max().unwrap_or_default();

        let answers = candidates
            .iter()
            .zip(&values)
            .filter(|&(_, &value)| value == best)
            .map(|(&word, &value)| Answer {
                winner: word.clone(),
                score: Some(value),
            })
            .collect();

        Ok(Verdict::Optimal(answers))
    }
}

/// Whether `word` is consistent with `fact`
fn satisfies(word: &Word, fact: &Fact) -> bool {
    match *fact {
        Fact::Green { letter, position } => word.char_at(position) == letter,
        Fact::Yellow {
            letter, position, ..
        } => word.char_at(position) != letter && word.has_letter(letter),
        Fact::Excluded { letter, position } => word.char_at(position) != letter,
        Fact::Absent { letter } => !word.has_letter(letter),
        Fact::Attempt { .. } => true,
    }
}

/// Value of each candidate under `mode`, in candidate order
fn value_candidates(mode: Mode, candidates: &[&Word]) -> Vec<i64> {
    match mode {
        Mode::Frequency => {
            let mut containing = [0i64; 26];
            for word in candidates {
                let counts = word.letter_counts();
                for (letter, &count) in counts.iter().enumerate() {
                    if count > 0 {
                        containing[letter] += 1;
                    }
                }
            }
            candidates
                .par_iter()
                .map(|word| {
                    let counts = word.letter_counts();
                    (0..26)
                        .filter(|&letter| counts[letter] > 0)
                        .map(|letter| containing[letter])
                        .sum::<i64>()
                })
                .collect()
        }
        Mode::Positional => {
            let mut at_position = [[0i64; 26]; WORD_LENGTH];
            for word in candidates {
                for (position, &letter) in word.chars().iter().enumerate() {
                    at_position[position][usize::from(letter - b'a')] += 1;
                }
            }
            candidates
                .par_iter()
                .map(|word| {
                    word.chars()
                        .iter()
                        .enumerate()
                        .map(|(position, &letter)| {
                            at_position[position][usize::from(letter - b'a')]
                        })
                        .sum::<i64>()
                })
                .collect()
        }
        Mode::First => vec![0; candidates.len()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ClueMask;
    use crate::encoding::encode;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn solve(mode: Mode, vocabulary: &[&str], groups: &[&FactGroup]) -> Verdict {
        let rules = RuleSet::bundled(mode, &[]);
        NativeOracle::new(mode, words(vocabulary))
            .solve(&rules, groups)
            .unwrap()
    }

    fn winners(verdict: &Verdict) -> Vec<&str> {
        match verdict {
            Verdict::Optimal(answers) => answers.iter().map(|a| a.winner.text()).collect(),
            Verdict::Incoherent => vec![],
        }
    }

    #[test]
    fn no_facts_first_mode_ties_everything_in_vocabulary_order() {
        let verdict = solve(Mode::First, &["crane", "slate", "stale"], &[]);
        assert_eq!(winners(&verdict), vec!["crane", "slate", "stale"]);
    }

    #[test]
    fn facts_filter_candidates() {
        let guess = Word::new("slate").unwrap();
        let mask = ClueMask::score(&guess, &Word::new("stale").unwrap());
        let group = encode(&guess, &mask, 1);

        let verdict = solve(Mode::First, &["crane", "slate", "stale", "steal"], &[&group]);
        assert_eq!(winners(&verdict), vec!["stale"]);
    }

    #[test]
    fn positional_exclusion_keeps_letter_available() {
        // SPELT has one E, matched at position 2; SLEEP's second E is gray
        let guess = Word::new("sleep").unwrap();
        let mask = ClueMask::score(&guess, &Word::new("spelt").unwrap());
        let group = encode(&guess, &mask, 1);

        let verdict = solve(Mode::First, &["sleep", "spelt", "speed"], &[&group]);
        assert_eq!(winners(&verdict), vec!["spelt"]);
    }

    #[test]
    fn contradictory_facts_are_incoherent() {
        let green = FactGroup::new(
            1,
            vec![Fact::Green {
                letter: b'z',
                position: 0,
            }],
        );
        let verdict = solve(Mode::Frequency, &["crane", "slate"], &[&green]);
        assert_eq!(verdict, Verdict::Incoherent);
    }

    #[test]
    fn frequency_prefers_common_letters() {
        // a and b each appear in three words, every other letter in one
        let verdict = solve(Mode::Frequency, &["cdefg", "aaaab", "aabbb", "abhij"], &[]);
        assert_eq!(winners(&verdict), vec!["abhij"]);
        match verdict {
            Verdict::Optimal(answers) => assert_eq!(answers[0].score, Some(9)),
            Verdict::Incoherent => panic!("expected answers"),
        }
    }

    #[test]
    fn positional_counts_same_slot_letters() {
        let verdict = solve(Mode::Positional, &["slate", "stale", "crane"], &[]);
        // slate and stale both score 10, crane 9
        assert_eq!(winners(&verdict), vec!["slate", "stale"]);
    }

    #[test]
    fn attempt_markers_do_not_filter() {
        let marker = FactGroup::new(3, vec![Fact::Attempt { attempt: 3 }]);
        let verdict = solve(Mode::First, &["crane"], &[&marker]);
        assert_eq!(winners(&verdict), vec!["crane"]);
    }
}
