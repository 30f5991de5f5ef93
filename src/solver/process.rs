//! External solver process
//!
//! The program is written to a scratch file and passed as the last argument
//! to the solver executable. Both DLV2 and clingo text output are understood:
//!
//! - DLV2: one `{atom, atom}` line per answer set, optionally followed by
//!   `COST c@l ...`; `INCOHERENT` when there is none.
//! - clingo: `Answer: N` followed by a line of space-separated atoms and an
//!   optional `Optimization: c ...`; `UNSATISFIABLE` when there is none.
//!
//! Optimal answers are those with the least cost, compared level by level
//! from the highest level down.

use super::oracle::{Answer, Oracle, OracleError, Verdict};
use crate::core::Word;
use crate::encoding::FactGroup;
use crate::rules::RuleSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Oracle backed by an external answer-set solver executable
pub struct ProcessOracle {
    program: PathBuf,
    args: Vec<String>,
    scratch_dir: PathBuf,
    calls: u64,
}

impl ProcessOracle {
    /// Run `program` with `args` followed by the scratch program path
    #[must_use]
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            scratch_dir: std::env::temp_dir(),
            calls: 0,
        }
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    #[cfg(test)]
    fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = dir.into();
        self
    }

    fn scratch_path(&self) -> PathBuf {
        self.scratch_dir.join(format!(
            "wordle_asp_{}_{}.lp",
            std::process::id(),
            self.calls
        ))
    }
}

/// Full program text: rules first, then each group in submission order
#[must_use]
pub fn render_program(rules: &RuleSet, groups: &[&FactGroup]) -> String {
    let mut text = rules.program().to_string();
    for group in groups {
        text.push_str(&group.to_program());
    }
    text
}

impl Oracle for ProcessOracle {
    fn solve(&mut self, rules: &RuleSet, groups: &[&FactGroup]) -> Result<Verdict, OracleError> {
        self.calls += 1;
        let path = self.scratch_path();
        fs::write(&path, render_program(rules, groups))?;

        log::debug!(
            "running {} {} {}",
            self.program.display(),
            self.args.join(" "),
            path.display()
        );
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(&path)
            .output();

        if let Err(e) = fs::remove_file(&path) {
            log::warn!("could not remove {}: {e}", path.display());
        }

        let output = output.map_err(|source| OracleError::Spawn {
            program: self.program.clone(),
            source,
        })?;
        let stdout = String::from_utf8_lossy(&output.stdout);

        match parse_output(&stdout) {
            Ok(Some(verdict)) => Ok(verdict),
            Ok(None) if !output.status.success() => Err(OracleError::Failed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            }),
            Ok(None) => Err(OracleError::Parse("no answer sets and no incoherence marker".into())),
            Err(e) => Err(e),
        }
    }
}

/// One answer set as printed by the solver
#[derive(Debug, Default)]
struct RawAnswer {
    atoms: Vec<String>,
    /// (level, cost) pairs
    costs: Vec<(i64, i64)>,
}

/// Parse solver output into a verdict
///
/// Returns `Ok(None)` when the output holds neither answers nor an
/// incoherence marker.
///
/// # Errors
/// Returns `OracleError::Parse` for malformed cost lines or answer sets
/// that name no guess.
///
/// # Examples
/// ```
/// use wordle_asp::solver::{parse_output, Verdict};
///
/// let out = "DLV 2.1.2\n\n{winner(crane), score(crane,12)}\nCOST 3@1\nOPTIMUM\n";
/// match parse_output(out).unwrap() {
///     Some(Verdict::Optimal(answers)) => assert_eq!(answers[0].winner.text(), "crane"),
///     _ => panic!("expected an answer"),
/// }
/// ```
pub fn parse_output(output: &str) -> Result<Option<Verdict>, OracleError> {
    let mut answers: Vec<RawAnswer> = Vec::new();
    let mut incoherent = false;
    let mut expect_atoms = false;

    for line in output.lines() {
        let line = line.trim();

        if expect_atoms {
            expect_atoms = false;
            answers.push(RawAnswer {
                atoms: line.split_whitespace().map(str::to_string).collect(),
                costs: Vec::new(),
            });
        } else if line == "INCOHERENT" || line == "UNSATISFIABLE" {
            incoherent = true;
        } else if line.starts_with("Answer:") {
            expect_atoms = true;
        } else if let Some(inner) = line.strip_prefix('{').and_then(|l| l.strip_suffix('}')) {
            answers.push(RawAnswer {
                atoms: split_atoms(inner),
                costs: Vec::new(),
            });
        } else if let Some(costs) = line.strip_prefix("COST ") {
            let parsed = parse_dlv_costs(costs)?;
            if let Some(last) = answers.last_mut() {
                last.costs = parsed;
            }
        } else if let Some(costs) = line.strip_prefix("Optimization:") {
            let parsed = parse_clingo_costs(costs)?;
            if let Some(last) = answers.last_mut() {
                last.costs = parsed;
            }
        }
    }

    if answers.is_empty() {
        return Ok(incoherent.then_some(Verdict::Incoherent));
    }

    let optimal = select_optimal(answers)
        .iter()
        .map(to_answer)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Some(Verdict::Optimal(optimal)))
}

/// Split `a(x,y), b, c(z)` on top-level commas
fn split_atoms(inner: &str) -> Vec<String> {
    let mut atoms = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, ch) in inner.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                atoms.push(inner[start..i].trim().to_string());
                start = i + 1;
            }
            _ => {}
        }
    }
    atoms.push(inner[start..].trim().to_string());
    atoms.retain(|a| !a.is_empty());
    atoms
}

/// `3@1 2@2` -> [(1, 3), (2, 2)]
fn parse_dlv_costs(text: &str) -> Result<Vec<(i64, i64)>, OracleError> {
    text.split_whitespace()
        .map(|pair| {
            let (cost, level) = pair
                .split_once('@')
                .ok_or_else(|| OracleError::Parse(format!("bad cost '{pair}'")))?;
            Ok((parse_int(level)?, parse_int(cost)?))
        })
        .collect()
}

/// `5 3` -> [(1, 3), (2, 5)]; clingo lists the highest priority first
fn parse_clingo_costs(text: &str) -> Result<Vec<(i64, i64)>, OracleError> {
    let costs: Vec<i64> = text
        .split_whitespace()
        .map(parse_int)
        .collect::<Result<_, _>>()?;
    Ok((1..).zip(costs.into_iter().rev()).collect())
}

fn parse_int(text: &str) -> Result<i64, OracleError> {
    text.parse()
        .map_err(|_| OracleError::Parse(format!("bad number '{text}'")))
}

/// Answers sharing the least cost, in output order
fn select_optimal(answers: Vec<RawAnswer>) -> Vec<RawAnswer> {
    let top_level = answers
        .iter()
        .flat_map(|a| a.costs.iter().map(|&(level, _)| level))
        .max()
        .unwrap_or(0);

    // Cost at each level, highest level first; missing levels cost nothing
    let key = |answer: &RawAnswer| -> Vec<i64> {
        (1..=top_level)
            .rev()
            .map(|level| {
                answer
                    .costs
                    .iter()
                    .filter(|&&(l, _)| l == level)
                    .map(|&(_, cost)| cost)
                    .sum::<i64>()
            })
            .collect()
    };

    let Some(best) = answers.iter().map(key).min() else {
        return answers;
    };
    answers.into_iter().filter(|a| key(a) == best).collect()
}

fn to_answer(raw: &RawAnswer) -> Result<Answer, OracleError> {
    let mut winner = None;
    let mut scored = None;
    let mut score = None;

    for atom in &raw.atoms {
        let Some((name, args)) = parse_atom(atom) else {
            continue;
        };
        match (name, args.as_slice()) {
            ("winner", [word]) => winner = Some(*word),
            ("score", [word, value]) => {
                scored = Some(*word);
                score = Some(parse_int(value)?);
            }
            _ => {}
        }
    }

    let word = winner.or(scored).ok_or_else(|| {
        OracleError::Parse(format!("answer set names no guess: {}", raw.atoms.join(" ")))
    })?;
    let winner = Word::new(word.trim_matches('"'))
        .map_err(|e| OracleError::Parse(format!("solver proposed '{word}': {e}")))?;

    Ok(Answer { winner, score })
}

/// `score(crane,12)` -> `("score", ["crane", "12"])`
fn parse_atom(atom: &str) -> Option<(&str, Vec<&str>)> {
    let Some((name, rest)) = atom.split_once('(') else {
        return Some((atom, Vec::new()));
    };
    let args = rest.strip_suffix(')')?;
    Some((name, args.split(',').map(str::trim).collect()))
}
