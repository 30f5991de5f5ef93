//! Rule program loading
//!
//! Rule text is cleaned before it reaches the solver: comments are cut and
//! `#show` directives are dropped, since the oracle selects its own output
//! atoms.

use super::bundled;
use crate::core::Word;
use crate::solver::Mode;
use std::fmt::{self, Write as _};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name of the shared rules inside a rules directory
pub const COMMON_FILE: &str = "common.lp";

/// Error reading a rule file
#[derive(Debug)]
pub struct RuleError {
    pub path: PathBuf,
    pub source: io::Error,
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot read rule file {}: {}", self.path.display(), self.source)
    }
}

impl std::error::Error for RuleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// The constant part of every solver program: rules plus vocabulary facts
#[derive(Debug, Clone)]
pub struct RuleSet {
    mode: Mode,
    program: String,
}

impl RuleSet {
    /// Build from the rule files bundled into the binary
    #[must_use]
    pub fn bundled(mode: Mode, vocabulary: &[Word]) -> Self {
        Self::assemble(
            mode,
            bundled::COMMON,
            bundled::mode_rules(mode),
            vocabulary,
        )
    }

    /// Build from `common.lp` and `<mode>.lp` inside `dir`
    ///
    /// # Errors
    /// Returns `RuleError` if either file cannot be read.
    pub fn load(dir: &Path, mode: Mode, vocabulary: &[Word]) -> Result<Self, RuleError> {
        let common = read_rule_file(&dir.join(COMMON_FILE))?;
        let ranking = read_rule_file(&dir.join(mode.rule_file()))?;
        Ok(Self::assemble(mode, &common, &ranking, vocabulary))
    }

    fn assemble(mode: Mode, common: &str, ranking: &str, vocabulary: &[Word]) -> Self {
        let mut program = strip_program(common);
        program.push_str(&strip_program(ranking));
        program.push_str(&vocabulary_program(vocabulary));
        log::debug!(
            "assembled {mode} rules: {} bytes, {} vocabulary words",
            program.len(),
            vocabulary.len()
        );
        Self { mode, program }
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Program text submitted ahead of every fact group
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }
}

fn read_rule_file(path: &Path) -> Result<String, RuleError> {
    fs::read_to_string(path).map_err(|source| RuleError {
        path: path.to_path_buf(),
        source,
    })
}

/// Remove comments and `#show` directives from rule text
///
/// Everything after a `%` on a line is a comment. Blank lines are dropped and
/// every kept line ends with a newline.
///
/// # Examples
/// ```
/// use wordle_asp::rules::strip_program;
///
/// let text = "% header\na(1). % trailing\n#show a/1.\nb :- a(X).\n";
/// assert_eq!(strip_program(text), "a(1).\nb :- a(X).\n");
/// ```
#[must_use]
pub fn strip_program(text: &str) -> String {
    let mut program = String::with_capacity(text.len());

    for line in text.lines() {
        let code = line.split_once('%').map_or(line, |(code, _)| code).trim();
        if code.is_empty() || code.starts_with("#show") {
            continue;
        }
        program.push_str(code);
        program.push('\n');
    }

    program
}

/// Render the vocabulary as `word/1` and `letter_at/3` facts (1-based)
#[must_use]
pub fn vocabulary_program(vocabulary: &[Word]) -> String {
    let mut program = String::with_capacity(vocabulary.len() * 96);

    for word in vocabulary {
        // Writing to a String cannot fail
        let _ = writeln!(program, "word({word}).");
        for (i, &letter) in word.chars().iter().enumerate() {
            let _ = writeln!(program, "letter_at({word},{},{}).", i + 1, char::from(letter));
        }
    }

    program
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_rules_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "wordle_asp_rules_{name}_{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn strip_drops_comments_and_show() {
        let text = "\
% full-line comment
  candidate(W) :- word(W), not violates(W).   % why
#show winner/1.
   #show score/2.

:~ winner(W). [1@1]
";
        assert_eq!(
            strip_program(text),
            "candidate(W) :- word(W), not violates(W).\n:~ winner(W). [1@1]\n"
        );
    }

    #[test]
    fn strip_keeps_other_directives() {
        assert_eq!(strip_program("#const n=5.\n"), "#const n=5.\n");
    }

    #[test]
    fn vocabulary_facts_are_one_based() {
        let words = vec![Word::new("crane").unwrap()];
        let program = vocabulary_program(&words);

        assert!(program.starts_with("word(crane).\n"));
        assert!(program.contains("letter_at(crane,1,c).\n"));
        assert!(program.contains("letter_at(crane,5,e).\n"));
        assert_eq!(program.lines().count(), 6);
    }

    #[test]
    fn bundled_rules_have_no_comments_or_show() {
        for name in Mode::NAMES {
            let mode = Mode::from_name(name).unwrap();
            let rules = RuleSet::bundled(mode, &[]);

            assert_eq!(rules.mode(), mode);
            assert!(rules.program().contains("candidate(W)"));
            assert!(rules.program().contains("score(W,S)"));
            assert!(!rules.program().contains('%'));
            assert!(!rules.program().contains("#show"));
        }
    }

    #[test]
    fn load_reads_common_and_mode_file() {
        let dir = temp_rules_dir("load");
        fs::write(dir.join("common.lp"), "% shared\ncandidate(W) :- word(W).\n").unwrap();
        fs::write(dir.join("first.lp"), "value(W,0) :- candidate(W).\n#show value/2.\n").unwrap();

        let words = vec![Word::new("slate").unwrap()];
        let rules = RuleSet::load(&dir, Mode::First, &words).unwrap();

        assert!(rules.program().starts_with(
            "candidate(W) :- word(W).\nvalue(W,0) :- candidate(W).\nword(slate).\n"
        ));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = temp_rules_dir("missing");
        fs::write(dir.join("common.lp"), "candidate(W) :- word(W).\n").unwrap();

        let err = RuleSet::load(&dir, Mode::Positional, &[]).unwrap_err();
        assert_eq!(err.path, dir.join("positional.lp"));
        assert_eq!(err.source.kind(), io::ErrorKind::NotFound);
        fs::remove_dir_all(&dir).unwrap();
    }
}
