//! CSV result file
//!
//! One line per word in input order:
//! `word,attemptCount,guess1,clue1,guess2,clue2,...`

use crate::commands::WordResult;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Format one result line (without newline)
///
/// # Examples
/// ```
/// use wordle_asp::commands::{AttemptRecord, EpisodeStatus, WordResult};
/// use wordle_asp::core::{ClueMask, Word};
/// use wordle_asp::output::format_line;
///
/// let secret = Word::new("stale").unwrap();
/// let guess = Word::new("slate").unwrap();
/// let result = WordResult {
///     word: secret.clone(),
///     status: EpisodeStatus::Matched,
///     attempts: vec![
///         AttemptRecord { attempt: 1, mask: ClueMask::score(&guess, &secret), guess },
///         AttemptRecord { attempt: 2, guess: secret.clone(), mask: ClueMask::SOLVED },
///     ],
/// };
/// assert_eq!(format_line(&result), "stale,2,slate,gygyg,stale,ggggg");
/// ```
#[must_use]
pub fn format_line(result: &WordResult) -> String {
    let mut line = format!("{},{}", result.word, result.attempt_count());
    for record in &result.attempts {
        line.push(',');
        line.push_str(record.guess.text());
        line.push(',');
        line.push_str(&record.mask.to_string());
    }
    line
}

/// Write all result lines to `out`
///
/// # Errors
/// Returns any I/O error from `out`.
pub fn write_lines<W: Write>(out: &mut W, results: &[WordResult]) -> io::Result<()> {
    for result in results {
        writeln!(out, "{}", format_line(result))?;
    }
    out.flush()
}

/// Write the result file at `path`
///
/// The lines go to a sibling temporary file that is renamed over `path` once
/// complete, so a reader never sees a partial file.
///
/// # Errors
/// Returns any I/O error from creating, writing or renaming the file.
pub fn write_results(path: &Path, results: &[WordResult]) -> io::Result<()> {
    let mut partial = path.as_os_str().to_owned();
    partial.push(".partial");

    let mut out = BufWriter::new(File::create(&partial)?);
    write_lines(&mut out, results)?;
    out.into_inner().map_err(io::IntoInnerError::into_error)?.sync_all()?;

    fs::rename(&partial, path)?;
    log::info!("wrote {} results to {}", results.len(), path.display());
    Ok(())
}
