//! Wordle ASP Solver - CLI
//!
//! Solves every word of a word list from a fixed opening guess, asking an
//! answer-set solver for each following guess, and writes one CSV line per
//! word.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use colored::Colorize;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use wordle_asp::{
    commands::{BatchConfig, BatchError, BatchReport, DEFAULT_MAX_TRIES, SolveConfig, run_batch},
    core::{Word, WordError},
    output::{formatters::progression, print_batch_statistics, print_exhausted_words, write_results},
    rules::{RuleError, RuleSet},
    solver::{Mode, ModeError, NativeOracle, ProcessOracle, SessionError, SolverSession},
    wordlists::{LoadError, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_asp",
    about = "Batch Wordle solver driven by an answer-set programming engine",
    version,
    author
)]
struct Cli {
    /// Word list: whitespace-separated 5-letter words, solved in order
    wordlist: PathBuf,

    /// Scoring mode: frequency, positional or first
    mode: String,

    /// Opening guess used for every word
    start: String,

    /// Result file (one CSV line per word)
    #[arg(short, long, default_value = "results.csv")]
    output: PathBuf,

    /// Maximum attempts per word
    #[arg(long, default_value_t = DEFAULT_MAX_TRIES, value_parser = parse_tries)]
    max_tries: usize,

    /// External ASP solver executable (dlv2, clingo, ...); in-process solver if omitted
    #[arg(long)]
    solver: Option<PathBuf>,

    /// Extra argument passed to the external solver (repeatable)
    #[arg(long = "solver-arg", allow_hyphen_values = true)]
    solver_args: Vec<String>,

    /// Directory holding common.lp and <mode>.lp for the external solver
    #[arg(long, requires = "solver")]
    rules: Option<PathBuf>,

    /// More log output (-v info, -vv debug); `RUST_LOG` overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// No progress bar or summary
    #[arg(short, long)]
    quiet: bool,
}

fn parse_tries(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(format!("'{s}' is not a positive number of attempts")),
    }
}

/// Failure classes, each with its own exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Failure {
    Input = 3,
    Mode = 4,
    Incoherent = 5,
    Solver = 6,
    Output = 7,
    Internal = 70,
}

impl Failure {
    /// Classify by the outermost recognised error in the chain
    fn classify(err: &anyhow::Error) -> Self {
        for cause in err.chain() {
            if cause.is::<LoadError>() || cause.is::<WordError>() {
                return Self::Input;
            }
            if cause.is::<ModeError>() {
                return Self::Mode;
            }
            if cause.is::<RuleError>() {
                return Self::Solver;
            }
            if let Some(batch) = cause.downcast_ref::<BatchError>() {
                return match batch {
                    BatchError::Incoherent { .. } => Self::Incoherent,
                    BatchError::Session {
                        source: SessionError::UnknownHandle(_),
                        ..
                    }
                    | BatchError::Invariant { .. } => Self::Internal,
                    BatchError::Session { .. } => Self::Solver,
                };
            }
            if cause.is::<io::Error>() {
                return Self::Output;
            }
        }
        Self::Internal
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let failure = Failure::classify(&err);
            eprintln!("{} {err:#}", "error:".red().bold());
            if let Some(BatchError::Incoherent { attempts, .. }) = err.downcast_ref::<BatchError>()
            {
                eprintln!("  guesses so far: {}", progression(attempts));
            }
            ExitCode::from(failure as u8)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let mode = Mode::from_name(&cli.mode)?;
    let words = load_from_file(&cli.wordlist)?;
    let opening = Word::new(&cli.start)
        .with_context(|| format!("invalid starting word '{}'", cli.start))?;

    let rules = match &cli.rules {
        Some(dir) => RuleSet::load(dir, mode, &words)?,
        None => RuleSet::bundled(mode, &words),
    };

    let config = BatchConfig {
        solve: SolveConfig::new(cli.max_tries),
        show_progress: !cli.quiet,
    };

    let report = if let Some(program) = &cli.solver {
        let oracle = ProcessOracle::new(program, cli.solver_args.clone());
        log::info!("using external solver {}", oracle.program().display());
        let mut session = SolverSession::new(oracle, rules);
        run_batch(&mut session, &words, &opening, config)?
    } else {
        log::info!("using in-process solver");
        let mut session = SolverSession::new(NativeOracle::new(mode, words.clone()), rules);
        run_batch(&mut session, &words, &opening, config)?
    };

    write_results(&cli.output, &report.results)
        .with_context(|| format!("cannot write results to {}", cli.output.display()))?;

    if !cli.quiet {
        print_summary(&report, cli);
    }
    Ok(())
}

fn print_summary(report: &BatchReport, cli: &Cli) {
    let stats = report.statistics();
    print_batch_statistics(report, &stats, cli.max_tries);
    print_exhausted_words(&report.results);
    println!(
        "\n✅ Results written to {}",
        cli.output.display().to_string().bright_green()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tries_rejects_zero_and_garbage() {
        assert_eq!(parse_tries("6"), Ok(6));
        assert!(parse_tries("0").is_err());
        assert!(parse_tries("six").is_err());
    }

    #[test]
    fn cli_takes_three_positionals() {
        let cli = Cli::try_parse_from(["wordle_asp", "words.txt", "frequency", "slate"]).unwrap();
        assert_eq!(cli.wordlist, PathBuf::from("words.txt"));
        assert_eq!(cli.mode, "frequency");
        assert_eq!(cli.start, "slate");
        assert_eq!(cli.max_tries, DEFAULT_MAX_TRIES);
        assert_eq!(cli.output, PathBuf::from("results.csv"));
        assert!(cli.solver.is_none());
    }

    #[test]
    fn cli_missing_positional_is_an_error() {
        assert!(Cli::try_parse_from(["wordle_asp", "words.txt", "frequency"]).is_err());
    }

    #[test]
    fn solver_args_accept_leading_dashes() {
        let cli = Cli::try_parse_from([
            "wordle_asp",
            "words.txt",
            "positional",
            "crane",
            "--solver",
            "dlv2",
            "--solver-arg",
            "--filter=winner/1,score/2",
        ])
        .unwrap();
        assert_eq!(cli.solver_args, vec!["--filter=winner/1,score/2"]);
    }

    #[test]
    fn rules_dir_needs_an_external_solver() {
        let err = Cli::try_parse_from([
            "wordle_asp",
            "words.txt",
            "first",
            "slate",
            "--rules",
            "my_rules",
        ])
        .err()
        .unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);

        let cli = Cli::try_parse_from([
            "wordle_asp",
            "words.txt",
            "first",
            "slate",
            "--rules",
            "my_rules",
            "--solver",
            "clingo",
        ])
        .unwrap();
        assert_eq!(cli.rules, Some(PathBuf::from("my_rules")));
    }

    #[test]
    fn failures_map_to_distinct_exit_codes() {
        let mode = anyhow::Error::new(ModeError("bogus".into()));
        assert_eq!(Failure::classify(&mode), Failure::Mode);

        let input = anyhow::Error::new(LoadError::Empty).context("loading");
        assert_eq!(Failure::classify(&input), Failure::Input);

        let start =
            anyhow::Error::new(WordError::InvalidLength(3)).context("invalid starting word");
        assert_eq!(Failure::classify(&start), Failure::Input);

        let incoherent = anyhow::Error::new(BatchError::Incoherent {
            word: Word::new("zzzzz").unwrap(),
            attempt: 2,
            attempts: Vec::new(),
        });
        assert_eq!(Failure::classify(&incoherent), Failure::Incoherent);

        let output = anyhow::Error::new(io::Error::other("disk full")).context("cannot write");
        assert_eq!(Failure::classify(&output), Failure::Output);

        let codes = [
            Failure::Input,
            Failure::Mode,
            Failure::Incoherent,
            Failure::Solver,
            Failure::Output,
            Failure::Internal,
        ]
        .map(|f| f as u8);
        assert_eq!(codes, [3, 4, 5, 6, 7, 70]);
    }
}
