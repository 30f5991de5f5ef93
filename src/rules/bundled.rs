//! Rule files compiled into the binary

use crate::solver::Mode;

/// Candidate filtering and winner selection shared by every mode
pub const COMMON: &str = include_str!("../../rules/common.lp");

const FREQUENCY: &str = include_str!("../../rules/frequency.lp");
const POSITIONAL: &str = include_str!("../../rules/positional.lp");
const FIRST: &str = include_str!("../../rules/first.lp");

/// Ranking rules for `mode`
pub const fn mode_rules(mode: Mode) -> &'static str {
    match mode {
        Mode::Frequency => FREQUENCY,
        Mode::Positional => POSITIONAL,
        Mode::First => FIRST,
    }
}
