//! Solver session and oracles
//!
//! The session drives a solver oracle: either an external answer-set solver
//! process or the in-process evaluator of the same rules.

mod mode;
pub mod native;
mod oracle;
pub mod process;
mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use mode::{Mode, ModeError};
pub use native::NativeOracle;
pub use oracle::{Answer, Oracle, OracleError, Verdict};
pub use process::{ProcessOracle, parse_output};
pub use session::{Handle, Outcome, SessionError, SolverSession};
