//! Logic program rules for the external solver
//!
//! The shared filtering rules and the per-mode ranking rules are bundled into
//! the binary; a rules directory can replace them at run time.

mod bundled;
pub mod loader;

pub use loader::{RuleError, RuleSet, strip_program, vocabulary_program};
