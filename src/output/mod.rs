//! Result output
//!
//! CSV result files and colored terminal summaries.

pub mod csv;
pub mod display;
pub mod formatters;

pub use csv::{format_line, write_results};
pub use display::{print_batch_statistics, print_exhausted_words};
