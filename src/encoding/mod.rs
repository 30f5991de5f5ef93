//! Constraint encoding of clue masks
//!
//! Turns the feedback from one attempt into ground facts for the solver.

mod encoder;
mod fact;

pub use encoder::{decode, encode};
pub use fact::{Fact, FactGroup};
