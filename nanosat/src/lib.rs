//! `nanosat`: an experimental 3-SAT solver core.
//!
//! Decides satisfiability of a 3-CNF formula by growing a partial
//! assignment ("lambda") through a custom backtracking search, propagating
//! implications over an opposite-adjacency index, pruning repeated search
//! states with a fingerprinted memoization table, and cycling through
//! candidate starting literals on restart.
//!
//! This crate is the core only: DIMACS parsing, console/CSV output, batch
//! directory walking and command-line handling live in the `nanosat-bin`
//! binary crate built on top of it.

mod adjacency;
mod assignment;
mod certify;
mod error;
mod fingerprint;
mod formula;
mod literal;
mod propagate;
mod search;
mod stats;

pub use adjacency::Adjacency;
pub use certify::Assignment;
pub use error::FormulaError;
pub use formula::Formula;
pub use literal::Lit;
pub use search::{Engine, Outcome, RunResult};
pub use stats::Stats;
