//! Error taxonomy for the core (Section 7).
//!
//! Only malformed input is user-visible at this layer; propagation conflicts
//! are ordinary control flow and never surface as `Err`. Internal invariant
//! violations are trapped by the certifier (C9) and reported as UNSAT rather
//! than trusted, so they never need an error variant here.

use thiserror::Error;

/// Reasons a [`crate::Formula`] could not be constructed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormulaError {
    #[error("formula must declare at least one variable")]
    NoVariables,

    #[error("clause literal arrays have mismatched lengths: a={a}, b={b}, c={c}")]
    RaggedClauseArrays { a: usize, b: usize, c: usize },

    #[error("clause {clause} contains literal 0, which is not a valid literal")]
    ZeroLiteral { clause: usize },

    #[error("clause {clause} literal {literal} is out of range for n={n} variables")]
    LiteralOutOfRange { clause: usize, literal: i64, n: u32 },
}
