//! Error taxonomy for the batch runner (Section 7): malformed input aborts
//! only the formula being processed; I/O failures on stats/logging are
//! best-effort and must never corrupt search state.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{path}: {source}")]
    Io { path: String, #[source] source: std::io::Error },

    #[error("{path}: malformed DIMACS input: {reason}")]
    MalformedInput { path: String, reason: String },

    #[error("{path}: {source}")]
    Formula {
        path: String,
        #[source]
        source: nanosat::FormulaError,
    },
}
