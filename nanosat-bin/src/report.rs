//! `results*.csv` row shape and writer (Section 6).

use std::path::Path;

use serde::Serialize;

use nanosat::{Outcome, RunResult};

use crate::error::AppError;

/// One row of `results*.csv`, one per starting-literal run.
#[derive(Debug, Serialize)]
pub struct ResultRow {
    #[serde(rename = "FileName")]
    pub file_name: String,
    #[serde(rename = "n")]
    pub n: u32,
    #[serde(rename = "m")]
    pub m: usize,
    #[serde(rename = "BaseLiteral")]
    pub base_literal: i64,
    #[serde(rename = "CPUms")]
    pub cpu_ms: f64,
    #[serde(rename = "ComplexityOrder")]
    pub complexity_order: f64,
    #[serde(rename = "TotalWork")]
    pub total_work: f64,
    #[serde(rename = "MainLoopOrder")]
    pub main_loop_order: f64,
    #[serde(rename = "WorkPerLoop")]
    pub work_per_loop: f64,
    #[serde(rename = "GetOppUnitsCalls")]
    pub get_opp_units_calls: u64,
    #[serde(rename = "GetUnitsCalls")]
    pub get_units_calls: u64,
    #[serde(rename = "FindUnitsCalls")]
    pub find_units_calls: u64,
    #[serde(rename = "Solution")]
    pub solution: String,
}

impl ResultRow {
    #[must_use]
    pub fn new(file_name: &str, n: u32, m: usize, base_literal: i64, cpu_ms: f64, result: &RunResult) -> Self {
        let stats = &result.stats;
        let iterations = stats.main_loop_iterations.max(1) as f64;
        let main_loop_order = if n > 1 {
            (stats.main_loop_iterations as f64).max(1.0).ln() / f64::from(n).ln()
        } else {
            f64::NAN
        };

        let solution = match &result.outcome {
            Outcome::Sat(assignment) => assignment
                .literals()
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(" "),
            Outcome::Unsat => "UNSAT".to_string(),
        };

        ResultRow {
            file_name: file_name.to_string(),
            n,
            m,
            base_literal,
            cpu_ms,
            complexity_order: stats.complexity_order(n),
            total_work: stats.complexity_counter,
            main_loop_order,
            work_per_loop: stats.complexity_counter / iterations,
            get_opp_units_calls: stats.get_opp_units_calls,
            get_units_calls: stats.get_units_calls,
            find_units_calls: stats.find_units_calls,
            solution,
        }
    }
}

/// Appends rows to a per-run CSV file, writing the header only if the file
/// is new. I/O failures here are surfaced but never abort the search itself
/// (Section 7): callers log and continue.
pub fn append_rows(path: &Path, rows: &[ResultRow]) -> Result<(), AppError> {
    let display = path.display().to_string();
    let is_new = !path.exists();
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| AppError::Io { path: display.clone(), source })?;

    let mut writer = csv::WriterBuilder::new().has_headers(is_new).from_writer(file);
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| AppError::Io { path: display.clone(), source: std::io::Error::other(e) })?;
    }
    writer.flush().map_err(|source| AppError::Io { path: display, source })
}
