//! `results_dir/<formula>.txt` writer (Section 6): either the clause list
//! reordered so column `a` holds the satisfying literal per clause, plus a
//! runtime footer, or the string `NON SAT,...`.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use nanosat::{Formula, Outcome};

use crate::error::AppError;

#[must_use]
pub fn output_path(dir: &Path, formula_file: &str) -> PathBuf {
    let stem = Path::new(formula_file)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| formula_file.to_string());
    dir.join(format!("{stem}.txt"))
}

pub fn write_result(dir: &Path, formula_file: &str, formula: &Formula, outcome: &Outcome, elapsed: Duration) -> Result<(), AppError> {
    std::fs::create_dir_all(dir).map_err(|source| AppError::Io { path: dir.display().to_string(), source })?;
    let path = output_path(dir, formula_file);
    let display = path.display().to_string();
    let mut file = std::fs::File::create(&path).map_err(|source| AppError::Io { path: display.clone(), source })?;

    match outcome {
        Outcome::Sat(assignment) => {
            let decoded = assignment.literals();
            for (a, b, c) in formula.clauses() {
                // Reorder the triple so column `a` holds whichever literal of
                // this clause the assignment actually satisfies. A clause
                // padded to 3-arity (Section 3/6) may repeat the same literal
                // in more than one slot, so the other two slots are picked by
                // position, not by filtering out every equal value.
                let triple = [a, b, c];
                let satisfying_pos = triple.iter().position(|&lit| decoded.contains(&lit)).unwrap_or(0);
                let rest: Vec<i64> = (0..3).filter(|&i| i != satisfying_pos).map(|i| triple[i]).collect();
                writeln!(file, "{} {} {}", triple[satisfying_pos], rest[0], rest[1])
                    .map_err(|source| AppError::Io { path: display.clone(), source })?;
            }
            writeln!(file, "# runtime: {:.3}ms", elapsed.as_secs_f64() * 1000.0)
                .map_err(|source| AppError::Io { path: display, source })?;
        }
        Outcome::Unsat => {
            writeln!(file, "NON SAT,{:.3}", elapsed.as_secs_f64() * 1000.0)
                .map_err(|source| AppError::Io { path: display, source })?;
        }
    }
    Ok(())
}
