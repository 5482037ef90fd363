//! Batch runner binary: DIMACS parsing, console/CSV/results-dir output,
//! directory walking and CLI handling around the `nanosat` solver core.

mod batch;
mod cli;
mod console;
mod dimacs;
mod error;
mod report;
mod results_dir;

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use cpu_time::ProcessTime;

use nanosat::{Adjacency, Engine, Formula, Lit};

use cli::{Cli, Modes};
use error::AppError;
use report::ResultRow;

fn main() {
    #[cfg(feature = "logging")]
    env_logger::init();

    let cli = Cli::parse();
    let modes = Modes::parse(&cli.flags);

    let files = if cli::wants_all_formulas(&cli.input) {
        batch::find_cnf_files(Path::new("."))
    } else {
        vec![PathBuf::from(&cli.input)]
    };

    if files.is_empty() {
        eprintln!("no *.cnf files found");
        std::process::exit(1);
    }

    let mut any_failed = false;
    for path in &files {
        if let Err(e) = process_formula(path, modes) {
            eprintln!("{e}");
            any_failed = true;
        }
    }

    if any_failed {
        std::process::exit(1);
    }
}

fn process_formula(path: &Path, modes: Modes) -> Result<(), AppError> {
    let display = path.display().to_string();
    let (n, m, a, b, c) = dimacs::read_clauses(path)?;
    let formula = Formula::new(n, a, b, c).map_err(|source| AppError::Formula { path: display.clone(), source })?;
    let adjacency = Adjacency::build(&formula);
    let engine = Engine::new(&formula, &adjacency);

    let starts: Vec<Lit> = if modes.exhaustive {
        (1..=2 * n).map(Lit::from_index).collect()
    } else {
        vec![Lit::from_index(1)]
    };

    let mut rows = Vec::with_capacity(starts.len());
    let mut any_sat = false;

    for start in starts {
        let cpu_before = ProcessTime::now();
        let wall_before = Instant::now();
        let result = engine.run(start);
        let cpu_ms = cpu_before.elapsed().as_secs_f64() * 1000.0;
        let elapsed = wall_before.elapsed();

        console::print_run_line(&display, n, start.decode(n), elapsed.as_secs_f64() * 1000.0, &result);
        if modes.print_solution {
            console::print_solution(&result.outcome);
        }

        if matches!(result.outcome, nanosat::Outcome::Sat(_)) {
            any_sat = true;
        } else if modes.stop_on_failure {
            eprint!("UNSAT for base literal {}; press Enter to continue...", start.decode(n));
            let mut discard = String::new();
            let _ = std::io::stdin().read_line(&mut discard);
        }

        if let Some(stem) = path.file_name().and_then(|s| s.to_str()) {
            let _ = results_dir::write_result(Path::new("results_dir"), stem, &formula, &result.outcome, elapsed);
        }

        rows.push(ResultRow::new(&display, n, m, start.decode(n), cpu_ms, &result));

        if !modes.exhaustive && any_sat {
            break;
        }
    }

    if modes.record_csv {
        if let Err(e) = report::append_rows(Path::new("results.csv"), &rows) {
            eprintln!("warning: failed to record stats: {e}");
        }
    }

    Ok(())
}
