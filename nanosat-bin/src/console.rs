//! Console pretty-printing (Section 6): one tabular line per starting
//! literal, with complexity order, wall time, MDB size and SAT/NON-SAT.

use ansi_term::Colour;

use nanosat::{Outcome, RunResult};

/// Prints one table row for a single `RunEngine` invocation.
pub fn print_run_line(file_name: &str, n: u32, base_literal: i64, wall_ms: f64, result: &RunResult) {
    let order = result.stats.complexity_order(n);
    let verdict = match result.outcome {
        Outcome::Sat(_) => Colour::Green.bold().paint("SAT"),
        Outcome::Unsat => Colour::Red.bold().paint("NON-SAT"),
    };
    println!(
        "{file_name:<24} base={base_literal:<4} order={order:>6.2} time={wall_ms:>8.2}ms mdb={:<8} {verdict}",
        result.mdb_size
    );
}

/// Prints the positive-polarity solution (`sol` flag).
pub fn print_solution(outcome: &Outcome) {
    match outcome {
        Outcome::Sat(assignment) => {
            let positives: Vec<String> = assignment
                .literals()
                .iter()
                .filter(|&&lit| lit > 0)
                .map(i64::to_string)
                .collect();
            println!("solution: {}", positives.join(" "));
        }
        Outcome::Unsat => println!("solution: <none, UNSAT>"),
    }
}
