//! Command-line surface (Section 6): a formula filename (or `all`) followed
//! by mode tokens matched by case-insensitive substring, in any order.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "nanosat",
    about = "Batch DIMACS CNF runner for the nanosat solver core",
    version
)]
pub struct Cli {
    /// Formula filename, or any token containing "all" (case-insensitive)
    /// to process every *.cnf file in the working directory.
    pub input: String,

    /// Mode tokens, matched by substring: exh, stp, rec, sol (any order).
    pub flags: Vec<String>,
}

/// The four batch-runner mode switches, decoded from the free-form flag
/// tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct Modes {
    /// `exh`: try all `2n` starting literals instead of stopping at the first SAT.
    pub exhaustive: bool,
    /// `stp`: await user input on any UNSAT result.
    pub stop_on_failure: bool,
    /// `rec`: record per-iteration stats to a per-run CSV.
    pub record_csv: bool,
    /// `sol`: print the positive-polarity solution to the console.
    pub print_solution: bool,
}

impl Modes {
    #[must_use]
    pub fn parse(tokens: &[String]) -> Self {
        let mut modes = Modes::default();
        for token in tokens {
            let lower = token.to_lowercase();
            modes.exhaustive |= lower.contains("exh");
            modes.stop_on_failure |= lower.contains("stp");
            modes.record_csv |= lower.contains("rec");
            modes.print_solution |= lower.contains("sol");
        }
        modes
    }
}

/// Whether the positional input names a single file or means "every
/// `*.cnf` in the working directory" (case-insensitive substring `all`).
#[must_use]
pub fn wants_all_formulas(input: &str) -> bool {
    input.to_lowercase().contains("all")
}
