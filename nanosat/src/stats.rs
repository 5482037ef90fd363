//! Complexity Counter (C10) and call-count bookkeeping.
//!
//! `complexity_counter` is a diagnostic, not a correctness signal: it is a
//! monotone work estimate used only to derive the reported empirical
//! `O(n^k)` order at the end of a run.

/// Per-run history entry: the lambda size and current head literal at one
/// main-loop iteration, kept for diagnostics (`rec` CSV output, §6).
#[derive(Debug, Clone, Copy)]
pub struct HistoryEntry {
    pub lambda_len: usize,
    pub head: crate::literal::Lit,
}

#[derive(Debug, Clone, Default)]
pub struct Stats {
    pub complexity_counter: f64,
    pub find_units_calls: u64,
    pub get_units_calls: u64,
    pub get_opp_units_calls: u64,
    pub main_loop_iterations: u64,
    pub history: Vec<HistoryEntry>,
}

impl Stats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Work increment at `SaveState`: by `|lambda|`.
    pub fn charge_save_state(&mut self, lambda_len: usize) {
        self.complexity_counter += lambda_len as f64;
    }

    /// Work increment during `FindUnits`/`GetOppUnits`: by `|adj_opp[l]|`.
    pub fn charge_adjacency_scan(&mut self, pairs_scanned: usize) {
        self.complexity_counter += pairs_scanned as f64;
    }

    pub fn record_iteration(&mut self, lambda_len: usize, head: crate::literal::Lit) {
        self.main_loop_iterations += 1;
        self.history.push(HistoryEntry { lambda_len, head });
    }

    /// The empirical `log_n(W)` complexity order; `NaN` for degenerate
    /// `n <= 1` or when no work has been charged.
    #[must_use]
    pub fn complexity_order(&self, n: u32) -> f64 {
        if n <= 1 || self.complexity_counter <= 0.0 {
            return f64::NAN;
        }
        self.complexity_counter.ln() / f64::from(n).ln()
    }
}
