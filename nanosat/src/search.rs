//! Search Driver (C8): `RunEngine`, the main backtracking loop that grows
//! lambda, flips polarities on conflict, and restarts with new headers.

use crate::adjacency::Adjacency;
use crate::assignment::Lambda;
use crate::certify;
use crate::certify::Assignment;
use crate::fingerprint::Mdb;
use crate::formula::Formula;
use crate::literal::Lit;
use crate::propagate::get_all_units;
use crate::stats::Stats;

/// Outcome of one `RunEngine` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Sat(Assignment),
    Unsat,
}

/// Everything a `RunEngine` call returns besides the decision itself.
#[derive(Debug)]
pub struct RunResult {
    pub outcome: Outcome,
    pub stats: Stats,
    pub mdb_size: usize,
}

/// Which starting literals have already served as a restart root
/// (Section 3, "Header set"). Reset at the start of every `run`.
struct Header {
    used: Vec<bool>,
}

impl Header {
    fn new(n: u32) -> Self {
        Header { used: vec![false; (2 * n + 1) as usize] }
    }

    fn mark(&mut self, lit: Lit) {
        self.used[lit.index() as usize] = true;
    }

    /// `IncrementHeader`: picks the lowest-indexed unused literal, marks it
    /// used, and returns it. `None` once all `2n` headers are exhausted.
    fn increment(&mut self, n: u32) -> Option<Lit> {
        for idx in 1..=2 * n {
            if !self.used[idx as usize] {
                self.used[idx as usize] = true;
                return Some(Lit::from_index(idx));
            }
        }
        None
    }
}

/// Cyclic successor: `(Xk mod 2n) + 1`.
fn cyclic_next(xk: Lit, n: u32) -> Lit {
    let two_n = 2 * n;
    Lit::from_index(xk.index() % two_n + 1)
}

/// A bound search context over one formula's clause set and adjacency
/// indexes, built once and reused across starting literals.
pub struct Engine<'a> {
    formula: &'a Formula,
    adj: &'a Adjacency,
    n: u32,
}

impl<'a> Engine<'a> {
    #[must_use]
    pub fn new(formula: &'a Formula, adj: &'a Adjacency) -> Self {
        Engine { formula, adj, n: formula.n() }
    }

    /// `RunEngine` (Section 4.8): drives the search from `start`, cycling
    /// through restart headers internally until a solution is found or all
    /// `2n` headers are exhausted.
    #[must_use]
    pub fn run(&self, start: Lit) -> RunResult {
        let n = self.n;
        let mut lambda = Lambda::new(n);
        let mut mdb = Mdb::new();
        let mut stats = Stats::new();
        let mut header = Header::new(n);

        let mut xk = start;
        header.mark(xk);
        lambda.push_back(xk);
        let mut flip = false;

        let outcome = loop {
            if lambda.len() as u32 >= n {
                break self.finish(&lambda);
            }

            if lambda.is_empty() {
                match header.increment(n) {
                    Some(new_root) => {
                        #[cfg(feature = "logging")]
                        log::trace!("restart: new header root {}", new_root.decode(n));
                        xk = new_root;
                        lambda.push_back(xk);
                    }
                    None => break Outcome::Unsat,
                }
            }

            // Step 1: advance Xk cyclically past whatever is already settled.
            // Pre-test: a candidate fresh off a conflict (Xk <- Opposite(Xk))
            // must be tried as-is when it isn't blocked, not skipped past.
            while lambda.contains(xk) || lambda.contains(xk.opposite(n)) {
                xk = cyclic_next(xk, n);
            }

            // Step 2.
            lambda.push_back(xk);
            stats.record_iteration(lambda.len(), xk);

            // Step 3.
            let fresh = mdb.save_state(&lambda);
            stats.charge_save_state(lambda.len());
            #[cfg(feature = "logging")]
            if !fresh {
                log::trace!("mdb hit: state already visited at |lambda|={}", lambda.len());
            }
            let propagated_ok = fresh && get_all_units(self.adj, &mut lambda, n, &mut stats);
            let binary_ok = lambda.len() as u32 == n
                && certify::covers_every_clause(self.formula, &lambda, n);

            if !propagated_ok || (lambda.len() as u32 == n && !binary_ok) {
                // Step 4: conflict. Undo the literal just appended and try
                // its opposite polarity next.
                #[cfg(feature = "logging")]
                log::debug!("conflict on {}: flipping polarity", xk.decode(n));
                flip = !flip;
                lambda.pop_back();
                xk = xk.opposite(n);

                if !flip {
                    // Both polarities of the previous candidate failed.
                    lambda.pop_back();
                    if lambda.len() == 1 {
                        if let Some(lone) = lambda.back() {
                            header.mark(lone);
                            header.mark(lone.opposite(n));
                        }
                    }
                }
            } else {
                // Step 5: progress. Memoize the post-propagation state too.
                mdb.save_state(&lambda);
                stats.charge_save_state(lambda.len());
                flip = false;
            }
        };

        RunResult { outcome, stats, mdb_size: mdb.len() }
    }

    fn finish(&self, lambda: &Lambda) -> Outcome {
        match certify::certify(self.formula, lambda, self.n) {
            Some(assignment) => Outcome::Sat(assignment),
            None => Outcome::Unsat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_run(formula: &Formula, start: i64) -> Outcome {
        let adj = Adjacency::build(formula);
        let engine = Engine::new(formula, &adj);
        engine.run(Lit::encode(start, formula.n())).outcome
    }

    #[test]
    fn trivial_sat() {
        // p cnf 3 2 / 1 2 3 0 / -1 -2 3 0
        let formula = Formula::new(3, vec![1, -1], vec![2, -2], vec![3, 3]).unwrap();
        let outcome = engine_run(&formula, 1);
        match outcome {
            Outcome::Sat(assignment) => assert!(assignment.value(3)),
            Outcome::Unsat => panic!("expected SAT"),
        }
    }

    #[test]
    fn pigeonhole_like_unsat() {
        // p cnf 2 4 / 1 1 1 / -1 -1 -1 / 2 2 2 / -2 -2 -2
        let formula = Formula::new(
            2,
            vec![1, -1, 2, -2],
            vec![1, -1, 2, -2],
            vec![1, -1, 2, -2],
        )
        .unwrap();
        let adj = Adjacency::build(&formula);
        let engine = Engine::new(&formula, &adj);
        for idx in 1..=4u32 {
            let outcome = engine.run(Lit::from_index(idx)).outcome;
            assert_eq!(outcome, Outcome::Unsat, "idx={idx}");
        }
    }

    #[test]
    fn boundary_single_variable_single_clause() {
        // p cnf 1 1 / 1 1 1
        let formula = Formula::new(1, vec![1], vec![1], vec![1]).unwrap();
        match engine_run(&formula, 1) {
            Outcome::Sat(assignment) => assert_eq!(assignment.literals(), &[1]),
            Outcome::Unsat => panic!("expected SAT"),
        }
    }

    #[test]
    fn tautology_clause_is_sat() {
        // p cnf 1 1 / 1 -1 1
        let formula = Formula::new(1, vec![1], vec![-1], vec![1]).unwrap();
        assert!(matches!(engine_run(&formula, 1), Outcome::Sat(_)));
    }

    #[test]
    fn polarity_flip_recovery() {
        // p cnf 3 3 / 1 2 3 / -1 2 3 / 1 -2 3, starting from -3: the search
        // must still land on a satisfying assignment, whatever value it
        // eventually settles variable 3 to.
        let formula = Formula::new(3, vec![1, -1, 1], vec![2, 2, -2], vec![3, 3, 3]).unwrap();
        assert!(matches!(engine_run(&formula, -3), Outcome::Sat(_)));
    }

    #[test]
    fn conflict_retries_the_opposite_literal_directly() {
        // p cnf 2 1 / -2 -2 -2, starting from 1: Step 1 pushes 2 next, which
        // conflicts (the only clause needs var2 false). Section 4.8 step 4
        // sets Xk <- Opposite(Xk) so the very next candidate tried must be
        // Opposite(2), not 2 again and not some other cyclic literal.
        let formula = Formula::new(2, vec![-2], vec![-2], vec![-2]).unwrap();
        let adj = Adjacency::build(&formula);
        let engine = Engine::new(&formula, &adj);
        let result = engine.run(Lit::from_index(1));

        assert!(matches!(result.outcome, Outcome::Sat(_)));
        assert_eq!(result.stats.history[0].head, Lit::from_index(2));
        assert_eq!(result.stats.history[1].head, Lit::from_index(2).opposite(2));
    }

    #[test]
    fn exhaustive_mode_every_start_literal_finds_sat() {
        // p cnf 3 1 / 1 2 3 0 -- trivially satisfiable by any starting literal.
        let formula = Formula::new(3, vec![1], vec![2], vec![3]).unwrap();
        let adj = Adjacency::build(&formula);
        let engine = Engine::new(&formula, &adj);
        let mut min_complexity = f64::INFINITY;
        let mut max_complexity = f64::NEG_INFINITY;
        for idx in 1..=6u32 {
            let result = engine.run(Lit::from_index(idx));
            assert!(matches!(result.outcome, Outcome::Sat(_)), "idx={idx}");
            let order = result.stats.complexity_order(formula.n());
            if order.is_finite() {
                min_complexity = min_complexity.min(order);
                max_complexity = max_complexity.max(order);
            }
        }
        assert!(min_complexity <= max_complexity);
    }
}
