//! Unit propagation: `FindUnits` (C5), `GetUnits` (C6), `GetOppUnits` (C7)
//! and their fixpoint `GetAllUnits` (Section 4.7).

use std::collections::VecDeque;

use crate::adjacency::Adjacency;
use crate::assignment::Lambda;
use crate::literal::Lit;
use crate::stats::Stats;

/// The frontier of literals forced but not yet folded into lambda
/// (`new_units` in Section 4.5). A small FIFO with O(1) membership, mirroring
/// lambda's own presence-bitset trick.
struct Frontier {
    queue: VecDeque<Lit>,
    present: Vec<bool>,
}

impl Frontier {
    fn new(n: u32) -> Self {
        Frontier {
            queue: VecDeque::new(),
            present: vec![false; (2 * n + 1) as usize],
        }
    }

    fn contains(&self, lit: Lit) -> bool {
        self.present[lit.index() as usize]
    }

    fn push_back_if_new(&mut self, lit: Lit) {
        if !self.contains(lit) {
            self.present[lit.index() as usize] = true;
            self.queue.push_back(lit);
        }
    }

    fn pop_front(&mut self) -> Option<Lit> {
        let lit = self.queue.pop_front()?;
        self.present[lit.index() as usize] = false;
        Some(lit)
    }
}

/// `FindUnits` (C5): derives forced literals from anchor `l`, appending new
/// ones to `units`. Does not mutate lambda.
fn find_units(adj: &Adjacency, lambda: &Lambda, l: Lit, n: u32, units: &mut Frontier, stats: &mut Stats) {
    stats.find_units_calls += 1;
    let pairs = adj.opposite_pairs(l);
    stats.charge_adjacency_scan(pairs.len());

    for &(x, y) in pairs {
        if lambda.contains(x.opposite(n)) && !lambda.contains(y) && !units.contains(y) {
            units.push_back_if_new(y);
        }
        if lambda.contains(y.opposite(n)) && !lambda.contains(x) && !units.contains(x) {
            units.push_back_if_new(x);
        }
    }
}

/// `GetUnits` (C6): unit-propagates from anchor `l` to a local fixpoint,
/// mutating `lambda` in place. Returns `false` on conflict, restoring
/// `lambda` to its value at entry (property P4).
pub fn get_units(adj: &Adjacency, lambda: &mut Lambda, n: u32, l: Lit, stats: &mut Stats) -> bool {
    stats.get_units_calls += 1;
    if lambda.len() <= 1 {
        return true;
    }

    let saved = lambda.snapshot();
    let mut frontier = Frontier::new(n);
    find_units(adj, lambda, l, n, &mut frontier, stats);

    while let Some(u) = frontier.pop_front() {
        if lambda.contains(u.opposite(n)) || frontier.contains(u.opposite(n)) {
            lambda.restore(saved);
            return false;
        }
        lambda.push_front(u);
        find_units(adj, lambda, u, n, &mut frontier, stats);
    }

    true
}

/// `GetOppUnits` (C7): derives units along the opposite-literal neighborhood
/// of `l`. Does not itself restore lambda on failure; callers (`GetAllUnits`)
/// own rollback.
pub fn get_opp_units(adj: &Adjacency, lambda: &mut Lambda, n: u32, l: Lit, stats: &mut Stats) -> bool {
    stats.get_opp_units_calls += 1;
    let pairs = adj.opposite_pairs(l);
    stats.charge_adjacency_scan(pairs.len());

    for &(x, y) in pairs {
        if lambda.contains(x.opposite(n)) && lambda.contains(y.opposite(n)) {
            return false;
        }
        if lambda.contains(x) || lambda.contains(y) {
            continue;
        }
        if !(get_units(adj, lambda, n, x, stats) || get_units(adj, lambda, n, y, stats)) {
            return false;
        }
    }
    true
}

/// `GetAllUnits`: the fixpoint of `GetUnits` then `GetOppUnits` over a
/// snapshot of lambda's current literals (Section 4.7).
///
/// On success, every currently unit-propagable literal is in lambda and no
/// clause is yet violated (the fixpoint invariant). On failure, lambda is
/// restored to its value at entry (the *initial* snapshot, even if the
/// failure happened during the `GetOppUnits` pass).
pub fn get_all_units(adj: &Adjacency, lambda: &mut Lambda, n: u32, stats: &mut Stats) -> bool {
    let initial = lambda.snapshot();

    for lit in initial.iter().copied() {
        if !get_units(adj, lambda, n, lit, stats) {
            lambda.restore(initial);
            return false;
        }
    }

    let after_units = lambda.snapshot();
    for lit in after_units {
        if !get_opp_units(adj, lambda, n, lit, stats) {
            lambda.restore(initial);
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::Formula;

    #[test]
    fn forced_literal_added_without_conflict() {
        // p cnf 3 1 / 1 2 2  -- a single clause (1 v 2); guessing -2 forces 1.
        // Variable 3 is unconstrained filler, just to keep |lambda| > 1 so
        // GetUnits actually engages (Section 4.5).
        let formula = Formula::new(3, vec![1], vec![2], vec![2]).unwrap();
        let adj = Adjacency::build(&formula);
        let n = formula.n();
        let mut stats = Stats::new();

        let mut lambda = Lambda::new(n);
        lambda.push_back(Lit::encode(3, n));
        lambda.push_back(Lit::encode(-2, n));

        assert!(get_all_units(&adj, &mut lambda, n, &mut stats));
        assert!(lambda.contains(Lit::encode(1, n)));
    }

    #[test]
    fn forced_chain_conflict_is_caught_at_pop_time() {
        // p cnf 3 2 / 1 2 2 / -1 2 2 -- guessing -2 forces both 1 and -1.
        // Variable 3 is unconstrained filler, just to keep |lambda| > 1.
        let formula = Formula::new(3, vec![1, -1], vec![2, 2], vec![2, 2]).unwrap();
        let adj = Adjacency::build(&formula);
        let n = formula.n();
        let mut stats = Stats::new();

        let mut lambda = Lambda::new(n);
        lambda.push_back(Lit::encode(3, n));
        lambda.push_back(Lit::encode(-2, n));
        let before = lambda.snapshot();

        assert!(!get_all_units(&adj, &mut lambda, n, &mut stats));
        assert_eq!(lambda.snapshot(), before);
    }

    #[test]
    fn get_units_rolls_back_on_conflict() {
        // p cnf 2 2 / 1 1 1 / -1 -1 -1 : contradictory singleton clauses.
        let formula = Formula::new(1, vec![1, -1], vec![1, -1], vec![1, -1]).unwrap();
        let adj = Adjacency::build(&formula);
        let n = formula.n();
        let mut stats = Stats::new();

        let mut lambda = Lambda::new(n);
        lambda.push_back(Lit::encode(1, n));
        lambda.push_back(Lit::encode(1, n).opposite(n));
        let before = lambda.snapshot();

        let ok = get_all_units(&adj, &mut lambda, n, &mut stats);
        assert!(!ok);
        assert_eq!(lambda.snapshot(), before);
    }
}
