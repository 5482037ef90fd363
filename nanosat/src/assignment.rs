//! Partial assignment `lambda` (C3): an ordered sequence of encoded
//! literals with O(1) membership and conflict tests.

use std::collections::VecDeque;

use crate::literal::Lit;

/// The solver's current partial assignment.
///
/// New literals are prepended during propagation (`push_front`, mirroring
/// `GetUnits`'s insert-at-front behaviour) and appended by the search driver
/// (`push_back`, mirroring `lambda.Add`). Membership (`contains`) is O(1)
/// via a side bitset, satisfying invariants I1 (no duplicate literal) and I2
/// (no literal alongside its own opposite) are checked by callers using
/// `contains`.
#[derive(Debug, Clone)]
pub struct Lambda {
    order: VecDeque<Lit>,
    present: Vec<bool>,
}

impl Lambda {
    #[must_use]
    pub fn new(n: u32) -> Self {
        Lambda {
            order: VecDeque::new(),
            present: vec![false; (2 * n + 1) as usize],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[must_use]
    pub fn contains(&self, lit: Lit) -> bool {
        self.present[lit.index() as usize]
    }

    /// Appends `lit` (the driver's `lambda.Add`). Panics if `lit` is already present.
    pub fn push_back(&mut self, lit: Lit) {
        debug_assert!(!self.contains(lit), "literal already in lambda");
        self.present[lit.index() as usize] = true;
        self.order.push_back(lit);
    }

    /// Prepends `lit` (propagation's forced-literal insertion).
    pub fn push_front(&mut self, lit: Lit) {
        debug_assert!(!self.contains(lit), "literal already in lambda");
        self.present[lit.index() as usize] = true;
        self.order.push_front(lit);
    }

    /// Removes and returns the most recently appended literal.
    pub fn pop_back(&mut self) -> Option<Lit> {
        let lit = self.order.pop_back()?;
        self.present[lit.index() as usize] = false;
        Some(lit)
    }

    #[must_use]
    pub fn back(&self) -> Option<Lit> {
        self.order.back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Lit> + '_ {
        self.order.iter().copied()
    }

    /// Snapshots the current sequence for later `restore`.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Lit> {
        self.order.iter().copied().collect()
    }

    /// Restores a previously taken snapshot, discarding whatever mutations
    /// happened in between. Used by the propagators' rollback discipline
    /// (Section 5).
    pub fn restore(&mut self, snapshot: Vec<Lit>) {
        self.present.iter_mut().for_each(|p| *p = false);
        for &lit in &snapshot {
            self.present[lit.index() as usize] = true;
        }
        self.order = snapshot.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_restore_round_trips() {
        let n = 4;
        let mut lambda = Lambda::new(n);
        lambda.push_back(Lit::encode(1, n));
        lambda.push_back(Lit::encode(2, n));
        let snap = lambda.snapshot();
        lambda.push_front(Lit::encode(3, n));
        assert_eq!(lambda.len(), 3);
        lambda.restore(snap);
        assert_eq!(lambda.len(), 2);
        assert!(!lambda.contains(Lit::encode(3, n)));
    }

    #[test]
    fn push_and_pop_track_presence() {
        let n = 3;
        let mut lambda = Lambda::new(n);
        let l1 = Lit::encode(1, n);
        lambda.push_back(l1);
        assert!(lambda.contains(l1));
        assert_eq!(lambda.pop_back(), Some(l1));
        assert!(!lambda.contains(l1));
    }
}
