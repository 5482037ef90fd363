//! Adjacency Index (C2): per-literal companion-pair lists, and the mirror
//! index keyed by each literal's opposite.

use smallvec::SmallVec;

use crate::formula::Formula;
use crate::literal::Lit;

/// Most literals occur in a handful of clauses; inline the first few pairs
/// so short lists never touch the allocator.
type PairList = SmallVec<[(Lit, Lit); 4]>;

/// `adj` and `adj_opp`, built once per formula and treated as immutable for
/// the remainder of the search (Section 5).
#[derive(Debug, Clone)]
pub struct Adjacency {
    n: u32,
    /// `adj[l]`: for every clause containing `l`, the other two literals.
    adj: Vec<PairList>,
    /// `adj_opp[l] = rewrite(adj[Opposite(l)])`, after pair-swap normalization.
    adj_opp: Vec<PairList>,
}

impl Adjacency {
    /// `BuildAdjacency` (Section 4.2).
    #[must_use]
    pub fn build(formula: &Formula) -> Self {
        let n = formula.n();
        let len = (2 * n + 1) as usize;
        let mut adj: Vec<PairList> = vec![SmallVec::new(); len];

        for (a, b, c) in formula.clauses() {
            let la = Lit::encode(a, n);
            let lb = Lit::encode(b, n);
            let lc = Lit::encode(c, n);
            adj[la.index() as usize].push((lb, lc));
            adj[lb.index() as usize].push((la, lc));
            adj[lc.index() as usize].push((la, lb));
        }

        let mut adj_opp: Vec<PairList> = std::iter::once(SmallVec::new())
            .chain((1..len).map(|idx| adj[Lit::from_index(idx as u32).opposite(n).index() as usize].clone()))
            .collect();

        for pairs in &mut adj_opp {
            normalize_pairs(pairs, n);
        }

        Adjacency { n, adj, adj_opp }
    }

    /// `adj[l]`, as a flat run of companion pairs.
    #[must_use]
    pub fn positive(&self, l: Lit) -> &[(Lit, Lit)] {
        &self.adj[l.index() as usize]
    }

    /// `adj_opp[l]`, normalized per the pair-swap heuristic.
    #[must_use]
    pub fn opposite_pairs(&self, l: Lit) -> &[(Lit, Lit)] {
        &self.adj_opp[l.index() as usize]
    }

    #[must_use]
    pub fn n(&self) -> u32 {
        self.n
    }
}

/// Pair-swap normalization (Section 4.2 step 3 / Section 3's `adj_opp`
/// description): within each pair `(x, y)` of `adj_opp[l]`, bias the more
/// constrained literal into the second slot.
///
/// This is a heuristic over scan order only; it does not change which
/// assignments are found, only the order `FindUnits` inspects pairs in (and
/// therefore the exact value of the complexity counter -- see Design Note
/// in Section 9).
fn normalize_pairs(pairs: &mut PairList, n: u32) {
    let lefts: SmallVec<[Lit; 8]> = pairs.iter().map(|&(x, _)| x).collect();
    let rights: SmallVec<[Lit; 8]> = pairs.iter().map(|&(_, y)| y).collect();

    for pair in pairs.iter_mut() {
        let (mut x, mut y) = *pair;
        if lefts.contains(&x.opposite(n)) {
            std::mem::swap(&mut x, &mut y);
        }
        if rights.contains(&y.opposite(n)) {
            std::mem::swap(&mut x, &mut y);
        }
        *pair = (x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_pairs_are_even_in_count_and_mirrored() {
        // p cnf 3 2 / 1 2 3 / -1 -2 3
        let formula = Formula::new(3, vec![1, -1], vec![2, -2], vec![3, 3]).unwrap();
        let adj = Adjacency::build(&formula);
        let n = formula.n();

        let l1 = Lit::encode(1, n);
        assert_eq!(adj.positive(l1).len(), 1);
        assert_eq!(adj.positive(l1)[0], (Lit::encode(2, n), Lit::encode(3, n)));

        // adj_opp[Opposite(1)] mirrors adj[1] (post pair-swap, set-equal).
        let opp = l1.opposite(n);
        let mirrored = adj.opposite_pairs(opp);
        assert_eq!(mirrored.len(), adj.positive(l1).len());
    }
}
