//! State Fingerprint / MDB (C4): hash-based memoization of visited lambda
//! states.

use fnv::FnvHashMap;
use md5::{Digest, Md5};

use crate::assignment::Lambda;

/// The memoization table ("Memory Data Base"). Maps a fingerprint of the
/// *set* of literals currently assigned to the lambda size at first
/// insertion -- insertion order within lambda is irrelevant to the key.
#[derive(Debug, Default)]
pub struct Mdb {
    seen: FnvHashMap<[u8; 16], usize>,
}

impl Mdb {
    #[must_use]
    pub fn new() -> Self {
        Mdb { seen: FnvHashMap::default() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// `SaveState`: computes the fingerprint of the sorted literal sequence
    /// and inserts it if absent. Returns `true` on first insertion, `false`
    /// if the state set was already visited (a repeat, which the driver
    /// treats as a conflict for progress purposes).
    pub fn save_state(&mut self, lambda: &Lambda) -> bool {
        let digest = fingerprint(lambda);
        self.seen.insert(digest, lambda.len()).is_none()
    }
}

/// MD5 of the sorted, comma-joined literal indices -- same scheme as the
/// source solver (Design Note, Section 9): any collision-resistant hash
/// works as long as "same set -> same key" holds.
fn fingerprint(lambda: &Lambda) -> [u8; 16] {
    let mut lits: Vec<u32> = lambda.iter().map(crate::literal::Lit::index).collect();
    lits.sort_unstable();

    let mut joined = String::with_capacity(lits.len() * 4);
    for (i, lit) in lits.iter().enumerate() {
        if i > 0 {
            joined.push(',');
        }
        joined.push_str(&lit.to_string());
    }

    let mut hasher = Md5::new();
    hasher.update(joined.as_bytes());
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::Lit;

    #[test]
    fn same_set_different_order_collapses_to_one_entry() {
        let n = 4;
        let mut a = Lambda::new(n);
        a.push_back(Lit::encode(1, n));
        a.push_back(Lit::encode(2, n));

        let mut b = Lambda::new(n);
        b.push_back(Lit::encode(2, n));
        b.push_front(Lit::encode(1, n));

        let mut mdb = Mdb::new();
        assert!(mdb.save_state(&a));
        assert!(!mdb.save_state(&b));
        assert_eq!(mdb.len(), 1);
    }
}
