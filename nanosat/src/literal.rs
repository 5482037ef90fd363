//! Literal encoding (C1): the bijection between signed DIMACS-style literals
//! and the dense positive index space `1..=2n` the rest of the solver works in.

use std::fmt;

/// A literal in the dense `1..=2n` encoding.
///
/// Values `1..=n` denote the positive polarity of the corresponding variable;
/// values `n+1..=2n` denote the negative polarity of variable `k - n`. The
/// encoding is only meaningful relative to a particular `n`, which callers
/// must supply consistently -- `Lit` itself carries no bounds information.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Lit(u32);

impl Lit {
    /// Wraps an already-encoded index (must be in `1..=2n` for whatever `n`
    /// the caller is working with).
    #[must_use]
    pub fn from_index(idx: u32) -> Self {
        debug_assert!(idx > 0, "literal index is 1-based");
        Lit(idx)
    }

    /// The raw `1..=2n` index.
    #[must_use]
    pub fn index(self) -> u32 {
        self.0
    }

    /// Encodes a signed literal (as read from DIMACS input) for a formula
    /// over `n` variables. Positive `k` maps to `k`; negative `-k` maps to
    /// `k + n`.
    #[must_use]
    pub fn encode(signed: i64, n: u32) -> Self {
        debug_assert_ne!(signed, 0, "literal 0 is not a valid DIMACS literal");
        let var = signed.unsigned_abs() as u32;
        debug_assert!(var <= n, "variable {var} out of range for n={n}");
        if signed > 0 {
            Lit(var)
        } else {
            Lit(var + n)
        }
    }

    /// Decodes back to the signed form used by the clause arrays and the
    /// certifier.
    #[must_use]
    pub fn decode(self, n: u32) -> i64 {
        if self.0 <= n {
            i64::from(self.0)
        } else {
            -i64::from(self.0 - n)
        }
    }

    /// `Opposite(l)`: flips polarity, wrapping `k <-> k + n` at `2n`.
    ///
    /// `Opposite(Opposite(l)) == l` and `Opposite(l) != l` for every `l`
    /// (property P1 of the testable-properties list).
    #[must_use]
    pub fn opposite(self, n: u32) -> Self {
        let two_n = 2 * n;
        Lit(((self.0 - 1 + n) % two_n) + 1)
    }
}

impl fmt::Debug for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lit({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        let n = 5;
        for idx in 1..=2 * n {
            let l = Lit::from_index(idx);
            assert_eq!(l.opposite(n).opposite(n), l);
            assert_ne!(l.opposite(n), l);
        }
    }

    #[test]
    fn encode_decode_round_trips() {
        let n = 4;
        for signed in (1..=n as i64).chain((1..=n as i64).map(|v| -v)) {
            assert_eq!(Lit::encode(signed, n).decode(n), signed);
        }
    }

    #[test]
    fn opposite_maps_across_the_n_boundary() {
        let n = 3;
        assert_eq!(Lit::encode(1, n).opposite(n), Lit::encode(-1, n));
        assert_eq!(Lit::encode(-3, n).opposite(n), Lit::encode(3, n));
    }
}
