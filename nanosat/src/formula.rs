//! The formula triple (Data Model, Section 3): three parallel arrays of
//! signed literals, one triple per clause.

use crate::error::FormulaError;

/// A 3-CNF formula over `n` variables: three parallel signed-literal arrays,
/// one entry per clause.
///
/// Clauses never carry a literal `0`. Clauses with fewer than three distinct
/// literals are the parser's concern (Section 6 / Design Note): by the time
/// a `Formula` is built, every clause already has exactly three signed
/// literal slots, possibly with a duplicate filled in by the caller.
#[derive(Debug, Clone)]
pub struct Formula {
    n: u32,
    a: Vec<i64>,
    b: Vec<i64>,
    c: Vec<i64>,
}

impl Formula {
    /// Builds a formula from three parallel clause arrays. Validates that
    /// every literal is nonzero and within `-n..=-1` or `1..=n`.
    pub fn new(n: u32, a: Vec<i64>, b: Vec<i64>, c: Vec<i64>) -> Result<Self, FormulaError> {
        if n == 0 {
            return Err(FormulaError::NoVariables);
        }
        if a.len() != b.len() || b.len() != c.len() {
            return Err(FormulaError::RaggedClauseArrays {
                a: a.len(),
                b: b.len(),
                c: c.len(),
            });
        }
        for (idx, &lit) in a.iter().chain(&b).chain(&c).enumerate() {
            let clause = idx % a.len().max(1);
            if lit == 0 {
                return Err(FormulaError::ZeroLiteral { clause });
            }
            if lit.unsigned_abs() > u64::from(n) {
                return Err(FormulaError::LiteralOutOfRange { clause, literal: lit, n });
            }
        }
        Ok(Formula { n, a, b, c })
    }

    /// Number of variables.
    #[must_use]
    pub fn n(&self) -> u32 {
        self.n
    }

    /// Number of clauses.
    #[must_use]
    pub fn m(&self) -> usize {
        self.a.len()
    }

    /// The signed literal triple for clause `k` (0-based).
    #[must_use]
    pub fn clause(&self, k: usize) -> (i64, i64, i64) {
        (self.a[k], self.b[k], self.c[k])
    }

    /// Iterates over all clauses as signed literal triples.
    pub fn clauses(&self) -> impl Iterator<Item = (i64, i64, i64)> + '_ {
        (0..self.m()).map(move |k| self.clause(k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_variable_count() {
        assert!(matches!(
            Formula::new(0, vec![], vec![], vec![]),
            Err(FormulaError::NoVariables)
        ));
    }

    #[test]
    fn rejects_out_of_range_literal() {
        let err = Formula::new(2, vec![3], vec![1], vec![2]).unwrap_err();
        assert!(matches!(err, FormulaError::LiteralOutOfRange { .. }));
    }

    #[test]
    fn accepts_a_well_formed_formula() {
        let f = Formula::new(3, vec![1], vec![2], vec![3]).unwrap();
        assert_eq!(f.m(), 1);
        assert_eq!(f.clause(0), (1, 2, 3));
    }
}
