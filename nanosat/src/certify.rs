//! Solution Certifier (C9): validates size, consistency and clause coverage
//! of a completed lambda against the original clause set before trusting it.

use crate::assignment::Lambda;
use crate::formula::Formula;
use crate::literal::Lit;

/// A certified satisfying assignment: one signed literal per variable,
/// ordered `1..=n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment(Vec<i64>);

impl Assignment {
    #[must_use]
    pub fn literals(&self) -> &[i64] {
        &self.0
    }

    /// The value assigned to variable `v` (`true`/`false`), 1-based.
    #[must_use]
    pub fn value(&self, v: u32) -> bool {
        self.0[(v - 1) as usize] > 0
    }
}

/// Runs the three certifier checks (Section 4.9). Returns `None` on any
/// failure -- internal invariant violations are trapped here and reported
/// as UNSAT rather than trusted (Section 7).
#[must_use]
pub fn certify(formula: &Formula, lambda: &Lambda, n: u32) -> Option<Assignment> {
    // Size.
    if lambda.len() as u32 != n {
        return None;
    }

    // Consistency: no literal alongside its own opposite.
    for lit in lambda.iter() {
        if lambda.contains(lit.opposite(n)) {
            return None;
        }
    }

    if !covers_every_clause(formula, lambda, n) {
        return None;
    }

    let mut by_var = vec![0i64; n as usize];
    for lit in lambda.iter() {
        let decoded = lit.decode(n);
        by_var[(decoded.unsigned_abs() - 1) as usize] = decoded;
    }
    Some(Assignment(by_var))
}

/// The coverage check alone, used by the search driver mid-run
/// (`CheckBinarySolution` in Section 4.8) before paying for the full
/// certifier pass.
#[must_use]
pub fn covers_every_clause(formula: &Formula, lambda: &Lambda, n: u32) -> bool {
    let decoded: Vec<i64> = lambda.iter().map(|l: Lit| l.decode(n)).collect();
    formula
        .clauses()
        .all(|(a, b, c)| decoded.contains(&a) || decoded.contains(&b) || decoded.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn certifies_a_trivially_satisfying_assignment() {
        let formula = Formula::new(3, vec![1], vec![2], vec![3]).unwrap();
        let n = formula.n();
        let mut lambda = Lambda::new(n);
        lambda.push_back(Lit::encode(1, n));
        lambda.push_back(Lit::encode(2, n));
        lambda.push_back(Lit::encode(3, n));

        let assignment = certify(&formula, &lambda, n).expect("should certify");
        assert_eq!(assignment.literals(), &[1, 2, 3]);
    }

    #[test]
    fn rejects_an_assignment_missing_clause_coverage() {
        let formula = Formula::new(3, vec![1], vec![2], vec![3]).unwrap();
        let n = formula.n();
        let mut lambda = Lambda::new(n);
        lambda.push_back(Lit::encode(-1, n));
        lambda.push_back(Lit::encode(-2, n));
        lambda.push_back(Lit::encode(-3, n));

        assert!(certify(&formula, &lambda, n).is_none());
    }
}
