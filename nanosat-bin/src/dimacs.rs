//! DIMACS CNF input reader (Section 6): whitespace-tolerant, transparently
//! handles gzip-compressed input the way `batsat-bin` reads compressed
//! competition benchmarks.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::AppError;

/// `(n, m, a, b, c)`: variable count, clause count, and the three parallel
/// signed-literal clause arrays (Section 3, "Formula triple").
type ClauseArrays = (u32, usize, Vec<i64>, Vec<i64>, Vec<i64>);

/// Opens `path`, transparently decompressing it if it looks gzip-compressed
/// (magic bytes `1f 8b`), and returns every non-comment, non-header token
/// line's whitespace-separated fields.
pub fn read_clauses(path: &Path) -> Result<ClauseArrays, AppError> {
    let display = path.display().to_string();
    let file = File::open(path).map_err(|source| AppError::Io { path: display.clone(), source })?;
    let mut raw = BufReader::new(file);
    let gzip = raw.fill_buf().map(|b| b.len() >= 2 && b[..2] == [0x1f, 0x8b]).unwrap_or(false);

    let reader: Box<dyn BufRead> = if gzip {
        Box::new(BufReader::new(GzDecoder::new(raw)))
    } else {
        Box::new(raw)
    };

    parse(reader, &display)
}

fn parse(reader: Box<dyn BufRead>, display: &str) -> Result<ClauseArrays, AppError> {
    let malformed = |reason: &str| AppError::MalformedInput { path: display.to_string(), reason: reason.to_string() };

    let mut n: Option<u32> = None;
    let mut m: Option<usize> = None;
    let mut a = Vec::new();
    let mut b = Vec::new();
    let mut c = Vec::new();
    let mut current: Vec<i64> = Vec::with_capacity(3);

    for line in reader.lines() {
        let line = line.map_err(|source| AppError::Io { path: display.to_string(), source })?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('c') {
            continue;
        }
        if line.starts_with("p ") || line.starts_with("p\t") {
            let mut fields = line.split_whitespace();
            fields.next(); // "p"
            let cnf = fields.next().ok_or_else(|| malformed("missing 'cnf' token in header"))?;
            if cnf != "cnf" {
                return Err(malformed("expected 'p cnf n m' header"));
            }
            let nn: u32 = fields
                .next()
                .ok_or_else(|| malformed("missing variable count in header"))?
                .parse()
                .map_err(|_| malformed("variable count is not an integer"))?;
            let mm: usize = fields
                .next()
                .ok_or_else(|| malformed("missing clause count in header"))?
                .parse()
                .map_err(|_| malformed("clause count is not an integer"))?;
            n = Some(nn);
            m = Some(mm);
            continue;
        }

        let Some(m) = m else {
            return Err(malformed("clause data appeared before 'p cnf' header"));
        };
        for token in line.split_whitespace() {
            let lit: i64 = token.parse().map_err(|_| malformed(&format!("'{token}' is not an integer literal")))?;
            if lit == 0 {
                finish_clause(&mut current, &mut a, &mut b, &mut c);
            } else {
                current.push(lit);
                if current.len() == 3 {
                    finish_clause(&mut current, &mut a, &mut b, &mut c);
                }
            }
            if a.len() >= m {
                break;
            }
        }
        if a.len() >= m {
            break;
        }
    }

    if !current.is_empty() {
        finish_clause(&mut current, &mut a, &mut b, &mut c);
    }

    let n = n.ok_or_else(|| malformed("no 'p cnf n m' header found"))?;
    let m = m.ok_or_else(|| malformed("no 'p cnf n m' header found"))?;
    if a.len() != m {
        return Err(malformed(&format!("header declares {m} clauses but {} were read", a.len())));
    }

    Ok((n, m, a, b, c))
}

/// Clauses with fewer than three literals are padded by duplicating the
/// last literal read (Section 6 / Design Note, Section 9): this keeps every
/// clause effectively 3-ary for the core's iteration even though it may be
/// semantically 1- or 2-ary.
fn finish_clause(current: &mut Vec<i64>, a: &mut Vec<i64>, b: &mut Vec<i64>, c: &mut Vec<i64>) {
    if current.is_empty() {
        return;
    }
    while current.len() < 3 {
        let last = *current.last().unwrap();
        current.push(last);
    }
    a.push(current[0]);
    b.push(current[1]);
    c.push(current[2]);
    current.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse_str(s: &str) -> ClauseArrays {
        parse(Box::new(BufReader::new(Cursor::new(s.as_bytes().to_vec()))), "test").unwrap()
    }

    #[test]
    fn parses_a_well_formed_formula() {
        let (n, m, a, b, c) = parse_str("c comment\np cnf 3 2\n1 2 3 0\n-1 -2 3 0\n");
        assert_eq!((n, m), (3, 2));
        assert_eq!(a, vec![1, -1]);
        assert_eq!(b, vec![2, -2]);
        assert_eq!(c, vec![3, 3]);
    }

    #[test]
    fn pads_short_clauses_by_duplicating_the_last_literal() {
        let (_, _, a, b, c) = parse_str("p cnf 2 1\n1 2 0\n");
        assert_eq!((a[0], b[0], c[0]), (1, 2, 2));
    }

    #[test]
    fn tolerates_a_missing_trailing_terminator() {
        let (_, m, a, _, _) = parse_str("p cnf 3 1\n1 2 3");
        assert_eq!(m, 1);
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn rejects_missing_header() {
        let err = parse(Box::new(BufReader::new(Cursor::new(b"1 2 3 0".to_vec()))), "test").unwrap_err();
        assert!(matches!(err, AppError::MalformedInput { .. }));
    }
}
