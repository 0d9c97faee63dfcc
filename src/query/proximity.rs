//! Proximity query evaluation over the positional index.
//!
//! A proximity query has the shape `term1 term2 /k`: find documents where
//! some occurrence of the first term sits within `k` token positions of
//! some occurrence of the second. One satisfying pair is enough; the scan
//! for a document stops at the first hit.
//!
//! With `k = 0` only identical positions qualify, which can only happen
//! when both terms stem to the same key. Growing `k` never shrinks the
//! result set.

use crate::analyze::stem;
use crate::error::QueryError;
use crate::types::{DocId, IndexSnapshot};

/// A parsed proximity query.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ProximityQuery {
    term1: String,
    term2: String,
    window: u32,
}

/// Split `term1 term2 /k` into its parts.
///
/// The first `/` separates terms from the window; the window must parse as
/// a non-negative integer (a second `/` makes it unparsable and is
/// rejected, not ignored). Extra terms beyond the first two are ignored,
/// fewer than two is a format error.
fn parse(query: &str) -> Result<ProximityQuery, QueryError> {
    let lowered = query.to_lowercase();
    let (terms_part, window_part) = lowered.split_once('/').ok_or(QueryError::MissingWindow)?;

    let terms: Vec<&str> = terms_part.split_whitespace().collect();
    if terms.len() < 2 {
        return Err(QueryError::MissingTerms { found: terms.len() });
    }

    let window_text = window_part.trim();
    let window = window_text
        .parse::<u32>()
        .map_err(|_| QueryError::BadWindow {
            given: window_text.to_string(),
        })?;

    Ok(ProximityQuery {
        term1: stem(terms[0]),
        term2: stem(terms[1]),
        window,
    })
}

/// Evaluate a proximity query against the snapshot.
///
/// Candidate documents are the intersection of the two stems' positional
/// entries; unknown stems simply produce no candidates. Results come back
/// sorted ascending.
pub fn evaluate(query: &str, snapshot: &IndexSnapshot) -> Result<Vec<DocId>, QueryError> {
    let parsed = parse(query)?;

    let (first, second) = match (
        snapshot.positional.get(&parsed.term1),
        snapshot.positional.get(&parsed.term2),
    ) {
        (Some(first), Some(second)) => (first, second),
        _ => return Ok(Vec::new()),
    };

    let mut results = Vec::new();
    // BTreeMap keys iterate ascending, so results need no final sort.
    for (doc, positions1) in first {
        let Some(positions2) = second.get(doc) else {
            continue;
        };
        let close = positions1
            .iter()
            .any(|p1| positions2.iter().any(|p2| p1.abs_diff(*p2) <= parsed.window));
        if close {
            results.push(*doc);
        }
    }

    Ok(results)
}
