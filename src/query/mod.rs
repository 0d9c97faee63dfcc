//! Query parsing and evaluation.
//!
//! Two query languages share one entry point:
//!
//! - boolean expressions: `cat AND (run OR sleep) NOT "big dog"`
//! - proximity pairs: `cat run /2`
//!
//! [`execute`] dispatches on the `/` window marker: any query containing a
//! slash is treated as a proximity query, everything else goes through the
//! boolean pipeline (lex → shunting-yard → postfix set evaluation).
//!
//! Evaluation only ever reads the snapshot. A malformed query comes back as
//! a [`QueryError`] and the snapshot is untouched for the next query.

pub mod boolean;
pub mod lexer;
pub mod proximity;

use crate::error::QueryError;
use crate::types::{DocId, IndexSnapshot};

/// Evaluate a raw query string against an index snapshot.
///
/// Returns matching document ids sorted ascending. An empty boolean query
/// yields an empty result, not an error.
pub fn execute(query: &str, snapshot: &IndexSnapshot) -> Result<Vec<DocId>, QueryError> {
    if query.contains('/') {
        proximity::evaluate(query, snapshot)
    } else {
        let tokens = lexer::lex(query)?;
        boolean::evaluate(&tokens, snapshot)
    }
}
