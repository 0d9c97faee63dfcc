// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boolean expression evaluation over the inverted index.
//!
//! Two phases. The shunting-yard pass rewrites the lexed infix stream into
//! postfix with precedence `NOT > AND > OR`; the evaluator then folds the
//! postfix sequence over a stack of document-id sets, so precedence never
//! has to be consulted again.
//!
//! `AND` and `OR` are left-associative. `NOT` is right-associative, which
//! is what makes `NOT NOT a` mean `NOT (NOT a)` and collapse back to `a`.
//!
//! Terms are stemmed with the same rule the builder used and resolved
//! against the inverted index; an unknown stem is the empty set, never an
//! error. `NOT x` is `universe − x`.

use std::collections::BTreeSet;

use crate::analyze::stem;
use crate::error::QueryError;
use crate::query::lexer::QueryToken;
use crate::types::{DocId, IndexSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Not,
    And,
    Or,
}

impl Op {
    fn precedence(self) -> u8 {
        match self {
            Op::Not => 3,
            Op::And => 2,
            Op::Or => 1,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Op::Not => "NOT",
            Op::And => "AND",
            Op::Or => "OR",
        }
    }

    /// Unary NOT binds rightward; the binary operators associate left.
    fn right_associative(self) -> bool {
        matches!(self, Op::Not)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Postfix {
    Term(String),
    Op(Op),
}

/// Elements living on the shunting-yard operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Op(Op),
    OpenParen,
}

/// Rewrite an infix token stream into postfix order.
fn to_postfix(tokens: &[QueryToken]) -> Result<Vec<Postfix>, QueryError> {
    let mut output = Vec::new();
    let mut pending: Vec<Pending> = Vec::new();

    for token in tokens {
        match token {
            QueryToken::Word(term) | QueryToken::Phrase(term) => {
                output.push(Postfix::Term(term.clone()));
            }
            QueryToken::And | QueryToken::Or | QueryToken::Not => {
                let op = match token {
                    QueryToken::And => Op::And,
                    QueryToken::Or => Op::Or,
                    _ => Op::Not,
                };
                while let Some(Pending::Op(top)) = pending.last() {
                    let outranks = if op.right_associative() {
                        top.precedence() > op.precedence()
                    } else {
                        top.precedence() >= op.precedence()
                    };
                    if !outranks {
                        break;
                    }
                    output.push(Postfix::Op(*top));
                    pending.pop();
                }
                pending.push(Pending::Op(op));
            }
            QueryToken::OpenParen => pending.push(Pending::OpenParen),
            QueryToken::CloseParen => loop {
                match pending.pop() {
                    Some(Pending::Op(op)) => output.push(Postfix::Op(op)),
                    Some(Pending::OpenParen) => break,
                    None => return Err(QueryError::UnbalancedParens),
                }
            },
        }
    }

    while let Some(item) = pending.pop() {
        match item {
            Pending::Op(op) => output.push(Postfix::Op(op)),
            Pending::OpenParen => return Err(QueryError::UnbalancedParens),
        }
    }

    Ok(output)
}

/// Evaluate a lexed boolean query against the snapshot.
///
/// Returns matching document ids sorted ascending. An empty token stream is
/// an empty result, and the final value on the evaluation stack wins when
/// the expression leaves extra operands behind. The snapshot is never
/// mutated; cloned sets flow through the stack.
pub fn evaluate(
    tokens: &[QueryToken],
    snapshot: &IndexSnapshot,
) -> Result<Vec<DocId>, QueryError> {
    let postfix = to_postfix(tokens)?;
    let mut stack: Vec<BTreeSet<DocId>> = Vec::new();

    for item in postfix {
        match item {
            Postfix::Term(term) => {
                stack.push(snapshot.docs_for(&stem(&term)));
            }
            Postfix::Op(Op::Not) => {
                let operand = stack
                    .pop()
                    .ok_or(QueryError::MissingOperand { operator: "NOT" })?;
                stack.push(snapshot.universe.difference(&operand).copied().collect());
            }
            Postfix::Op(op) => {
                let right = stack.pop().ok_or(QueryError::MissingOperand {
                    operator: op.name(),
                })?;
                let left = stack.pop().ok_or(QueryError::MissingOperand {
                    operator: op.name(),
                })?;
                let combined = match op {
                    Op::And => left.intersection(&right).copied().collect(),
                    Op::Or => left.union(&right).copied().collect(),
                    Op::Not => unreachable!("handled above"),
                };
                stack.push(combined);
            }
        }
    }

    // The result is the last value pushed; operands left underneath it are
    // discarded. `cat NOT sleep` evaluates the postfix `cat sleep NOT` to
    // universe − sleep with the dangling `cat` operand dropped.
    Ok(stack
        .pop()
        .map(|set| set.into_iter().collect())
        .unwrap_or_default())
}
