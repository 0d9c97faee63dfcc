// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the retrieval engine.
//!
//! Three layers, three enums:
//!
//! - [`EngineError`]: fatal setup/build failures (missing stopword list,
//!   unparsable document name, unreadable corpus directory).
//! - [`StoreError`]: persistence outcomes. `NotFound` is not really an
//!   error; it tells the caller to build. `Corrupt` is fatal and must not
//!   be papered over by a silent rebuild.
//! - [`QueryError`]: malformed query strings, recovered at the query
//!   boundary. One bad query never affects the snapshot or later queries.
//!
//! Unknown terms are absent from this file on purpose: a term the index has
//! never seen resolves to the empty set, not to an error.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Fatal errors raised during startup or index construction.
#[derive(Debug)]
pub enum EngineError {
    /// The stopword list could not be read. Nothing works without it.
    StopwordList { path: PathBuf, source: io::Error },
    /// The corpus directory could not be enumerated.
    CorpusDir { path: PathBuf, source: io::Error },
    /// A corpus filename does not start with an integer document id.
    /// This is a configuration error, not a bad document; the build aborts.
    DocumentName { file: PathBuf },
    /// The index store failed underneath a build or load.
    Store(StoreError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::StopwordList { path, source } => {
                write!(f, "cannot read stopword list {}: {}", path.display(), source)
            }
            EngineError::CorpusDir { path, source } => {
                write!(f, "cannot read corpus directory {}: {}", path.display(), source)
            }
            EngineError::DocumentName { file } => {
                write!(
                    f,
                    "document name {} does not begin with an integer id",
                    file.display()
                )
            }
            EngineError::Store(e) => write!(f, "index store: {}", e),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::StopwordList { source, .. } => Some(source),
            EngineError::CorpusDir { source, .. } => Some(source),
            EngineError::DocumentName { .. } => None,
            EngineError::Store(e) => Some(e),
        }
    }
}

impl From<StoreError> for EngineError {
    fn from(e: StoreError) -> Self {
        EngineError::Store(e)
    }
}

/// Outcomes of loading or saving persisted index artifacts.
#[derive(Debug)]
pub enum StoreError {
    /// No artifacts exist. Signals "build required", not a failure.
    NotFound,
    /// Artifacts exist but cannot be trusted: one is missing, unreadable,
    /// or unparsable. Rebuilding over this would mask data loss, so it is
    /// surfaced instead.
    Corrupt { artifact: String, detail: String },
    /// Filesystem error while writing artifacts.
    Io(io::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound => write!(f, "no saved index found"),
            StoreError::Corrupt { artifact, detail } => {
                write!(f, "saved index artifact {} is corrupt: {}", artifact, detail)
            }
            StoreError::Io(e) => write!(f, "index i/o: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        StoreError::Io(e)
    }
}

/// Malformed query strings.
///
/// Every variant is recoverable: the caller reports it and the engine keeps
/// serving queries against the untouched snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Closing parenthesis without a matching open, or vice versa.
    UnbalancedParens,
    /// A quoted phrase with no closing quote.
    UnterminatedPhrase,
    /// An operator popped more operands than the expression supplied,
    /// e.g. a leading `AND`.
    MissingOperand { operator: &'static str },
    /// Proximity query without a `/k` window marker after the terms.
    MissingWindow,
    /// Proximity window is not a non-negative integer.
    BadWindow { given: String },
    /// Proximity query needs two terms before the window.
    MissingTerms { found: usize },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::UnbalancedParens => write!(f, "unbalanced parentheses"),
            QueryError::UnterminatedPhrase => write!(f, "unterminated quoted phrase"),
            QueryError::MissingOperand { operator } => {
                write!(f, "operator {} is missing an operand", operator)
            }
            QueryError::MissingWindow => {
                write!(f, "proximity query requires a /k window, e.g. `cat run /2`")
            }
            QueryError::BadWindow { given } => {
                write!(f, "proximity window {:?} is not a non-negative integer", given)
            }
            QueryError::MissingTerms { found } => {
                write!(f, "proximity query requires two terms, found {}", found)
            }
        }
    }
}

impl std::error::Error for QueryError {}
