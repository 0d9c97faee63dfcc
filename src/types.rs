// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a retrieval index.
//!
//! Three structures come out of a corpus scan and everything downstream
//! reads them without ever writing:
//!
//! - [`InvertedIndex`]: stem → set of documents containing it
//! - [`PositionalIndex`]: stem → document → ordered token positions
//! - the document universe, the complement base for `NOT`
//!
//! [`IndexSnapshot`] bundles the three. A snapshot is built once per scan
//! (see `build`), optionally persisted (see `store`), and handed to the
//! query evaluators as an immutable view. Rebuilding replaces the snapshot
//! wholesale; nothing mutates one in place.
//!
//! # Invariants
//!
//! - **KEYS_STEMMED**: every key in both indexes went through `analyze::stem`.
//!   Query terms are stemmed with the same rule, or lookups silently miss.
//! - **POSITIONS_ORDERED**: position lists are non-decreasing. They are
//!   appended while scanning a document left to right, so this holds by
//!   construction.
//! - **POSTINGS_IN_UNIVERSE**: every doc id in either index is in `universe`.
//!   The reverse does not hold: a document of nothing but stopwords occupies
//!   the universe without a single posting.
//!
//! All containers are ordered (`BTreeMap`/`BTreeSet`), so serialized
//! artifacts and boundary sequences come out sorted without an extra pass.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Type-safe document identifier.
///
/// Parsed from the numeric prefix of a corpus filename (`42.txt` → `DocId(42)`).
/// Prevents accidentally passing a token position where a document id is
/// expected; both are small unsigned integers and the type system is the only
/// thing keeping them apart.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[repr(transparent)]
pub struct DocId(pub u32);

impl DocId {
    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for DocId {
    fn from(id: u32) -> Self {
        DocId(id)
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stem → set of documents containing that stem at least once.
pub type InvertedIndex = BTreeMap<String, BTreeSet<DocId>>;

/// Stem → document → zero-based token positions, in document order.
///
/// Positions count tokens *after* stopword removal; a stopword does not
/// occupy a slot.
pub type PositionalIndex = BTreeMap<String, BTreeMap<DocId, Vec<u32>>>;

/// The complete output of one corpus scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSnapshot {
    pub inverted: InvertedIndex,
    pub positional: PositionalIndex,
    /// Every document id seen during the scan, whether or not it produced
    /// any tokens.
    pub universe: BTreeSet<DocId>,
}

impl IndexSnapshot {
    /// Number of distinct stems in the inverted index.
    pub fn term_count(&self) -> usize {
        self.inverted.len()
    }

    /// Number of documents in the universe.
    pub fn doc_count(&self) -> usize {
        self.universe.len()
    }

    /// Total postings across all inverted entries.
    pub fn posting_count(&self) -> usize {
        self.inverted.values().map(|docs| docs.len()).sum()
    }

    /// Resolve a stem to its document set, empty if unknown.
    ///
    /// Unknown stems are never an error; they match nothing.
    pub fn docs_for(&self, stem: &str) -> BTreeSet<DocId> {
        self.inverted.get(stem).cloned().unwrap_or_default()
    }
}
