// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query session tied to one index snapshot.
//!
//! [`SearchEngine::open`] resolves the snapshot with a load-or-build rule:
//! a saved index is loaded if present; if none exists the corpus is scanned
//! and the result persisted for next time. A *corrupt* saved index is a
//! hard stop, not a rebuild trigger; rebuilding over damaged artifacts
//! would hide whatever went wrong with them.
//!
//! Once open, the snapshot is read-only. Queries run one at a time through
//! [`SearchEngine::search`]; successful ones are recorded in an in-memory
//! history for the front end to display, and a malformed query changes
//! nothing.

use std::path::Path;

use crate::analyze::Stopwords;
use crate::build::{build_indexes, BuildWarning};
use crate::error::{EngineError, QueryError, StoreError};
use crate::query;
use crate::store;
use crate::types::{DocId, IndexSnapshot};

/// One successfully evaluated query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub query: String,
    pub results: Vec<DocId>,
}

/// An immutable snapshot plus the session state around it.
#[derive(Debug)]
pub struct SearchEngine {
    snapshot: IndexSnapshot,
    stopwords: Stopwords,
    history: Vec<HistoryEntry>,
    build_warnings: Vec<BuildWarning>,
}

impl SearchEngine {
    /// Load a saved index from `index_dir`, or build one from `corpus` and
    /// save it if none exists yet.
    pub fn open(
        corpus: &Path,
        index_dir: &Path,
        stopwords: Stopwords,
    ) -> Result<Self, EngineError> {
        let (snapshot, build_warnings) = match store::load(index_dir) {
            Ok(snapshot) => (snapshot, Vec::new()),
            Err(StoreError::NotFound) => {
                let report = build_indexes(corpus, &stopwords)?;
                store::save(&report.snapshot, index_dir)?;
                (report.snapshot, report.warnings)
            }
            Err(e) => return Err(e.into()),
        };

        Ok(SearchEngine {
            snapshot,
            stopwords,
            history: Vec::new(),
            build_warnings,
        })
    }

    /// Build an engine around an existing snapshot, bypassing the store.
    pub fn from_snapshot(snapshot: IndexSnapshot, stopwords: Stopwords) -> Self {
        SearchEngine {
            snapshot,
            stopwords,
            history: Vec::new(),
            build_warnings: Vec::new(),
        }
    }

    /// Evaluate one query and record it on success.
    pub fn search(&mut self, raw: &str) -> Result<Vec<DocId>, QueryError> {
        let results = query::execute(raw, &self.snapshot)?;
        self.history.push(HistoryEntry {
            query: raw.to_string(),
            results: results.clone(),
        });
        Ok(results)
    }

    pub fn snapshot(&self) -> &IndexSnapshot {
        &self.snapshot
    }

    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    /// Queries answered so far in this session, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Warnings from the build that produced this snapshot; empty when the
    /// snapshot was loaded from disk.
    pub fn build_warnings(&self) -> &[BuildWarning] {
        &self.build_warnings
    }
}
