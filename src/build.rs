// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction from a corpus directory.
//!
//! A corpus is a directory of `.txt` files whose names begin with an integer
//! document id (`12.txt`, `12.notes.txt` → id 12). Anything without the
//! `.txt` extension is ignored. A name whose prefix does not parse as an
//! integer aborts the build: ids come from naming alone, so a bad name means
//! a misconfigured corpus, not a bad document.
//!
//! Per-document analysis (decode, tokenize, stem) is independent across
//! documents and runs on the rayon pool when the `parallel` feature is on.
//! The merge into the shared maps stays sequential; documents are processed
//! in filename order so the merge is deterministic either way.
//!
//! Unreadable files are skipped with a warning collected in the
//! [`BuildReport`]; their ids still count toward the universe, matching the
//! rule that every document seen occupies the universe whether or not it
//! produced tokens.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::analyze::{stem, tokenize, Stopwords};
use crate::error::EngineError;
use crate::types::{DocId, IndexSnapshot};

/// Extension of files that participate in the scan.
const TEXT_EXTENSION: &str = "txt";

/// A non-fatal problem encountered during a build.
#[derive(Debug, Clone)]
pub struct BuildWarning {
    pub file: PathBuf,
    pub reason: String,
}

impl fmt::Display for BuildWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skipped {}: {}", self.file.display(), self.reason)
    }
}

/// The result of one corpus scan: the snapshot plus build diagnostics.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub snapshot: IndexSnapshot,
    /// Documents fully analyzed and merged.
    pub docs_indexed: usize,
    /// Documents skipped (unreadable); their ids are still in the universe.
    pub warnings: Vec<BuildWarning>,
}

/// One corpus file with its parsed id, before analysis.
struct CorpusFile {
    doc_id: DocId,
    path: PathBuf,
}

/// Per-document analysis output: (stem, position) pairs in token order.
enum Analyzed {
    Indexed(DocId, Vec<(String, u32)>),
    Skipped(DocId, BuildWarning),
}

/// Scan a corpus directory and build the three index structures.
///
/// Single pass: each document is tokenized, its surviving tokens are
/// numbered left to right, and each token's stem contributes one posting
/// and one position entry. Ids land in the universe before the file is
/// even opened.
pub fn build_indexes(
    corpus: &Path,
    stopwords: &Stopwords,
) -> Result<BuildReport, EngineError> {
    let files = scan_corpus(corpus)?;

    #[cfg(feature = "parallel")]
    let analyzed: Vec<Analyzed> = files
        .par_iter()
        .map(|file| analyze_document(file, stopwords))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let analyzed: Vec<Analyzed> = files
        .iter()
        .map(|file| analyze_document(file, stopwords))
        .collect();

    // Sequential merge keeps map mutation single-threaded.
    let mut report = BuildReport::default();
    for outcome in analyzed {
        match outcome {
            Analyzed::Indexed(doc_id, postings) => {
                report.snapshot.universe.insert(doc_id);
                for (stemmed, position) in postings {
                    report
                        .snapshot
                        .inverted
                        .entry(stemmed.clone())
                        .or_default()
                        .insert(doc_id);
                    report
                        .snapshot
                        .positional
                        .entry(stemmed)
                        .or_default()
                        .entry(doc_id)
                        .or_default()
                        .push(position);
                }
                report.docs_indexed += 1;
            }
            Analyzed::Skipped(doc_id, warning) => {
                report.snapshot.universe.insert(doc_id);
                report.warnings.push(warning);
            }
        }
    }

    Ok(report)
}

/// Enumerate `.txt` files and parse their document ids.
///
/// Id parse failures are fatal and reported before any document is read.
/// Files are returned in filename order for a deterministic merge.
fn scan_corpus(corpus: &Path) -> Result<Vec<CorpusFile>, EngineError> {
    let entries = fs::read_dir(corpus).map_err(|source| EngineError::CorpusDir {
        path: corpus.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| EngineError::CorpusDir {
            path: corpus.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(TEXT_EXTENSION) {
            continue;
        }
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => continue,
        };
        let prefix = name.split('.').next().unwrap_or(name);
        let doc_id = prefix
            .parse::<u32>()
            .map(DocId)
            .map_err(|_| EngineError::DocumentName { file: path.clone() })?;
        files.push(CorpusFile { doc_id, path });
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

/// Decode and analyze one document into (stem, position) pairs.
///
/// Decoding is best-effort: invalid UTF-8 sequences are replaced, never
/// fatal. An unreadable file becomes a `Skipped` outcome.
fn analyze_document(file: &CorpusFile, stopwords: &Stopwords) -> Analyzed {
    let bytes = match fs::read(&file.path) {
        Ok(bytes) => bytes,
        Err(e) => {
            return Analyzed::Skipped(
                file.doc_id,
                BuildWarning {
                    file: file.path.clone(),
                    reason: e.to_string(),
                },
            )
        }
    };
    let text = String::from_utf8_lossy(&bytes);

    let postings = tokenize(&text, stopwords)
        .into_iter()
        .enumerate()
        .map(|(position, token)| (stem(&token), position as u32))
        .collect();

    Analyzed::Indexed(file.doc_id, postings)
}
