//! Text analysis: tokenization, stopword removal, and suffix stemming.
//!
//! Both the index builder and the query evaluators come through here, and
//! they must come through *identically*: a query term stemmed differently
//! from its indexed form silently matches nothing. That symmetry is the one
//! invariant this module exists to protect.
//!
//! # Stemming
//!
//! [`stem`] strips the first matching suffix from a fixed priority list
//! (`ing`, `ed`, `ly`, `es`, `s`) and stops. One pass, no length floor:
//! `"es"` stems to the empty string and that is intentional. Guarding short
//! tokens would have to happen on the build side and the query side in
//! lockstep, and the coarse rule works fine without it.

use crate::error::EngineError;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Suffixes tested in priority order; the first match is stripped.
const SUFFIXES: [&str; 5] = ["ing", "ed", "ly", "es", "s"];

/// The stopword set, loaded once at startup and immutable afterwards.
///
/// Supplied as a newline-delimited file. A missing or unreadable file is a
/// fatal startup error; tokenization without the agreed stopword set would
/// produce positions that disagree with every previously built index.
#[derive(Debug, Clone, Default)]
pub struct Stopwords(HashSet<String>);

impl Stopwords {
    /// Load a newline-delimited stopword file.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let raw = fs::read_to_string(path).map_err(|source| EngineError::StopwordList {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_lines(&raw))
    }

    /// Build a set from newline-delimited text.
    pub fn from_lines(raw: &str) -> Self {
        Stopwords(
            raw.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// An empty set; useful for tests and stopword-free corpora.
    pub fn none() -> Self {
        Stopwords(HashSet::new())
    }

    /// Check membership of an already-lowercased word.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Word boundary detection: anything outside `\w` separates tokens.
#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split text into normalized tokens, dropping stopwords.
///
/// Lowercases the input, extracts maximal runs of word characters
/// (letters, digits, underscore), and filters the stopword set. The output
/// preserves left-to-right order; downstream position numbering counts
/// these surviving tokens, so a stopword never occupies a position slot.
///
/// Pure: the same text and stopword set always produce the same sequence.
/// Never yields an empty token.
pub fn tokenize(text: &str, stopwords: &Stopwords) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in lowered.chars() {
        if is_word_char(c) {
            current.push(c);
        } else if !current.is_empty() {
            if !stopwords.contains(&current) {
                tokens.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
        }
    }
    if !current.is_empty() && !stopwords.contains(&current) {
        tokens.push(current);
    }

    tokens
}

/// Reduce a token to its stem by stripping at most one suffix.
///
/// Suffixes are tested in the order `ing`, `ed`, `ly`, `es`, `s`; the first
/// match is removed and the search stops. A token matching no suffix is its
/// own stem. Deterministic and pure; may return an empty string for tokens
/// that *are* a suffix (e.g. `"es"`).
pub fn stem(token: &str) -> String {
    for suffix in SUFFIXES {
        if let Some(root) = token.strip_suffix(suffix) {
            return root.to_string();
        }
    }
    token.to_string()
}
