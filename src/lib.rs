//! Boolean and proximity retrieval over a directory of text documents.
//!
//! This crate builds a term-level index over a fixed corpus and answers two
//! kinds of queries against it: boolean expressions (`AND`/`OR`/`NOT` with
//! parentheses and quoted phrases) and proximity pairs (`term1 term2 /k`).
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐    ┌────────────┐    ┌─────────────┐
//! │ analyze.rs │───▶│  build.rs  │───▶│  store.rs   │
//! │ (tokenize, │    │ (corpus →  │    │ (save/load  │
//! │  stem)     │    │  snapshot) │    │  artifacts) │
//! └────────────┘    └────────────┘    └─────────────┘
//!        │                 │                 │
//!        ▼                 ▼                 ▼
//! ┌─────────────────────────────────────────────────┐
//! │                    query/                       │
//! │  lexer → boolean (shunting-yard + set stack)    │
//! │          proximity (positional windows)         │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! The same `analyze` pass runs at build time and at query time; index keys
//! and query terms must stem identically or lookups silently miss.
//!
//! # Usage
//!
//! ```no_run
//! use retriever::{SearchEngine, Stopwords};
//! use std::path::Path;
//!
//! let stopwords = Stopwords::load(Path::new("stopwords.txt"))?;
//! let mut engine = SearchEngine::open(
//!     Path::new("corpus"),
//!     Path::new("index"),
//!     stopwords,
//! )?;
//! let docs = engine.search("cat AND (run OR sleep)")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Module declarations
pub mod analyze;
pub mod build;
mod engine;
mod error;
pub mod query;
pub mod store;
mod types;

// Re-exports for public API
pub use analyze::{stem, tokenize, Stopwords};
pub use build::{build_indexes, BuildReport, BuildWarning};
pub use engine::{HistoryEntry, SearchEngine};
pub use error::{EngineError, QueryError, StoreError};
pub use query::execute;
pub use types::{DocId, IndexSnapshot, InvertedIndex, PositionalIndex};
