// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the retriever command-line interface.
//!
//! Three subcommands: `build` to scan a corpus and persist the index,
//! `search` to run one boolean or proximity query, and `inspect` to show
//! what a saved index contains.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "retriever",
    about = "Boolean and proximity retrieval over a text corpus",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the index from a corpus directory and save it
    Build {
        /// Directory of <id>.txt documents
        #[arg(short, long)]
        corpus: PathBuf,

        /// Output directory for the index artifacts
        #[arg(short, long)]
        index: PathBuf,

        /// Newline-delimited stopword file
        #[arg(short, long)]
        stopwords: PathBuf,
    },

    /// Run a query against the index (loads it, or builds it on first use)
    ///
    /// Boolean: terms with AND/OR/NOT and parentheses, quoted phrases
    /// allowed. Proximity: `term1 term2 /k` finds the terms within k
    /// positions of each other.
    Search {
        /// Directory of <id>.txt documents (used if no saved index exists)
        #[arg(short, long)]
        corpus: PathBuf,

        /// Directory holding the index artifacts
        #[arg(short, long)]
        index: PathBuf,

        /// Newline-delimited stopword file
        #[arg(short, long)]
        stopwords: PathBuf,

        /// The query string
        query: String,
    },

    /// Show term/document/posting counts of a saved index
    Inspect {
        /// Directory holding the index artifacts
        #[arg(short, long)]
        index: PathBuf,
    },
}
