use clap::Parser;
use std::path::Path;
use std::process;

use retriever::{build_indexes, store, SearchEngine, Stopwords};

mod cli;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Build {
            corpus,
            index,
            stopwords,
        } => run_build(&corpus, &index, &stopwords),
        Commands::Search {
            corpus,
            index,
            stopwords,
            query,
        } => run_search(&corpus, &index, &stopwords, &query),
        Commands::Inspect { index } => run_inspect(&index),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        process::exit(1);
    }
}

fn run_build(
    corpus: &Path,
    index: &Path,
    stopwords: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let stopwords = Stopwords::load(stopwords)?;
    let report = build_indexes(corpus, &stopwords)?;
    for warning in &report.warnings {
        eprintln!("⚠️  {}", warning);
    }
    store::save(&report.snapshot, index)?;
    println!(
        "indexed {} documents, {} terms, {} postings → {}",
        report.snapshot.doc_count(),
        report.snapshot.term_count(),
        report.snapshot.posting_count(),
        index.display()
    );
    Ok(())
}

fn run_search(
    corpus: &Path,
    index: &Path,
    stopwords: &Path,
    query: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let stopwords = Stopwords::load(stopwords)?;
    let mut engine = SearchEngine::open(corpus, index, stopwords)?;
    for warning in engine.build_warnings() {
        eprintln!("⚠️  {}", warning);
    }

    let results = engine.search(query)?;
    if results.is_empty() {
        println!("no matching documents");
    } else {
        let ids: Vec<String> = results.iter().map(|id| id.to_string()).collect();
        println!("{} documents: {}", results.len(), ids.join(", "));
    }
    Ok(())
}

fn run_inspect(index: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = store::load(index)?;
    println!("index at {}", index.display());
    println!("  documents: {}", snapshot.doc_count());
    println!("  terms:     {}", snapshot.term_count());
    println!("  postings:  {}", snapshot.posting_count());
    Ok(())
}
