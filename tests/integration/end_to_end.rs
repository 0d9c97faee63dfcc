//! The worked examples: build, persist, reload, query.

use retriever::{execute, store, DocId, SearchEngine, Stopwords};
use tempfile::TempDir;

use crate::common::{example_snapshot, snapshot_from, write_corpus};

#[test]
fn cat_and_run_intersects_to_doc_one() {
    // "cats" indexes under stem "cat", so the query term "cat" finds both
    // docs; "run" narrows to doc 1.
    let snapshot = example_snapshot();
    assert_eq!(execute("cat AND run", &snapshot).unwrap(), vec![DocId(1)]);
}

#[test]
fn cat_not_sleep_subtracts_from_universe() {
    let snapshot = example_snapshot();
    assert_eq!(execute("cat NOT sleep", &snapshot).unwrap(), vec![DocId(1)]);
}

#[test]
fn proximity_window_separates_adjacent_from_exact() {
    let snapshot = example_snapshot();
    assert_eq!(execute("cat run /1", &snapshot).unwrap(), vec![DocId(1)]);
    assert_eq!(execute("cat run /0", &snapshot).unwrap(), vec![]);
}

#[test]
fn full_cycle_build_save_load_query() {
    let corpus = write_corpus(&[("1.txt", "cats run fast"), ("2.txt", "cats sleep")]);
    let index_dir = TempDir::new().unwrap();

    let mut engine =
        SearchEngine::open(corpus.path(), index_dir.path(), Stopwords::none()).unwrap();
    assert_eq!(engine.search("cat AND run").unwrap(), vec![DocId(1)]);

    // A fresh engine must answer identically from the persisted artifacts,
    // without ever looking at the corpus again.
    let empty_corpus = TempDir::new().unwrap();
    let mut reloaded =
        SearchEngine::open(empty_corpus.path(), index_dir.path(), Stopwords::none()).unwrap();
    assert_eq!(reloaded.search("cat AND run").unwrap(), vec![DocId(1)]);
    assert_eq!(reloaded.search("cat NOT sleep").unwrap(), vec![DocId(1)]);
    assert_eq!(reloaded.search("cat run /1").unwrap(), vec![DocId(1)]);
}

#[test]
fn stopwords_shift_positions_before_indexing() {
    let corpus = write_corpus(&[("1.txt", "the cat the dog")]);
    let index_dir = TempDir::new().unwrap();
    let stopwords = Stopwords::from_lines("the\n");
    let mut engine = SearchEngine::open(corpus.path(), index_dir.path(), stopwords).unwrap();

    // With "the" removed, cat and dog are adjacent.
    assert_eq!(engine.search("cat dog /1").unwrap(), vec![DocId(1)]);
}

#[test]
fn saved_artifacts_use_the_expected_names() {
    let corpus = write_corpus(&[("1.txt", "cat")]);
    let index_dir = TempDir::new().unwrap();
    SearchEngine::open(corpus.path(), index_dir.path(), Stopwords::none()).unwrap();

    for name in [
        store::INVERTED_FILE,
        store::POSITIONAL_FILE,
        store::UNIVERSE_FILE,
    ] {
        assert!(index_dir.path().join(name).exists(), "missing {}", name);
    }
}

#[test]
fn empty_corpus_builds_an_empty_snapshot() {
    let snapshot = snapshot_from(&[]);
    assert_eq!(snapshot.doc_count(), 0);
    assert_eq!(execute("cat OR dog", &snapshot).unwrap(), vec![]);
}
