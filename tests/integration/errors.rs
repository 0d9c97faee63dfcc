//! Error-path behavior at the crate boundary.

use retriever::{
    build_indexes, execute, store, EngineError, QueryError, SearchEngine, Stopwords, StoreError,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::common::{example_snapshot, write_corpus};

#[test]
fn leading_binary_operator_is_a_format_error_not_a_crash() {
    let snapshot = example_snapshot();
    let err = execute("AND cat", &snapshot).unwrap_err();
    assert_eq!(err, QueryError::MissingOperand { operator: "AND" });

    // The snapshot is untouched and keeps answering.
    assert_eq!(execute("cat AND run", &snapshot).unwrap().len(), 1);
}

#[test]
fn query_errors_do_not_poison_a_session() {
    let corpus = write_corpus(&[("1.txt", "cats run fast"), ("2.txt", "cats sleep")]);
    let index_dir = TempDir::new().unwrap();
    let mut engine =
        SearchEngine::open(corpus.path(), index_dir.path(), Stopwords::none()).unwrap();

    assert!(engine.search("(cat AND").is_err());
    assert!(engine.search("cat run /oops").is_err());
    assert!(engine.history().is_empty());

    assert_eq!(engine.search("cat OR sleep").unwrap().len(), 2);
    assert_eq!(engine.history().len(), 1);
}

#[test]
fn missing_stopword_file_aborts_startup() {
    let err = Stopwords::load(Path::new("/no/such/stopwords.txt")).unwrap_err();
    assert!(matches!(err, EngineError::StopwordList { .. }));
}

#[test]
fn bad_document_name_aborts_the_build() {
    let corpus = write_corpus(&[("1.txt", "cat"), ("draft.txt", "dog")]);
    let err = build_indexes(corpus.path(), &Stopwords::none()).unwrap_err();
    match err {
        EngineError::DocumentName { file } => {
            assert!(file.to_string_lossy().ends_with("draft.txt"))
        }
        other => panic!("expected DocumentName, got {:?}", other),
    }
}

#[test]
fn corrupt_artifacts_surface_instead_of_rebuilding() {
    let corpus = write_corpus(&[("1.txt", "cat")]);
    let index_dir = TempDir::new().unwrap();
    SearchEngine::open(corpus.path(), index_dir.path(), Stopwords::none()).unwrap();

    fs::write(index_dir.path().join(store::INVERTED_FILE), "{broken").unwrap();
    let err =
        SearchEngine::open(corpus.path(), index_dir.path(), Stopwords::none()).unwrap_err();
    assert!(matches!(
        err,
        EngineError::Store(StoreError::Corrupt { .. })
    ));

    // The damaged artifact was not overwritten by a silent rebuild.
    let raw = fs::read_to_string(index_dir.path().join(store::INVERTED_FILE)).unwrap();
    assert_eq!(raw, "{broken");
}

#[test]
fn partially_deleted_index_is_corrupt_not_missing() {
    let corpus = write_corpus(&[("1.txt", "cat")]);
    let index_dir = TempDir::new().unwrap();
    SearchEngine::open(corpus.path(), index_dir.path(), Stopwords::none()).unwrap();
    fs::remove_file(index_dir.path().join(store::POSITIONAL_FILE)).unwrap();

    assert!(matches!(
        store::load(index_dir.path()),
        Err(StoreError::Corrupt { .. })
    ));
}
