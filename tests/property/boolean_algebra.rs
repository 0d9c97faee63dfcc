//! Set-algebra identities of the boolean evaluator.

use proptest::prelude::*;
use retriever::{execute, DocId, IndexSnapshot};

use crate::common::snapshot_from;

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2,6}")
        .unwrap()
        .prop_filter("operator keywords are not terms", |w| {
            !matches!(w.as_str(), "and" | "or" | "not")
        })
}

fn document_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 1..8).prop_map(|words| words.join(" "))
}

/// A small corpus plus one term drawn from its own vocabulary.
fn corpus_strategy() -> impl Strategy<Value = (IndexSnapshot, String)> {
    (prop::collection::vec(document_strategy(), 1..5), word_strategy()).prop_map(
        |(texts, word)| {
            let named: Vec<(String, String)> = texts
                .into_iter()
                .enumerate()
                .map(|(i, text)| (format!("{}.txt", i + 1), text))
                .collect();
            let docs: Vec<(&str, &str)> = named
                .iter()
                .map(|(name, text)| (name.as_str(), text.as_str()))
                .collect();
            (snapshot_from(&docs), word)
        },
    )
}

fn universe(snapshot: &IndexSnapshot) -> Vec<DocId> {
    snapshot.universe.iter().copied().collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// A AND A = A, over any term including unknown ones.
    #[test]
    fn and_is_idempotent((snapshot, term) in corpus_strategy()) {
        let once = execute(&term, &snapshot).unwrap();
        let twice = execute(&format!("{} AND {}", term, term), &snapshot).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// A OR NOT A = the full universe.
    #[test]
    fn or_with_complement_is_universe((snapshot, term) in corpus_strategy()) {
        let result = execute(&format!("{} OR NOT {}", term, term), &snapshot).unwrap();
        prop_assert_eq!(result, universe(&snapshot));
    }

    /// NOT NOT A = A.
    #[test]
    fn double_negation_cancels((snapshot, term) in corpus_strategy()) {
        let plain = execute(&term, &snapshot).unwrap();
        let doubled = execute(&format!("NOT NOT {}", term), &snapshot).unwrap();
        prop_assert_eq!(plain, doubled);
    }

    /// `a OR b AND c` parses as `a OR (b AND c)`.
    #[test]
    fn and_binds_tighter_than_or(
        (snapshot, a) in corpus_strategy(),
        b in word_strategy(),
        c in word_strategy(),
    ) {
        let implicit = execute(&format!("{} OR {} AND {}", a, b, c), &snapshot).unwrap();
        let explicit = execute(&format!("{} OR ({} AND {})", a, b, c), &snapshot).unwrap();
        prop_assert_eq!(implicit, explicit);
    }

    /// Results are always sorted ascending with no duplicates.
    #[test]
    fn results_are_sorted_and_unique((snapshot, term) in corpus_strategy()) {
        let result = execute(&format!("{} OR NOT {}", term, term), &snapshot).unwrap();
        prop_assert!(result.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
