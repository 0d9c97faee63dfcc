//! Properties of tokenization and stemming.

use proptest::prelude::*;
use retriever::{stem, tokenize, Stopwords};

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9_]{1,12}").unwrap()
}

proptest! {
    /// `stem` is pure: repeated calls agree.
    #[test]
    fn stem_is_deterministic(word in word_strategy()) {
        prop_assert_eq!(stem(&word), stem(&word));
    }

    /// At most one suffix is stripped, so the stem is never longer than
    /// the token and shrinks by at most the longest suffix.
    #[test]
    fn stem_strips_at_most_one_suffix(word in word_strategy()) {
        let stemmed = stem(&word);
        prop_assert!(stemmed.len() <= word.len());
        prop_assert!(word.len() - stemmed.len() <= 3);
        prop_assert!(word.starts_with(&stemmed));
    }

    /// Tokenization never yields empty tokens or whitespace.
    #[test]
    fn tokens_are_never_empty(text in ".{0,200}") {
        for token in tokenize(&text, &Stopwords::none()) {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.chars().any(char::is_whitespace));
        }
    }

    /// Every configured stopword is absent from the output.
    #[test]
    fn stopwords_are_removed(text in "[a-z ]{0,100}") {
        let stopwords = Stopwords::from_lines("the\na\nis\n");
        for token in tokenize(&text, &stopwords) {
            prop_assert!(!stopwords.contains(&token));
        }
    }

    /// Tokenization is pure and case-insensitive.
    #[test]
    fn tokenize_is_case_insensitive(text in "[a-zA-Z ,.]{0,100}") {
        let stopwords = Stopwords::none();
        prop_assert_eq!(
            tokenize(&text, &stopwords),
            tokenize(&text.to_uppercase(), &stopwords)
        );
    }
}
