//! Lexer for boolean query strings.
//!
//! Produces a typed token stream for the shunting-yard pass in `boolean`.
//! Keeping the lexer separate means precedence handling never has to think
//! about quotes or word boundaries, and each half is testable alone.
//!
//! Tokens:
//!
//! - `Word`: a maximal run of word characters (letters/digits/underscore)
//! - `Phrase`: the content between double quotes, taken verbatim as one
//!   opaque term (inner spaces preserved)
//! - `And` / `Or` / `Not`: operator keywords, case-insensitive
//! - `OpenParen` / `CloseParen`
//!
//! Everything else (punctuation, whitespace) separates tokens and is
//! dropped. The whole input is lowercased up front, so `CAT And Dog` and
//! `cat and dog` lex identically.

use crate::error::QueryError;

/// One lexed element of a boolean query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryToken {
    Word(String),
    /// Quoted multi-word term, treated downstream as a single opaque term.
    Phrase(String),
    And,
    Or,
    Not,
    OpenParen,
    CloseParen,
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Lex a boolean query into a token stream.
///
/// An opening quote with no closing quote is a format error; silently
/// guessing where the phrase ends would make results depend on trailing
/// whitespace.
pub fn lex(query: &str) -> Result<Vec<QueryToken>, QueryError> {
    let lowered = query.to_lowercase();
    let mut chars = lowered.chars().peekable();
    let mut tokens = Vec::new();

    while let Some(&c) = chars.peek() {
        match c {
            '"' => {
                chars.next();
                let mut phrase = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '"' {
                        closed = true;
                        break;
                    }
                    phrase.push(c);
                }
                if !closed {
                    return Err(QueryError::UnterminatedPhrase);
                }
                if !phrase.is_empty() {
                    tokens.push(QueryToken::Phrase(phrase));
                }
            }
            '(' => {
                chars.next();
                tokens.push(QueryToken::OpenParen);
            }
            ')' => {
                chars.next();
                tokens.push(QueryToken::CloseParen);
            }
            c if is_word_char(c) => {
                let mut word = String::new();
                while let Some(&c) = chars.peek() {
                    if !is_word_char(c) {
                        break;
                    }
                    word.push(c);
                    chars.next();
                }
                tokens.push(match word.as_str() {
                    "and" => QueryToken::And,
                    "or" => QueryToken::Or,
                    "not" => QueryToken::Not,
                    _ => QueryToken::Word(word),
                });
            }
            _ => {
                chars.next();
            }
        }
    }

    Ok(tokens)
}
