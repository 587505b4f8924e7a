//! Tokenizer for a single parameter or port entry.
//!
//! An entry such as `input logic [ 7 : 0 ] data = 8'h00` becomes the tokens
//! `input`, `logic`, `[7:0]`, `data` plus the default value `8'h00`.

use chumsky::prelude::*;
use tracing::debug;

use crate::scan::collapse_whitespace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclToken {
    Word(String),
    /// Interior of a `[ ... ]` group with all whitespace removed.
    Dimension(String),
}

impl DeclToken {
    pub fn as_word(&self) -> Option<&str> {
        match self {
            DeclToken::Word(word) => Some(word),
            DeclToken::Dimension(_) => None,
        }
    }

    /// Source form of the token, brackets included for dimensions.
    pub fn render(&self) -> String {
        match self {
            DeclToken::Word(word) => word.clone(),
            DeclToken::Dimension(dim) => format!("[{}]", dim),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declaration {
    pub tokens: Vec<DeclToken>,
    /// Everything after the first standalone `=`, whitespace collapsed.
    pub default_value: Option<String>,
}

fn declaration_parser() -> impl Parser<char, Declaration, Error = Simple<char>> + Clone {
    let whitespace = filter(|c: &char| c.is_whitespace()).repeated();

    // Nested brackets stay inside the dimension: `[a[0]:0]`
    let dimension_body = recursive(|body| {
        choice((
            filter(|c: &char| *c != '[' && *c != ']').map(|c| vec![c]),
            just('[')
                .ignore_then(body)
                .then_ignore(just(']'))
                .map(|inner: Vec<char>| {
                    let mut chars = vec!['['];
                    chars.extend(inner);
                    chars.push(']');
                    chars
                }),
        ))
        .repeated()
        .flatten()
    });

    let dimension = just('[')
        .ignore_then(dimension_body)
        .then_ignore(just(']'))
        .map(|chars: Vec<char>| {
            DeclToken::Dimension(chars.into_iter().filter(|c| !c.is_whitespace()).collect())
        });

    // `logic[7:0]` splits into a word and a dimension
    let word = filter(|c: &char| !c.is_whitespace() && *c != '[' && *c != '=')
        .repeated()
        .at_least(1)
        .collect::<String>()
        .map(DeclToken::Word);

    let default_value = just('=')
        .ignore_then(any().repeated().collect::<String>())
        .map(|value| collapse_whitespace(&value));

    whitespace
        .clone()
        .ignore_then(
            choice((dimension, word))
                .padded_by(whitespace)
                .repeated(),
        )
        .then(default_value.or_not())
        .then_ignore(end())
        .map(|(tokens, default_value)| Declaration {
            tokens,
            default_value,
        })
}

/// Tokenize one comma-separated entry. Never fails: entries the grammar
/// rejects (an unclosed `[`) are split on whitespace instead.
pub fn lex_declaration(entry: &str) -> Declaration {
    match declaration_parser().parse(entry) {
        Ok(declaration) => declaration,
        Err(errors) => {
            debug!(
                entry,
                errors = errors.len(),
                "falling back to whitespace tokenization"
            );
            whitespace_declaration(entry)
        }
    }
}

fn whitespace_declaration(entry: &str) -> Declaration {
    let (lhs, default_value) = match entry.split_once('=') {
        Some((lhs, rhs)) => (lhs, Some(collapse_whitespace(rhs))),
        None => (entry, None),
    };

    Declaration {
        tokens: lhs
            .split_whitespace()
            .map(|word| DeclToken::Word(word.to_string()))
            .collect(),
        default_value,
    }
}
