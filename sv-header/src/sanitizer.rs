//! Comment removal that leaves string literals untouched.
//!
//! The text is lexed once from left to right. At every position the
//! construct that starts first wins, so `//` inside a string is never a
//! comment and a quote inside a comment never opens a string.
//!
//! Whether a single quote opens a literal depends on what precedes it in the
//! *output*: a quote glued to an identifier or a closing bracket, even across
//! a removed comment, is a sized literal (`8'hFF`) or a cast (`int'(x)`).
//! Unsized literals and assignment patterns (`'0`, `'hFF`, `'{a, b}`) are
//! code as well. Deciding on output context keeps `sanitize` idempotent.
//!
//! Malformed input fails open: an unterminated string literal is kept up to
//! the end of the text and an unterminated block comment removes everything
//! up to the end of the text.

use chumsky::prelude::*;
use tracing::debug;

use crate::scan::is_ident_char;

/// Characters after which a single quote is part of a number or cast.
fn is_glue(c: char) -> bool {
    is_ident_char(c) || matches!(c, ')' | ']' | '}')
}

fn sanitizer_parser() -> impl Parser<char, String, Error = Simple<char>> + Clone {
    let line_comment = just("//")
        .then(filter(|c: &char| *c != '\n' && *c != '\r').repeated())
        .ignored();

    let block_comment = just("/*")
        .then(just("*/").not().rewind().then(any()).repeated())
        .then(just("*/").ignored().or(end()))
        .ignored();

    let comment = choice((line_comment, block_comment));
    let gap = comment.clone().repeated();

    let double_quoted = just('"')
        .chain(
            choice((
                just('\\').chain(any()),
                filter(|c: &char| *c != '"' && *c != '\\').map(|c| vec![c]),
            ))
            .repeated()
            .flatten(),
        )
        .chain::<char, _, _>(just('"').or_not())
        .collect::<String>();

    // `'0`, `'1`, `'x`, `'z`, `'{...}` and `'[s]<base><digit>`
    let based_digit = filter(|c: &char| {
        c.is_ascii_hexdigit() || matches!(c, 'x' | 'X' | 'z' | 'Z' | '?' | '_')
    });
    let unsized_literal = gap.clone().ignore_then(choice((
        one_of("01xXzZ{").ignored(),
        one_of("sS")
            .then_ignore(gap.clone())
            .or_not()
            .ignore_then(one_of("bBoOdDhH"))
            .then_ignore(gap.clone())
            .then(based_digit)
            .ignored(),
    )));
    let unsized_tick = just('\'')
        .then_ignore(unsized_literal.rewind())
        .map(String::from);

    let single_quoted = just('\'')
        .chain(filter(|c: &char| *c != '\'').repeated())
        .chain::<char, _, _>(just('\'').or_not())
        .collect::<String>();

    // Comments inside a glued run vanish, so a quote after them stays code.
    let glue = filter(|c: &char| is_glue(*c));
    let glued_run = glue
        .clone()
        .chain(gap.ignore_then(glue.or(just('\''))).repeated())
        .collect::<String>();

    let plain_run = filter(|c: &char| !matches!(c, '"' | '\'' | '/') && !is_glue(*c))
        .repeated()
        .at_least(1)
        .collect::<String>();

    choice((
        comment.to(String::new()),
        double_quoted,
        unsized_tick,
        single_quoted,
        glued_run,
        plain_run,
        any().map(String::from),
    ))
    .repeated()
    .then_ignore(end())
    .map(|pieces: Vec<String>| pieces.concat())
}

/// Remove `//` and `/* */` comments from `text`, preserving quoted literals
/// byte for byte.
pub fn sanitize(text: &str) -> String {
    match sanitizer_parser().parse(text) {
        Ok(clean) => clean,
        Err(errors) => {
            debug!(errors = errors.len(), "sanitizer rejected input, keeping it as is");
            text.to_string()
        }
    }
}
