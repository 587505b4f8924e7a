//! Byte-level scanning helpers shared by the extractors.
//!
//! All delimiters handled here are ASCII, so byte offsets returned by these
//! helpers always fall on `char` boundaries of the scanned text.

use std::ops::Range;

pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// True when `s` is a SystemVerilog simple identifier.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if is_ident_start(first) => chars.all(is_ident_char),
        _ => false,
    }
}

/// Index just past the closing quote of the double-quoted literal opening at
/// `start`. An unterminated literal runs to the end of `bytes`.
pub(crate) fn skip_string(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

pub(crate) fn skip_whitespace(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}

/// Interior of the parenthesised group opening at byte `open`.
///
/// Nesting is tracked with a depth counter and parentheses inside string
/// literals are ignored. Returns `None` when `open` is not a `(` or the
/// group is never closed.
pub fn balanced_group(text: &str, open: usize) -> Option<Range<usize>> {
    let bytes = text.as_bytes();
    if bytes.get(open) != Some(&b'(') {
        return None;
    }

    let mut depth = 0usize;
    let mut i = open;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                i = skip_string(bytes, i);
                continue;
            }
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + 1..i);
                }
            }
            _ => {}
        }
        i += 1;
    }

    None
}

/// Split `text` on `sep` wherever no `()`, `[]` or `{}` group is open.
pub fn split_top_level(text: &str, sep: u8) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                i = skip_string(bytes, i);
                continue;
            }
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => depth = depth.saturating_sub(1),
            b if b == sep && depth == 0 => {
                parts.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }

    parts.push(&text[start..]);
    parts
}

pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Next occurrence of `word` at or after `from` that is not part of a longer
/// identifier.
pub fn find_word(text: &str, word: &str, from: usize) -> Option<usize> {
    if word.is_empty() {
        return None;
    }

    let mut search = from;
    while let Some(offset) = text.get(search..)?.find(word) {
        let at = search + offset;
        let end = at + word.len();

        let clear_before = text[..at]
            .chars()
            .next_back()
            .map_or(true, |c| !is_ident_char(c));
        let clear_after = text[end..]
            .chars()
            .next()
            .map_or(true, |c| !is_ident_char(c));

        if clear_before && clear_after {
            return Some(at);
        }
        search = end;
    }

    None
}
