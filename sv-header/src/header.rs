//! Locating the parameter and port lists of a module header.
//!
//! A header is read as one contiguous production starting right after the
//! module name:
//!
//! ```text
//! name [ '#' '(' parameters ')' [ other text ] ] [ '(' ports ')' ]
//! ```
//!
//! Both lists are matched with balanced parentheses, so nested expressions
//! such as `$clog2(DEPTH)` never cut a list short.

use crate::locator::locate_modules;
use crate::scan::{balanced_group, find_word, skip_whitespace};

/// Raw interiors of a module's `#( ... )` and `( ... )` lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderLists<'a> {
    pub parameters: Option<&'a str>,
    pub ports: Option<&'a str>,
}

/// Find the header lists of `module_name` in `text`.
///
/// When `text` declares the module, only its own declaration site is
/// considered. Otherwise every whole-word occurrence of the name (such as an
/// instantiation) is tried in source order. Parameters come from the first
/// occurrence with a `#( ... )` block. Ports come from the first occurrence
/// that has both lists, or failing that from the first bare `name ( ... )`.
pub fn locate_header<'a>(module_name: &str, text: &'a str) -> HeaderLists<'a> {
    if let Some(decl) = locate_modules(text)
        .into_iter()
        .find(|decl| decl.name == module_name)
    {
        return locate_header_at(text, decl.name_end);
    }

    let mut found = HeaderLists::default();
    let mut bare_ports = None;
    let mut from = 0;
    while let Some(at) = find_word(text, module_name, from) {
        let name_end = at + module_name.len();
        let lists = locate_header_at(text, name_end);
        if lists.parameters.is_some() {
            found.parameters = found.parameters.or(lists.parameters);
            if lists.ports.is_some() {
                found.ports = lists.ports;
                break;
            }
        } else {
            bare_ports = bare_ports.or(lists.ports);
        }
        from = name_end;
    }

    found.ports = found.ports.or(bare_ports);
    found
}

/// Parse the header lists that follow a module name ending at `name_end`.
pub fn locate_header_at(text: &str, name_end: usize) -> HeaderLists<'_> {
    let bytes = text.as_bytes();
    let mut lists = HeaderLists::default();
    let mut i = skip_whitespace(bytes, name_end);

    if bytes.get(i) == Some(&b'#') {
        let open = skip_whitespace(bytes, i + 1);
        let Some(group) = balanced_group(text, open) else {
            return lists;
        };
        i = group.end + 1;
        lists.parameters = Some(&text[group]);

        // An instance name may sit between the parameter and port lists.
        while i < bytes.len() && !matches!(bytes[i], b'(' | b')' | b';') {
            i += 1;
        }
    }

    if let Some(group) = balanced_group(text, i) {
        lists.ports = Some(&text[group]);
    }

    lists
}
