use crate::scan::{is_ident_char, is_identifier};

/// A `module <name>` declaration found at the start of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDecl {
    pub name: String,
    /// 0-based line of the `module` keyword.
    pub line: usize,
    /// Byte offset just past the module name.
    pub name_end: usize,
}

/// All module declarations in `text`, in source order. Duplicates are kept.
pub fn locate_modules(text: &str) -> Vec<ModuleDecl> {
    let mut decls = Vec::new();
    let mut line_start = 0;

    for (line_idx, line) in text.split_inclusive('\n').enumerate() {
        if let Some((name, end)) = declared_name(line) {
            decls.push(ModuleDecl {
                name: name.to_string(),
                line: line_idx,
                name_end: line_start + end,
            });
        }
        line_start += line.len();
    }

    decls
}

/// Names of the modules declared in `text`, in source order.
pub fn find_modules(text: &str) -> Vec<String> {
    locate_modules(text)
        .into_iter()
        .map(|decl| decl.name)
        .collect()
}

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Module name declared on `line` and the offset just past it.
fn declared_name(line: &str) -> Option<(&str, usize)> {
    let rest = line.trim_start_matches(is_blank).strip_prefix("module")?;

    let after_keyword = rest.trim_start_matches(is_blank);
    if after_keyword.len() == rest.len() {
        return None;
    }

    let name_len = after_keyword
        .find(|c: char| !is_ident_char(c))
        .unwrap_or(after_keyword.len());
    let name = &after_keyword[..name_len];
    if !is_identifier(name) {
        return None;
    }

    let name_start = line.len() - after_keyword.len();
    Some((name, name_start + name_len))
}
