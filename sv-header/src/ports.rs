//! Port list extraction.
//!
//! Entries that only name a port (`input a, b`) reuse the direction, type
//! and width of the entry before them. That state lives in the fold over a
//! single port list and never outlives it.

use tracing::{debug, warn};

use crate::declaration::{lex_declaration, DeclToken, Declaration};
use crate::header::locate_header;
use crate::scan::split_top_level;
use crate::{check_module_name, ExtractError, PortDirection, PortRecord};

/// The inheritable part of a port declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct PortShape {
    direction: Option<PortDirection>,
    port_type: String,
    width: String,
}

impl PortShape {
    fn of(port: &PortRecord) -> Self {
        Self {
            direction: port.direction,
            port_type: port.port_type.clone(),
            width: port.width.clone(),
        }
    }
}

/// Ports of `module_name`, in declaration order.
///
/// A module without a discoverable port list yields an empty sequence.
pub fn extract_ports(module_name: &str, text: &str) -> Result<Vec<PortRecord>, ExtractError> {
    check_module_name(module_name)?;

    match locate_header(module_name, text).ports {
        Some(list) => Ok(parse_port_list(list)),
        None => {
            warn!(module = module_name, "No IOs found for module");
            Ok(Vec::new())
        }
    }
}

/// Parse the interior of a module's port parenthetical.
pub fn parse_port_list(list: &str) -> Vec<PortRecord> {
    let (ports, _) = split_top_level(list, b',')
        .into_iter()
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .fold(
            (Vec::new(), PortShape::default()),
            |(mut ports, previous), entry| match resolve_port(entry, &previous) {
                Some(port) => {
                    let shape = PortShape::of(&port);
                    ports.push(port);
                    (ports, shape)
                }
                None => (ports, previous),
            },
        );

    ports
}

fn resolve_port(entry: &str, previous: &PortShape) -> Option<PortRecord> {
    let Declaration {
        mut tokens,
        default_value,
    } = lex_declaration(entry);

    let mut unpacked = Vec::new();
    while let Some(DeclToken::Dimension(_)) = tokens.last() {
        if let Some(DeclToken::Dimension(dim)) = tokens.pop() {
            unpacked.push(dim);
        }
    }
    unpacked.reverse();

    let name = match tokens.pop() {
        Some(DeclToken::Word(name)) => name,
        _ => {
            debug!(entry, "skipping port entry without a name");
            return None;
        }
    };

    let shape = if tokens.is_empty() {
        previous.clone()
    } else {
        parse_shape(tokens)
    };

    let port = PortRecord {
        name,
        direction: shape.direction,
        port_type: shape.port_type,
        width: shape.width,
        unpacked: unpacked.join("]["),
        default_value: default_value.unwrap_or_default(),
    };
    debug!(
        "Port Name: {}, Dir: {}, Type: {}, Width: {}, Value: {}",
        port.name,
        port.direction_str(),
        port.port_type,
        port.width,
        port.default_value
    );

    Some(port)
}

/// Direction, type and width from the tokens preceding a port name.
fn parse_shape(mut tokens: Vec<DeclToken>) -> PortShape {
    let direction = tokens
        .first()
        .and_then(DeclToken::as_word)
        .and_then(PortDirection::from_keyword);
    if direction.is_some() {
        tokens.remove(0);
    }

    let mut widths = Vec::new();
    let mut type_words = Vec::new();
    for token in tokens {
        match token {
            DeclToken::Dimension(dim) => widths.push(dim),
            DeclToken::Word(word) => type_words.push(word),
        }
    }

    PortShape {
        direction,
        port_type: type_words.join(" "),
        width: widths.join("]["),
    }
}
