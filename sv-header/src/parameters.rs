use tracing::debug;

use crate::declaration::{lex_declaration, DeclToken};
use crate::header::locate_header;
use crate::scan::split_top_level;
use crate::{check_module_name, ExtractError, ParameterMap, ParameterRecord};

/// Parameters declared in the `#( ... )` list of `module_name`.
///
/// A module without a parameter list yields an empty map.
pub fn extract_parameters(module_name: &str, text: &str) -> Result<ParameterMap, ExtractError> {
    check_module_name(module_name)?;

    match locate_header(module_name, text).parameters {
        Some(list) => Ok(parse_parameter_list(list)),
        None => {
            debug!(module = module_name, "no parameter list found");
            Ok(ParameterMap::new())
        }
    }
}

/// Parse the interior of a `#( ... )` list. Later duplicates overwrite
/// earlier ones.
pub fn parse_parameter_list(list: &str) -> ParameterMap {
    let mut parameters = ParameterMap::new();

    for entry in split_top_level(list, b',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        let declaration = lex_declaration(entry);
        let mut words: Vec<String> = declaration
            .tokens
            .iter()
            .filter(|token| !is_parameter_keyword(token))
            .map(DeclToken::render)
            .collect();

        let Some(name) = words.pop() else {
            debug!(entry, "skipping parameter entry without a name");
            continue;
        };

        let record = ParameterRecord {
            param_type: words.join(" "),
            value: declaration.default_value.unwrap_or_default(),
        };
        debug!(
            "Parameter found -> Name: {}, Value: {}, Type: {}",
            name, record.value, record.param_type
        );
        parameters.insert(name, record);
    }

    parameters
}

fn is_parameter_keyword(token: &DeclToken) -> bool {
    matches!(token.as_word(), Some("parameter" | "localparam"))
}
