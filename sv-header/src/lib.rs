pub mod cli;
pub mod declaration;
pub mod header;
pub mod locator;
pub mod output;
pub mod parameters;
pub mod ports;
pub mod sanitizer;
pub mod scan;

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{info, warn};

pub use cli::{expand_file_path, parse_extract_args, LogLevel, ParsedArgs};
pub use locator::{find_modules, locate_modules, ModuleDecl};
pub use parameters::{extract_parameters, parse_parameter_list};
pub use ports::{extract_ports, parse_port_list};
pub use sanitizer::sanitize;

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// Callers must name the module they want extracted.
    #[error("module name must not be empty")]
    EmptyModuleName,

    #[error("'{0}' is not a valid module identifier")]
    InvalidModuleName(String),

    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize headers: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PortDirection {
    Input,
    Output,
    Inout,
    Interface,
}

impl PortDirection {
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "input" => Some(Self::Input),
            "output" => Some(Self::Output),
            "inout" => Some(Self::Inout),
            "interface" => Some(Self::Interface),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Output => "output",
            Self::Inout => "inout",
            Self::Interface => "interface",
        }
    }
}

impl std::fmt::Display for PortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type and default value of one entry in a module's `#( ... )` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParameterRecord {
    #[serde(rename = "type")]
    pub param_type: String,
    pub value: String,
}

/// Parameters keyed by name, in declaration order.
pub type ParameterMap = IndexMap<String, ParameterRecord>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PortRecord {
    pub name: String,
    pub direction: Option<PortDirection>,
    #[serde(rename = "type")]
    pub port_type: String,
    /// Packed range interior without whitespace, e.g. `7:0`.
    pub width: String,
    /// Unpacked dimensions following the name, same format as `width`.
    pub unpacked: String,
    pub default_value: String,
}

impl PortRecord {
    /// Direction as written in the source, or `""` when absent.
    pub fn direction_str(&self) -> &'static str {
        self.direction.map(|d| d.as_str()).unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleHeader {
    pub name: String,
    pub parameters: ParameterMap,
    pub ports: Vec<PortRecord>,
}

/// Sanitize `source` and extract the header of every module declared in it.
pub fn extract_headers(source: &str) -> Vec<ModuleHeader> {
    let text = sanitize(source);
    let mut headers = Vec::new();

    for decl in locate_modules(&text) {
        info!(line = decl.line + 1, "Found module: {}", decl.name);

        let lists = header::locate_header_at(&text, decl.name_end);
        let parameters = lists
            .parameters
            .map(parse_parameter_list)
            .unwrap_or_default();
        let ports = match lists.ports {
            Some(list) => parse_port_list(list),
            None => {
                warn!(module = %decl.name, "No IOs found for module");
                Vec::new()
            }
        };

        headers.push(ModuleHeader {
            name: decl.name,
            parameters,
            ports,
        });
    }

    headers
}

/// Read `path` and extract the headers of the modules it declares.
pub fn extract_file(path: &Path) -> Result<Vec<ModuleHeader>, ExtractError> {
    let source = fs::read_to_string(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(extract_headers(&source))
}

pub(crate) fn check_module_name(module_name: &str) -> Result<(), ExtractError> {
    if module_name.is_empty() {
        return Err(ExtractError::EmptyModuleName);
    }
    if !scan::is_identifier(module_name) {
        return Err(ExtractError::InvalidModuleName(module_name.to_string()));
    }
    Ok(())
}
