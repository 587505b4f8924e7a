//! Rendering extracted headers as text or JSON.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{ExtractError, ModuleHeader, PortRecord};

/// Headers extracted from one input file.
#[derive(Debug, Serialize)]
pub struct FileReport<'a> {
    pub file: &'a Path,
    pub modules: &'a [ModuleHeader],
}

/// Human-readable listing of every module, parameter and port.
pub fn render_text(headers: &[ModuleHeader], w: &mut dyn Write) -> std::io::Result<()> {
    for header in headers {
        writeln!(w, "module {}", header.name)?;
        for (name, param) in &header.parameters {
            let declaration =
                join_nonempty(&["parameter", param.param_type.as_str(), name.as_str()]);
            if param.value.is_empty() {
                writeln!(w, "  {}", declaration)?;
            } else {
                writeln!(w, "  {} = {}", declaration, param.value)?;
            }
        }
        for port in &header.ports {
            writeln!(w, "  {}", render_port(port))?;
        }
    }
    Ok(())
}

fn render_port(port: &PortRecord) -> String {
    let width = if port.width.is_empty() {
        String::new()
    } else {
        format!("[{}]", port.width)
    };
    let mut name = port.name.clone();
    if !port.unpacked.is_empty() {
        name.push_str(&format!(" [{}]", port.unpacked));
    }

    let declaration = join_nonempty(&[
        port.direction_str(),
        port.port_type.as_str(),
        width.as_str(),
        name.as_str(),
    ]);
    if port.default_value.is_empty() {
        declaration
    } else {
        format!("{} = {}", declaration, port.default_value)
    }
}

fn join_nonempty(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Write one `<module>.json` file per header into `dir`, creating it if
/// needed. Returns the written paths in header order.
pub fn write_headers(dir: &Path, headers: &[ModuleHeader]) -> Result<Vec<PathBuf>, ExtractError> {
    fs::create_dir_all(dir).map_err(|source| ExtractError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(headers.len());
    for header in headers {
        let path = dir.join(format!("{}.json", header.name));
        let json = serde_json::to_string_pretty(header)?;
        fs::write(&path, json).map_err(|source| ExtractError::Io {
            path: path.clone(),
            source,
        })?;
        written.push(path);
    }

    Ok(written)
}
