use std::path::PathBuf;

use clap::ValueEnum;
use tracing::error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    #[default]
    #[value(name = "INFO")]
    Info,
    #[value(name = "DEBUG")]
    Debug,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct ParsedArgs {
    pub files: Vec<PathBuf>,
    pub log_level: LogLevel,
    pub output_dir: Option<PathBuf>,
    pub json: bool,
}

pub fn parse_extract_args(
    raw_files: Vec<String>,
    log_level: LogLevel,
    output_dir: Option<PathBuf>,
    json: bool,
) -> Result<ParsedArgs, String> {
    let mut files = Vec::new();

    for raw in raw_files {
        if raw.is_empty() {
            return Err("Empty file path".to_string());
        }
        match expand_file_path(&raw) {
            Some(path) => files.push(path),
            None => error!("File not found: {}", raw),
        }
    }

    if files.is_empty() {
        return Err("No input files found".to_string());
    }

    Ok(ParsedArgs {
        files,
        log_level,
        output_dir,
        json,
    })
}

/// Expand environment references in `raw` and return the path if it exists.
pub fn expand_file_path(raw: &str) -> Option<PathBuf> {
    let path = PathBuf::from(expand_env_vars(raw));
    path.exists().then_some(path)
}

/// Replace `$NAME` and `${NAME}` with the value of the environment variable.
/// References to unset variables are left as written.
pub fn expand_env_vars(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(dollar) = rest.find('$') {
        out.push_str(&rest[..dollar]);
        let after = &rest[dollar + 1..];

        let (name, consumed) = match after.strip_prefix('{') {
            Some(braced) => match braced.find('}') {
                Some(close) => (&braced[..close], close + 2),
                None => ("", 0),
            },
            None => {
                let len = after
                    .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                    .unwrap_or(after.len());
                (&after[..len], len)
            }
        };

        let reference_end = dollar + 1 + consumed;
        match lookup_var(name) {
            Some(value) => out.push_str(&value),
            None => out.push_str(&rest[dollar..reference_end]),
        }
        rest = &rest[reference_end..];
    }

    out.push_str(rest);
    out
}

fn lookup_var(name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    std::env::var(name).ok()
}
