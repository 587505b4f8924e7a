use std::io::Write;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use sv_header::output::{render_text, write_headers, FileReport};
use sv_header::{extract_file, parse_extract_args, LogLevel, ParsedArgs};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sv-header")]
#[command(about = "Extract module, parameter and port headers from SystemVerilog files")]
#[command(version)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Show version information
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    version: Option<bool>,

    /// Files to process ($VAR and ${VAR} are expanded)
    #[arg(
        short = 'f',
        long = "fileinput",
        value_name = "FILE",
        num_args = 1..,
        required = true
    )]
    files: Vec<String>,

    /// Log verbosity
    #[arg(
        short = 'l',
        long = "loglevel",
        value_enum,
        ignore_case = true,
        default_value_t = LogLevel::Info
    )]
    log_level: LogLevel,

    /// Directory receiving one <module>.json file per extracted module
    #[arg(short = 'd', long = "dirpath", value_name = "DIR")]
    dir_path: Option<PathBuf>,

    /// Print extracted headers as JSON instead of text
    #[arg(long = "json")]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = init_tracing(cli.log_level) {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }

    let parsed_args = match parse_extract_args(cli.files, cli.log_level, cli.dir_path, cli.json)
    {
        Ok(args) => args,
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    };

    match run(&parsed_args) {
        Ok(true) => process::exit(0),
        Ok(false) => process::exit(1),
        Err(err) => {
            error!("{:#}", err);
            process::exit(1);
        }
    }
}

fn init_tracing(level: LogLevel) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing subscriber: {}", e))
}

/// Returns `Ok(false)` when at least one input file could not be processed.
fn run(args: &ParsedArgs) -> Result<bool> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut had_errors = false;

    for file_path in &args.files {
        info!("Processing {}", file_path.display());

        let headers = match extract_file(file_path) {
            Ok(headers) => headers,
            Err(err) => {
                error!("{}", err);
                had_errors = true;
                continue;
            }
        };

        if args.json {
            let report = FileReport {
                file: file_path,
                modules: &headers,
            };
            serde_json::to_writer_pretty(&mut out, &report)
                .context("failed to write JSON report")?;
            writeln!(out)?;
        } else {
            render_text(&headers, &mut out)?;
        }

        if let Some(dir) = &args.output_dir {
            let written = write_headers(dir, &headers)
                .with_context(|| format!("failed to write headers into {}", dir.display()))?;
            for path in written {
                info!("Wrote {}", path.display());
            }
        }
    }

    Ok(!had_errors)
}
