// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test capture CLI entry point.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use libmy::diagnostic::{print_error, print_info, print_warning};
use test_capture::{exit_codes, CaptureLog, HarnessConfig, HarnessError, Registry, RunMode, Runner};

/// Run stdout-capture tests against my_putstr
#[derive(Parser, Debug)]
#[command(name = "test-capture", version)]
#[command(about = "Capture my_putstr output and compare it against expected text")]
struct Cli {
    /// TOML suite file (default: the built-in my_putstr::it_works test)
    #[arg(long, env = "TEST_CAPTURE_CONFIG")]
    config: Option<PathBuf>,

    /// Only run tests whose suite::name contains this text
    #[arg(long)]
    filter: Option<String>,

    /// Where the function under test runs
    #[arg(long, value_enum, default_value = "in-process")]
    mode: Mode,

    /// Program to spawn in subprocess mode
    #[arg(long, env = "LIBMY_PUTSTR_BIN", default_value = "my_putstr")]
    bin: PathBuf,

    /// Extra argument placed before the generated ones (repeatable)
    #[arg(long = "bin-arg", allow_hyphen_values = true)]
    bin_args: Vec<String>,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    format: Format,

    /// Write every run to this file as JSON lines
    #[arg(long)]
    log: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    InProcess,
    Subprocess,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            print_error(e);
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}

async fn run(cli: Cli) -> Result<i32, HarnessError> {
    let registry = match &cli.config {
        Some(path) => HarnessConfig::load(path)?.into_registry()?,
        None => Registry::builtin(),
    };

    let cases = registry.filter(cli.filter.as_deref().unwrap_or(""));
    if cases.is_empty() {
        print_warning("no tests matched");
    }

    let log = match &cli.log {
        Some(path) => CaptureLog::with_file(path).map_err(|source| HarnessError::Log {
            path: path.clone(),
            source,
        })?,
        None => CaptureLog::new(),
    };

    let mode = match cli.mode {
        Mode::InProcess => RunMode::InProcess,
        Mode::Subprocess => RunMode::Subprocess {
            program: cli.bin.clone(),
            args: cli.bin_args.clone(),
        },
    };

    if cli.verbose {
        print_info(
            "test-capture",
            format_args!("running {} of {} tests {}", cases.len(), registry.len(), mode),
        );
    }

    let runner = Runner::with_log(mode, log);
    let report = runner.run_all(&cases).await?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        Format::Text => report.write_text(&mut out)?,
        Format::Json => report.write_json(&mut out)?,
    }
    out.flush()?;

    Ok(report.exit_code())
}
