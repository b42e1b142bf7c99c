// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `my_putstr` binary entry point.

use clap::Parser;

use libmy::diagnostic::print_error;
use libmy::exit_codes;
use libmy::{my_putstr, PutstrError};

/// Write TEXT to standard output, verbatim
#[derive(Parser, Debug)]
#[command(name = "my_putstr", version)]
struct Cli {
    /// Text to write (no newline is added)
    #[arg(value_name = "TEXT", default_value = "")]
    text: String,

    /// Number of times to write TEXT
    #[arg(long, default_value_t = 1)]
    repeat: usize,
}

fn run(cli: &Cli) -> Result<(), PutstrError> {
    for _ in 0..cli.repeat {
        my_putstr(&cli.text)?;
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            print_error(e);
            std::process::exit(exit_codes::ERROR);
        }
    }
}
