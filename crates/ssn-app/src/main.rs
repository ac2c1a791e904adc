//! CLI for generating and checking SSN-shaped strings.
//!
//! # Usage
//!
//! ```bash
//! # One result from OS entropy
//! cargo run -p ssn-app --bin ssn-generate
//!
//! # Five reproducible results as JSON lines
//! cargo run -p ssn-app --bin ssn-generate -- -n 5 --seed 42 --json
//!
//! # Check a value against the format rules
//! cargo run -p ssn-app --bin ssn-generate -- --check 123-45-6789
//! ```

mod app;
mod cli;
mod error;
mod logging;
mod sink;

use std::process::ExitCode;

use clap::Parser;
use crate::cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::init(args.verbose) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    match app::run(&args) {
        Ok(code) => code,
        Err(e) => app::report_error(&e, std::io::stderr()),
    }
}
