//! Wires the CLI to the generator and the format checker.

use std::io::{self, Write};
use std::process::ExitCode;

use serde::Serialize;
use ssn_core::{
    check_all, DigitSource, DisplaySink, Entropy, Generator, GeneratorConfig, Trigger,
};
use ssn_dst::DeterministicRng;
use tracing::{debug, info};

use crate::cli::Args;
use crate::error::AppError;
use crate::sink::LineSink;

/// One result in `--json` output.
#[derive(Debug, Serialize)]
struct JsonRecord {
    ssn: String,
    attempts: u32,
    rejections: u64,
}

pub fn run(args: &Args) -> Result<ExitCode, AppError> {
    let mut stdout = io::stdout().lock();

    if let Some(value) = &args.check {
        let valid = check(value, stdout)?;
        return Ok(if valid {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let config = GeneratorConfig::default().with_max_attempts(args.max_attempts);
    match args.seed {
        Some(seed) => {
            info!(seed, "using seeded digit source");
            let generator = Generator::with_config(DeterministicRng::new(seed), config);
            emit(generator, args.count, args.json, &mut stdout)?;
        }
        None => {
            let generator = Generator::with_config(Entropy::thread(), config);
            emit(generator, args.count, args.json, &mut stdout)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Generate `count` results and write one line each.
fn emit<S: DigitSource, W: Write>(
    mut generator: Generator<S>,
    count: u32,
    json: bool,
    out: &mut W,
) -> Result<(), AppError> {
    debug!(count, json, max_attempts = generator.config().max_attempts, "generating");

    if json {
        let mut sink = LineSink::new(out);
        for _ in 0..count {
            let report = generator.generate_with_stats()?;
            let record = JsonRecord {
                ssn: report.ssn.to_string(),
                attempts: report.attempts,
                rejections: report.rejections.total(),
            };
            sink.show(&serde_json::to_string(&record)?);
        }
        debug!(lines = sink.lines_count(), "done");
        sink.finish()?;
        return Ok(());
    }

    let mut trigger = Trigger::new(generator, LineSink::new(out));
    for _ in 0..count {
        trigger.fire()?;
    }
    let (_, sink) = trigger.into_parts();
    debug!(lines = sink.lines_count(), "done");
    sink.finish()?;
    Ok(())
}

/// Print a fatal error once and map it to a failing exit code.
///
/// Logging is not used here, so the message is not repeated by the
/// subscriber.
pub fn report_error<W: Write>(err: &AppError, mut out: W) -> ExitCode {
    // Nothing useful can be done if stderr itself is gone.
    let _ = writeln!(out, "Error: {err}");
    ExitCode::FAILURE
}

/// Print the rule report for `value`. Hyphens are ignored.
fn check<W: Write>(value: &str, mut out: W) -> Result<bool, AppError> {
    let candidate: String = value.chars().filter(|&c| c != '-').collect();
    let summary = check_all(&candidate);
    let valid = summary.all_hold();

    write!(out, "{}", summary.format_report())?;
    writeln!(out, "{candidate}: {}", if valid { "valid" } else { "invalid" })?;
    out.flush()?;
    Ok(valid)
}
