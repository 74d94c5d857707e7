//! `csum`: sum the fixed input and print the result.
//!
//! Usage: `csum [--json]`
//!
//! Default output: one line, `C-computed Sum = 15.00`.
//! With `--json`: one line of JSON (see `report::render_json`).
//! Logs go to stderr, filtered by `RUST_LOG`.

use std::process::ExitCode;

use csum_harness::report::{render_json, render_line, ReportConfig};
use csum_harness::runner::run_fixed;

enum OutputMode {
    Text,
    Json,
}

fn parse_args() -> Result<OutputMode, String> {
    let mut mode = OutputMode::Text;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => mode = OutputMode::Json,
            other => return Err(format!("unrecognized argument: {other}")),
        }
    }
    Ok(mode)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mode = match parse_args() {
        Ok(mode) => mode,
        Err(msg) => {
            eprintln!("{msg}\nusage: csum [--json]");
            return ExitCode::from(2);
        }
    };

    let outcome = match run_fixed() {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(error = %e, "summation failed");
            eprintln!("csum: {e}");
            return ExitCode::FAILURE;
        }
    };

    match mode {
        OutputMode::Text => println!("{}", render_line(outcome.sum, &ReportConfig::default())),
        OutputMode::Json => println!("{}", render_json(&outcome)),
    }
    ExitCode::SUCCESS
}
