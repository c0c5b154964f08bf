//! netcost check - validate a scenario file and report problems.
//!
//! Prints validator diagnostics without blocking on them; the exit code
//! distinguishes a clean configuration (0) from one carrying error-severity
//! findings (1). A scenario the builder rejects outright is reported as a
//! single `B0001` diagnostic.

use crate::report;
use crate::scenario;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use netcost_validate::{validate, Severity};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Output format for diagnostics.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// JSON output for tooling integration
    Json,
}

/// A diagnostic message in JSON format.
#[derive(Debug, Serialize)]
pub struct JsonDiagnostic {
    /// Severity: "error" or "warning"
    pub severity: String,
    /// Diagnostic code (e.g. "C1001", "B0001")
    pub code: String,
    /// Diagnostic message
    pub message: String,
    /// Optional context information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// JSON output structure for a whole check run.
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    /// List of diagnostics
    pub diagnostics: Vec<JsonDiagnostic>,
    /// Total error count
    pub error_count: usize,
    /// Total warning count
    pub warning_count: usize,
}

/// Validate a scenario file and report configuration problems.
#[derive(Parser, Debug)]
pub struct Args {
    /// The scenario file to check
    #[arg(value_name = "SCENARIO")]
    pub scenario: PathBuf,

    /// Suppress all output (just use the exit code)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format (text or json)
    #[arg(long, short = 'f', value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Run the check command.
pub fn run(args: &Args) -> Result<ExitCode> {
    let mut stdout = io::stdout().lock();

    if !args.scenario.exists() {
        anyhow::bail!("file not found: {}", args.scenario.display());
    }

    let json_mode = matches!(args.format, OutputFormat::Json);
    let scenario = scenario::load(&args.scenario)?;

    // A build rejection is itself the finding, not an infrastructure
    // failure; report it and exit 1 like any other error diagnostic.
    let network = match scenario.into_network() {
        Ok(network) => network,
        Err(build_error) => {
            if json_mode {
                let output = JsonOutput {
                    diagnostics: vec![JsonDiagnostic {
                        severity: "error".to_string(),
                        code: "B0001".to_string(),
                        message: build_error.to_string(),
                        context: None,
                    }],
                    error_count: 1,
                    warning_count: 0,
                };
                writeln!(stdout, "{}", serde_json::to_string_pretty(&output)?)?;
            } else if !args.quiet {
                writeln!(stdout, "error[B0001]: {build_error}")?;
                writeln!(stdout)?;
                report::print_summary(1, 0, &mut stdout)?;
            }
            return Ok(ExitCode::from(1));
        }
    };

    let diagnostics = validate(&network);
    let error_count = diagnostics
        .iter()
        .filter(|d| d.severity() == Severity::Error)
        .count();
    let warning_count = diagnostics.len() - error_count;

    if json_mode {
        let output = JsonOutput {
            diagnostics: diagnostics
                .iter()
                .map(|d| JsonDiagnostic {
                    severity: d.severity().to_string(),
                    code: d.code.to_string(),
                    message: d.message.clone(),
                    context: d.context.clone(),
                })
                .collect(),
            error_count,
            warning_count,
        };
        writeln!(stdout, "{}", serde_json::to_string_pretty(&output)?)?;
    } else if !args.quiet {
        report::report_diagnostics(&diagnostics, &mut stdout)?;
        report::print_summary(error_count, warning_count, &mut stdout)?;
    }

    if error_count > 0 {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
