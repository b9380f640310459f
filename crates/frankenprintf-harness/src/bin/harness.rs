//! CLI entrypoint for the frankenprintf conformance harness.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use frankenprintf_core::{Arg, IoSink, printf};
use frankenprintf_harness::fixtures::{FixtureArg, FixtureSet};
use frankenprintf_harness::report::ConformanceReport;
use frankenprintf_harness::runner::TestRunner;
use frankenprintf_harness::verify::VerificationSummary;

/// Conformance tooling for frankenprintf.
#[derive(Debug, Parser)]
#[command(name = "frankenprintf-harness")]
#[command(about = "Conformance testing harness for frankenprintf")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Verify the engine against a fixture file.
    Verify {
        /// Fixture JSON path.
        #[arg(long)]
        fixture: PathBuf,
        /// Output report path (markdown). Prints a summary when omitted.
        #[arg(long)]
        report: Option<PathBuf>,
        /// Campaign label recorded in the report.
        #[arg(long, default_value = "printf-conformance")]
        campaign: String,
        /// Fixed timestamp string for deterministic report generation.
        #[arg(long)]
        timestamp: Option<String>,
    },
    /// Format one string from the command line and write it to stdout.
    Render {
        /// Format string (C-like `%` directives).
        #[arg(long)]
        format: String,
        /// Arguments as a JSON array of tagged values,
        /// e.g. '[{"int": -42}, {"str": "hi"}]'.
        #[arg(long, default_value = "[]")]
        args: String,
    },
}

fn main() -> ExitCode {
    match Cli::parse().command {
        Command::Verify {
            fixture,
            report,
            campaign,
            timestamp,
        } => run_verify(&fixture, report.as_deref(), &campaign, timestamp),
        Command::Render { format, args } => run_render(&format, &args),
    }
}

fn run_verify(
    fixture: &std::path::Path,
    report_path: Option<&std::path::Path>,
    campaign: &str,
    timestamp: Option<String>,
) -> ExitCode {
    let set = match FixtureSet::from_file(fixture) {
        Ok(set) => set,
        Err(err) => {
            eprintln!("failed to load {}: {err}", fixture.display());
            return ExitCode::FAILURE;
        }
    };

    let runner = TestRunner::new(campaign);
    let results = runner.run(&set);
    let summary = VerificationSummary::from_results(results);
    let all_passed = summary.all_passed();

    let report = ConformanceReport {
        title: format!("{} conformance", set.family),
        campaign: runner.campaign.clone(),
        timestamp: timestamp.unwrap_or_else(|| "unspecified".into()),
        summary,
    };

    match report_path {
        Some(path) => {
            if let Err(err) = std::fs::write(path, report.to_markdown()) {
                eprintln!("failed to write {}: {err}", path.display());
                return ExitCode::FAILURE;
            }
            println!("report written to {}", path.display());
        }
        None => print!("{}", report.to_markdown()),
    }

    if all_passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_render(format: &str, args_json: &str) -> ExitCode {
    let fixture_args: Vec<FixtureArg> = match serde_json::from_str(args_json) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("bad --args JSON: {err}");
            return ExitCode::FAILURE;
        }
    };
    let args: Vec<Arg<'_>> = fixture_args.iter().map(|a| a.as_arg()).collect();

    let mut sink = IoSink::new(std::io::stdout().lock());
    match printf(&mut sink, format.as_bytes(), &args) {
        Ok(written) => {
            eprintln!("{written} bytes");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("format failed: {err}");
            ExitCode::FAILURE
        }
    }
}
