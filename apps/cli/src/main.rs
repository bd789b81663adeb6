//! `shub`: the command-line front end of the analysis workflows.

mod cli;
mod render;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command};
use shub::domain::config::ApiConfig;
use shub::domain::sentiment::AnalysisReport;
use shub::features::analysis::{AnalysisError, ErrorKind};
use shub::kernel::config::load_config;
use shub_logger::{LevelFilter, Logger};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;

/// Exit code for rejected input, shared with clap's usage errors.
const EXIT_INPUT: u8 = 2;

#[shub_runtime::main(single_threaded)]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level).stderr(true).init()?;

    let cfg: ApiConfig =
        load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    debug!(config = ?cli.config, command = ?cli.command, "Configuration loaded");
    let analysis = shub::build_analysis(&cfg).context("Failed to initialize the analyzer")?;
    let analyzer = &analysis.analyzer;

    let outcome = match cli.command {
        Command::Text { text } => Ok(analyzer.analyze_text(&text)),
        Command::Demo { count } => analyzer.analyze_demo(count),
        Command::User { username, count, fallback } => {
            analyzer.analyze_user(&username, count, fallback).await
        },
    };

    match outcome {
        Ok(report) => {
            print_report(&report, cli.json).context("Failed to write the report")?;
            Ok(ExitCode::SUCCESS)
        },
        Err(err) => Ok(report_error(&err)),
    }
}

fn print_report(report: &AnalysisReport, json: bool) -> io::Result<()> {
    let mut out = io::stdout().lock();
    if json {
        render::json(&mut out, report)?;
    } else {
        render::text(&mut out, report)?;
    }
    out.flush()
}

fn report_error(err: &AnalysisError) -> ExitCode {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "error: {err}");
    if let Some(hint) = err.hint() {
        let _ = writeln!(stderr, "hint: {hint}");
    }

    match err.kind() {
        ErrorKind::Input => ExitCode::from(EXIT_INPUT),
        ErrorKind::NotFound | ErrorKind::Upstream => ExitCode::FAILURE,
    }
}
