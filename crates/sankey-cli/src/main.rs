use anyhow::Context;
use clap::{value_parser, Arg, Command};
use sankey_core::{prepare_sankey, FlowConfig, FlowError, FlowReport};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("sankey-flow")
        .version(sankey_core::VERSION)
        .about("Build Sankey renderer input from a financial statement document")
        .arg(
            Arg::new("path")
                .value_name("PATH_TO_JSON")
                .value_parser(value_parser!(PathBuf))
                .help("Document with optional 'company' and 'year' and a 'sections' object"),
        )
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[derive(Debug)]
enum Outcome {
    Usage,
    Prepared(Box<FlowReport>),
    Failed(FlowError),
}

fn run(path: Option<&Path>, config: &FlowConfig) -> Outcome {
    let Some(path) = path else {
        return Outcome::Usage;
    };
    match prepare_sankey(path, config) {
        Ok(report) => Outcome::Prepared(Box::new(report)),
        Err(e) => Outcome::Failed(e),
    }
}

/// Renderer input goes to `out`; usage and failures go to `err`.
fn report(
    outcome: &Outcome,
    usage: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<()> {
    match outcome {
        Outcome::Usage => {
            writeln!(err, "{usage}")?;
        }
        Outcome::Prepared(report) => {
            for skipped in report.graph.skipped() {
                writeln!(err, "warning: no numeric amount for {skipped}; entry skipped")?;
            }
            serde_json::to_writer_pretty(&mut *out, &report.sankey)
                .context("failed to write sankey data")?;
            writeln!(out)?;
        }
        Outcome::Failed(e) => {
            writeln!(err, "error: {e}")?;
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut command = cli();
    let matches = command.get_matches_mut();
    let usage = command.render_usage().to_string();

    let config = FlowConfig::from_env();
    let outcome = run(matches.get_one::<PathBuf>("path").map(PathBuf::as_path), &config);
    if let Outcome::Failed(e) = &outcome {
        tracing::debug!("Preparation failed: {:?}", e);
    }

    let stdout = io::stdout();
    let stderr = io::stderr();
    report(&outcome, &usage, &mut stdout.lock(), &mut stderr.lock())
}
