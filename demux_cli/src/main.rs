mod args;

use std::fs::File;
use std::io::{BufRead, BufReader};

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use audio_core::{demux_to_sink, DirSink, Fragment};

use crate::args::Cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let _ = dotenv::dotenv();

    run(Cli::parse())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let file = File::open(&cli.dump)
        .with_context(|| format!("failed to open dump {}", cli.dump.display()))?;

    let mut sink = DirSink::create(&cli.out_dir)
        .with_context(|| format!("failed to create output directory {}", cli.out_dir.display()))?;

    info!("replaying {}", cli.dump.display());
    let report = demux_to_sink(fragments(BufReader::new(file)), &cli.base_name, &mut sink);

    if report.no_audio() {
        warn!(
            "no audio fragments in {}; the capture may be text-only or truncated",
            cli.dump.display()
        );
    } else {
        info!(
            "wrote {} audio file(s) to {}",
            report.persisted,
            cli.out_dir.display()
        );
    }

    if !report.failures.is_empty() {
        anyhow::bail!("{} unit(s) could not be persisted", report.failures.len());
    }
    Ok(())
}

/// Lazily decode dump lines into fragments. Malformed lines are skipped
/// with a warning, matching the degrade-don't-abort policy the pipeline
/// applies to malformed MIME input.
fn fragments<R: BufRead>(reader: R) -> impl Iterator<Item = Fragment> {
    reader.lines().filter_map(|line| match line {
        Ok(line) if line.trim().is_empty() => None,
        Ok(line) => match serde_json::from_str(&line) {
            Ok(fragment) => Some(fragment),
            Err(err) => {
                warn!("skipping malformed dump line: {err}");
                None
            }
        },
        Err(err) => {
            warn!("failed to read dump line: {err}");
            None
        }
    })
}
