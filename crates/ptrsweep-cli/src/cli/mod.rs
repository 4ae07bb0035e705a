//! CLI argument parsing and dispatch.

pub mod args;

use anyhow::Result;
use args::Cli;
use clap::Parser;
use ptrsweep_recon::Sweep;
use tokio::io::BufReader;
use tracing::debug;

use crate::config::Config;
use crate::logging;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Optional config file, overridden by flags
    let file = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let settings = file.merge(&cli)?;

    logging::init(&settings.log_level)?;
    debug!(
        server = %settings.sweep.resolver.socket_addr(),
        workers = settings.sweep.workers.get(),
        mode = ?settings.sweep.mode,
        "starting sweep"
    );

    let sweep = Sweep::new(&settings.sweep);
    let report = sweep
        .run(
            BufReader::new(tokio::io::stdin()),
            tokio::io::stdout(),
            tokio::io::stderr(),
        )
        .await?;

    debug!(
        rejected = report.expand.rejected,
        written = report.written,
        "done"
    );
    Ok(())
}
