//! Dirsync CLI Binary
//!
//! Validates the configuration, opens the combined console+file log sink, and
//! runs synchronization cycles until the stop signal is detected. Exits 0 on
//! a graceful stop, non-zero on invalid configuration.

use anyhow::Context;
use clap::Parser;
use dirsync::cli::Cli;
use dirsync::config::SyncConfig;
use dirsync::logging::{init_diagnostics, CombinedSink};
use dirsync::runner::Runner;
use std::process;
use tracing::info;

fn main() {
    let cli = Cli::parse();

    init_diagnostics(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = SyncConfig::new(cli.source, cli.replica, cli.interval, cli.log_file)
        .context("Invalid configuration")?;

    let sink = CombinedSink::open(&config.log_path).with_context(|| {
        format!(
            "Failed to open log file {} for writing",
            config.log_path.display()
        )
    })?;

    info!(
        source = %config.source_root.display(),
        replica = %config.replica_root.display(),
        interval_secs = config.interval.as_secs_f64(),
        "configuration validated, entering synchronization loop"
    );

    Runner::new(&config, &sink).run();
    Ok(())
}
