//! CLI parse: clap types for dirsync. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// Dirsync CLI - One-way periodic folder synchronization
#[derive(Parser)]
#[command(name = "dirsync")]
#[command(about = "Synchronize a replica folder with a source folder, one-way and periodically")]
pub struct Cli {
    /// Source folder path
    pub source: PathBuf,

    /// Replica folder path
    pub replica: PathBuf,

    /// Synchronization interval in seconds (positive number)
    pub interval: f64,

    /// Log file path (existing file)
    pub log_file: PathBuf,

    /// Enable diagnostic output on stderr
    #[arg(long)]
    pub verbose: bool,
}
