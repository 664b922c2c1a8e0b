//! Validated synchronization configuration.
//!
//! All configuration comes from the command line and is validated once at
//! startup; validation failure is fatal before any cycle runs.

use crate::error::ConfigError;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Validated configuration for the synchronization loop
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Source tree root; never modified
    pub source_root: PathBuf,
    /// Replica tree root; mutated to match the source
    pub replica_root: PathBuf,
    /// Pause between cycles
    pub interval: Duration,
    /// Log file, appended to by the combined sink
    pub log_path: PathBuf,
}

impl SyncConfig {
    /// Validate raw arguments into a usable configuration.
    ///
    /// Both roots must exist as directories, the interval must be a finite
    /// positive number of seconds, and the log path must name an existing
    /// writable file.
    pub fn new(
        source_root: PathBuf,
        replica_root: PathBuf,
        interval_seconds: f64,
        log_path: PathBuf,
    ) -> Result<Self, ConfigError> {
        let source_root = canonical_dir(source_root)?;
        let replica_root = canonical_dir(replica_root)?;

        if !interval_seconds.is_finite() || interval_seconds <= 0.0 {
            return Err(ConfigError::NonPositiveInterval);
        }
        // Finite and positive is not enough: Duration overflows somewhere
        // above u64::MAX seconds.
        let interval = Duration::try_from_secs_f64(interval_seconds)
            .map_err(|_| ConfigError::IntervalTooLarge)?;

        if !log_path.is_file() {
            return Err(ConfigError::NotAFile(log_path));
        }
        // Prove writability now rather than on the first log record.
        OpenOptions::new()
            .append(true)
            .open(&log_path)
            .map_err(|e| ConfigError::LogNotWritable {
                path: log_path.clone(),
                source: e,
            })?;

        Ok(Self {
            source_root,
            replica_root,
            interval,
            log_path,
        })
    }
}

fn canonical_dir(path: PathBuf) -> Result<PathBuf, ConfigError> {
    if !path.is_dir() {
        return Err(ConfigError::NotADirectory(path));
    }
    // dunce keeps Windows paths free of the \\?\ prefix.
    dunce::canonicalize(&path).map_err(|e| ConfigError::InvalidPath { path, source: e })
}

/// Path to the stop-signal file for a source root.
pub fn stop_signal_path(source_root: &Path) -> PathBuf {
    source_root.join(crate::runner::STOP_SIGNAL_FILE)
}
