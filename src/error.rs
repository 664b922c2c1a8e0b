//! Error types for the folder synchronization system.
//!
//! Configuration errors are fatal and reported before the first cycle runs.
//! Comparison errors force a copy attempt instead of propagating. Per-entry
//! I/O failures during copy or removal are not modeled here at all: they are
//! logged at the point of the operation and the traversal continues.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration validation errors, fatal before the loop starts
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Directory {0} does not exist.")]
    NotADirectory(PathBuf),

    #[error("File {0} does not exist.")]
    NotAFile(PathBuf),

    #[error("Synchronization interval must be a positive number.")]
    NonPositiveInterval,

    #[error("Synchronization interval is too large.")]
    IntervalTooLarge,

    #[error("Log file {path} is not writable: {source}")]
    LogNotWritable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid path {path}: {source}")]
    InvalidPath {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Content comparison errors
#[derive(Debug, Error)]
pub enum CompareError {
    #[error("Cannot read {path} for comparison: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors surfaced by the cycle driver itself (root listing failures).
/// Per-entry failures inside a cycle never reach this type.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error("Failed to list directory {path}: {source}")]
    ListFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}
