//! Dirsync: One-Way Periodic Folder Synchronization
//!
//! Mirrors a source directory tree onto a replica directory tree: everything
//! present in the source is copied or updated in the replica, everything
//! present only in the replica is removed. Synchronization runs periodically
//! until a stop-signal file is detected in the source root.

pub mod cli;
pub mod compare;
pub mod config;
pub mod cycle;
pub mod error;
pub mod logging;
pub mod prune;
pub mod reconcile;
pub mod runner;
