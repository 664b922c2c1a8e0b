//! Periodic synchronization loop.
//!
//! One cycle runs to completion, the thread sleeps for the configured
//! interval, and the loop repeats. The stop signal is checked only at cycle
//! boundaries: a file named `stop_sync.txt` in the source root causes a
//! graceful return before the next cycle starts. A cycle already in progress
//! is never interrupted.

use crate::config::{stop_signal_path, SyncConfig};
use crate::cycle::run_cycle;
use crate::logging::EventSink;
use std::thread;

/// File name that requests a graceful stop when present in the source root
pub const STOP_SIGNAL_FILE: &str = "stop_sync.txt";

/// Outcome of one loop step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// A full cycle ran (possibly with logged per-entry failures)
    Completed,
    /// The stop signal was detected; no reconciliation or pruning happened
    StopRequested,
}

/// Drives repeated synchronization cycles over a validated configuration.
pub struct Runner<'a> {
    config: &'a SyncConfig,
    sink: &'a dyn EventSink,
}

impl<'a> Runner<'a> {
    pub fn new(config: &'a SyncConfig, sink: &'a dyn EventSink) -> Self {
        Self { config, sink }
    }

    /// One loop step: check the stop signal, then run a cycle.
    ///
    /// Split out from [`run`](Self::run) so tests can drive the loop without
    /// sleeping.
    pub fn tick(&self) -> Tick {
        let stop_path = stop_signal_path(&self.config.source_root);
        if stop_path.exists() {
            self.sink.info(format!(
                "Synchronization stopped. Stop signal detected: {}.",
                stop_path.display()
            ));
            return Tick::StopRequested;
        }

        self.sink.info("Synchronization started.");
        if let Err(e) = run_cycle(&self.config.source_root, &self.config.replica_root, self.sink) {
            self.sink
                .error(format!("Synchronization cycle failed: {}.", e));
        }
        self.sink.info("Synchronization finished.");
        Tick::Completed
    }

    /// Run cycles until the stop signal is detected.
    pub fn run(&self) {
        loop {
            match self.tick() {
                Tick::StopRequested => return,
                Tick::Completed => thread::sleep(self.config.interval),
            }
        }
    }
}
