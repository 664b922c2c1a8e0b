//! Log Sink
//!
//! Synchronization progress is reported through an explicit [`EventSink`]
//! passed into the reconciliation and pruning calls, rather than through
//! process-global logger state. The production [`CombinedSink`] writes each
//! record simultaneously to the console and to the configured log file in the
//! form `<timestamp>::<componentName>::<level>::<message>`; tests substitute
//! a [`MemorySink`] and assert on the emitted records directly.
//!
//! Developer diagnostics are separate and optional: `init_diagnostics` wires
//! the `tracing` crate to stderr, filtered by the `DIRSYNC_LOG` environment
//! variable.

use chrono::Local;
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Component name used in every log line
pub const COMPONENT: &str = "dirsync";

/// Severity of a log record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Error => "ERROR",
        }
    }
}

/// A single emitted log record
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: Level,
    pub message: String,
}

/// Destination for synchronization log records
pub trait EventSink: Send + Sync {
    fn emit(&self, record: LogRecord);
}

impl<'a> dyn EventSink + 'a {
    /// Emit an informational record
    pub fn info(&self, message: impl Into<String>) {
        self.emit(LogRecord {
            level: Level::Info,
            message: message.into(),
        });
    }

    /// Emit an error record
    pub fn error(&self, message: impl Into<String>) {
        self.emit(LogRecord {
            level: Level::Error,
            message: message.into(),
        });
    }
}

/// Format a record as a `<timestamp>::<componentName>::<level>::<message>` line
fn format_line(record: &LogRecord) -> String {
    format!(
        "{}::{}::{}::{}",
        Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
        COMPONENT,
        record.level.as_str(),
        record.message
    )
}

/// Production sink: every record goes to stdout and to the log file.
///
/// The file is opened in append mode once at startup; the handle is shared
/// behind a mutex so the sink can be used from anywhere in the process.
pub struct CombinedSink {
    file: Mutex<File>,
}

impl CombinedSink {
    /// Open the sink against an existing log file.
    pub fn open(log_path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().append(true).open(log_path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl EventSink for CombinedSink {
    fn emit(&self, record: LogRecord) {
        match record.level {
            Level::Info => tracing::info!(target: "dirsync", "{}", record.message),
            Level::Error => tracing::error!(target: "dirsync", "{}", record.message),
        }

        let line = format_line(&record);
        // A failed write to either destination must not abort
        // synchronization; the console can vanish mid-run (closed pipe).
        write_line(io::stdout(), &line);

        let mut file = self.file.lock();
        if let Err(e) = writeln!(file, "{}", line) {
            eprintln!("dirsync: failed to write log file: {}", e);
        }
    }
}

/// Write one line, discarding I/O failures.
fn write_line(mut writer: impl Write, line: &str) {
    let _ = writeln!(writer, "{}", line);
}

/// In-memory sink for tests: collects records for assertion.
#[derive(Default)]
pub struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records emitted so far
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    /// Messages of all informational records
    pub fn info_messages(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.level == Level::Info)
            .map(|r| r.message.clone())
            .collect()
    }

    /// Messages of all error records
    pub fn error_messages(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.level == Level::Error)
            .map(|r| r.message.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl EventSink for MemorySink {
    fn emit(&self, record: LogRecord) {
        self.records.lock().push(record);
    }
}

/// Initialize developer diagnostics on stderr.
///
/// Filter priority: `DIRSYNC_LOG` environment variable, then `info` when
/// `verbose` is set, otherwise `off`. Safe to call more than once; later
/// calls are ignored.
pub fn init_diagnostics(verbose: bool) {
    let filter = EnvFilter::try_from_env("DIRSYNC_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "info" } else { "off" }));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
