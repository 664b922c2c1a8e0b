//! Stop-signal detection at cycle boundaries.

use dirsync::config::{stop_signal_path, SyncConfig};
use dirsync::logging::MemorySink;
use dirsync::runner::{Runner, Tick};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture() -> (TempDir, SyncConfig) {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("source");
    let replica = temp_dir.path().join("replica");
    let log = temp_dir.path().join("sync.log");
    fs::create_dir(&source).unwrap();
    fs::create_dir(&replica).unwrap();
    fs::write(&log, "").unwrap();
    let config = SyncConfig::new(source, replica, 0.01, log).unwrap();
    (temp_dir, config)
}

#[test]
fn test_stop_signal_checked_before_any_work() {
    let (_guard, config) = fixture();
    fs::write(config.source_root.join("data.txt"), "never copied").unwrap();
    fs::write(config.replica_root.join("orphan.txt"), "never removed").unwrap();
    fs::write(stop_signal_path(&config.source_root), "").unwrap();

    let sink = MemorySink::new();
    assert_eq!(Runner::new(&config, &sink).tick(), Tick::StopRequested);

    assert!(!config.replica_root.join("data.txt").exists());
    assert!(config.replica_root.join("orphan.txt").exists());
    assert_eq!(sink.records().len(), 1);
    assert!(sink.info_messages()[0].contains("Synchronization stopped."));
}

#[test]
fn test_stop_signal_appearing_between_cycles() {
    let (_guard, config) = fixture();
    fs::write(config.source_root.join("data.txt"), "copied once").unwrap();

    let sink = MemorySink::new();
    let runner = Runner::new(&config, &sink);

    // First tick synchronizes normally.
    assert_eq!(runner.tick(), Tick::Completed);
    assert!(config.replica_root.join("data.txt").exists());

    // Stop signal dropped in before the next boundary.
    fs::write(stop_signal_path(&config.source_root), "").unwrap();
    assert_eq!(runner.tick(), Tick::StopRequested);
}

/// The stop file lives in the source tree, so until it is detected it is
/// also mirrored like any other file. Detection wins at the next boundary.
#[test]
fn test_stop_signal_message_names_the_file() {
    let (_guard, config) = fixture();
    let stop = stop_signal_path(&config.source_root);
    fs::write(&stop, "").unwrap();

    let sink = MemorySink::new();
    Runner::new(&config, &sink).run();

    let message = &sink.info_messages()[0];
    assert!(message.contains(&stop.display().to_string()));
    assert_eq!(stop, PathBuf::from(&config.source_root).join("stop_sync.txt"));
}
