//! Reverse pass: remove replica entries that no longer exist in the source.
//!
//! Walks the replica tree top-down after the forward pass has finished, so
//! any type conflict at a shared path has already been resolved in favor of
//! the source. Removal failures are logged and do not abort sibling
//! processing.

use crate::logging::EventSink;
use std::fs;
use std::path::Path;

/// Prune one directory level, recursing into directories that exist on both
/// sides.
///
/// Precondition: both arguments name existing directories.
pub fn prune(source_dir: &Path, replica_dir: &Path, sink: &dyn EventSink) {
    let entries = match fs::read_dir(replica_dir) {
        Ok(entries) => entries,
        Err(e) => {
            sink.error(format!(
                "Error while listing directory {}: {}.",
                replica_dir.display(),
                e
            ));
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                sink.error(format!(
                    "Error while listing directory {}: {}.",
                    replica_dir.display(),
                    e
                ));
                continue;
            }
        };

        let replica_path = entry.path();
        let source_path = source_dir.join(entry.file_name());

        if !source_path.exists() {
            if replica_path.is_dir() {
                remove_tree_logged(&replica_path, sink);
            } else {
                remove_file_logged(&replica_path, sink);
            }
        } else if replica_path.is_dir() {
            // Defensive: recurse whenever both names exist and the replica
            // side is a directory. The forward pass already made matching
            // names share a type.
            prune(&source_path, &replica_path, sink);
        }
        // A replica file with a same-named source entry was handled by the
        // forward pass.
    }
}

/// Remove one file (or symlink). Logs outcome.
pub(crate) fn remove_file_logged(path: &Path, sink: &dyn EventSink) {
    match fs::remove_file(path) {
        Ok(()) => sink.info(format!("File {} removed from replica", path.display())),
        Err(e) => sink.error(format!(
            "Error while removing file {}: {}. File cannot be removed.",
            path.display(),
            e
        )),
    }
}

/// Remove a directory and everything under it. Logs outcome.
pub(crate) fn remove_tree_logged(path: &Path, sink: &dyn EventSink) {
    match fs::remove_dir_all(path) {
        Ok(()) => sink.info(format!(
            "Directory {} and its contents removed from replica",
            path.display()
        )),
        Err(e) => sink.error(format!(
            "Error while removing directory {}: {}. Directory cannot be removed.",
            path.display(),
            e
        )),
    }
}
