//! File content comparison.
//!
//! Equality is decided by content alone: two paths are equal only if both are
//! regular files whose full byte sequences match. Metadata (timestamps,
//! permissions) never participates in the decision. The single permitted
//! shortcut is the negative one: files of different length cannot be equal.
//! Equal lengths always fall through to a full chunked read of both files, so
//! a genuine content difference is never missed. No comparison result is
//! cached across calls.

use crate::error::CompareError;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

const COMPARE_CHUNK_SIZE: usize = 64 * 1024;

/// Returns true only if both paths are regular files with identical content.
///
/// A path that exists but is not a regular file (directory, symlink target
/// removed, special file) makes the pair unequal without error. An unreadable
/// file is a [`CompareError::Unreadable`] naming that path; callers treat it
/// as "not equal" and attempt the copy, whose own failure is reported
/// independently.
pub fn entries_equal(source: &Path, replica: &Path) -> Result<bool, CompareError> {
    if !source.is_file() || !replica.is_file() {
        return Ok(false);
    }

    let source_meta = source.metadata().map_err(|e| CompareError::Unreadable {
        path: source.to_path_buf(),
        source: e,
    })?;
    let replica_meta = replica.metadata().map_err(|e| CompareError::Unreadable {
        path: replica.to_path_buf(),
        source: e,
    })?;

    // Different length proves different content.
    if source_meta.len() != replica_meta.len() {
        return Ok(false);
    }

    contents_equal(source, replica)
}

fn contents_equal(source: &Path, replica: &Path) -> Result<bool, CompareError> {
    let mut source_reader = open_reader(source)?;
    let mut replica_reader = open_reader(replica)?;

    let mut source_buf = vec![0u8; COMPARE_CHUNK_SIZE];
    let mut replica_buf = vec![0u8; COMPARE_CHUNK_SIZE];

    loop {
        let source_read = read_full(&mut source_reader, &mut source_buf, source)?;
        let replica_read = read_full(&mut replica_reader, &mut replica_buf, replica)?;

        if source_read != replica_read {
            // File changed size mid-comparison; certainly not equal.
            return Ok(false);
        }
        if source_read == 0 {
            return Ok(true);
        }
        if source_buf[..source_read] != replica_buf[..replica_read] {
            return Ok(false);
        }
    }
}

fn open_reader(path: &Path) -> Result<BufReader<File>, CompareError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| CompareError::Unreadable {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Read until the buffer is full or EOF is reached.
fn read_full(
    reader: &mut BufReader<File>,
    buf: &mut [u8],
    path: &Path,
) -> Result<usize, CompareError> {
    let mut total = 0;
    while total < buf.len() {
        let n = reader
            .read(&mut buf[total..])
            .map_err(|e| CompareError::Unreadable {
                path: path.to_path_buf(),
                source: e,
            })?;
        if n == 0 {
            break;
        }
        total += n;
    }
    Ok(total)
}
