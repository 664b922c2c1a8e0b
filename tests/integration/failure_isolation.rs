//! Per-entry failures must not abort the rest of a cycle.

use dirsync::cycle::run_cycle;
use dirsync::logging::MemorySink;
use std::fs;
use tempfile::TempDir;

/// One bad entry among 100: the other 99 are copied and exactly one failure
/// is logged. The bad entry is a dangling symlink, which is neither a file
/// nor a directory and therefore cannot be copied.
#[cfg(unix)]
#[test]
fn test_one_bad_entry_among_100() {
    let source = TempDir::new().unwrap();
    let replica = TempDir::new().unwrap();

    for i in 0..99 {
        fs::write(source.path().join(format!("file_{:02}.txt", i)), "content").unwrap();
    }
    std::os::unix::fs::symlink("no-such-target", source.path().join("file_99.txt")).unwrap();

    let sink = MemorySink::new();
    run_cycle(source.path(), replica.path(), &sink).unwrap();

    for i in 0..99 {
        assert!(
            replica.path().join(format!("file_{:02}.txt", i)).is_file(),
            "file_{:02}.txt missing from replica",
            i
        );
    }
    assert!(!replica.path().join("file_99.txt").exists());
    assert_eq!(sink.error_messages().len(), 1);
    assert!(sink.error_messages()[0].contains("file_99.txt"));
}

/// Permission-denied variant of the same property. Skipped when running with
/// privileges that bypass file modes.
#[cfg(unix)]
#[test]
fn test_unreadable_file_logged_others_copied() {
    use std::os::unix::fs::PermissionsExt;

    let source = TempDir::new().unwrap();
    let replica = TempDir::new().unwrap();

    for i in 0..100 {
        fs::write(source.path().join(format!("file_{:02}.txt", i)), "content").unwrap();
    }
    let locked = source.path().join("file_50.txt");
    let mut perms = fs::metadata(&locked).unwrap().permissions();
    perms.set_mode(0o000);
    fs::set_permissions(&locked, perms).unwrap();

    if fs::File::open(&locked).is_ok() {
        // Privileged user; the mode does not deny anything.
        return;
    }

    let sink = MemorySink::new();
    run_cycle(source.path(), replica.path(), &sink).unwrap();

    for i in 0..100 {
        if i == 50 {
            continue;
        }
        assert!(replica.path().join(format!("file_{:02}.txt", i)).is_file());
    }
    assert!(!replica.path().join("file_50.txt").exists());
    assert_eq!(sink.error_messages().len(), 1);
    assert!(sink.error_messages()[0].contains("file_50.txt"));
}

/// A comparison failure forces a copy attempt instead of a silent skip; the
/// copy's own failure is reported independently.
#[cfg(unix)]
#[test]
fn test_unreadable_source_forces_copy_attempt() {
    use std::os::unix::fs::PermissionsExt;

    let source = TempDir::new().unwrap();
    let replica = TempDir::new().unwrap();

    let locked = source.path().join("a.txt");
    fs::write(&locked, "fresh").unwrap();
    fs::write(replica.path().join("a.txt"), "fresh").unwrap();
    let mut perms = fs::metadata(&locked).unwrap().permissions();
    perms.set_mode(0o000);
    fs::set_permissions(&locked, perms).unwrap();

    if fs::File::open(&locked).is_ok() {
        // Privileged user; the mode does not deny anything.
        return;
    }

    let sink = MemorySink::new();
    run_cycle(source.path(), replica.path(), &sink).unwrap();

    let errors = sink.error_messages();
    // One record for the failed comparison, one for the failed copy it forced.
    assert!(errors.iter().any(|m| m.contains("for comparison")));
    assert!(errors.iter().any(|m| m.contains("cannot be copied")));
    // The replica file was not silently dropped.
    assert!(replica.path().join("a.txt").exists());
}
