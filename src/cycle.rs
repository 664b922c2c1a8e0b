//! Cycle driver: one full synchronization pass over the tree pair.
//!
//! Runs the forward pass (create/update) before the reverse pass (delete), so
//! a path whose type changed is fully resolved before pruning inspects it.
//! Trivially-empty roots short-circuit to a single pass: an empty source
//! means prune everything, an empty replica means copy everything.

use crate::error::CycleError;
use crate::logging::EventSink;
use crate::prune::prune;
use crate::reconcile::reconcile;
use std::fs;
use std::path::Path;

/// Run one synchronization cycle.
///
/// Precondition: both roots exist and are directories (validated at startup).
/// A listing failure on a root is returned to the caller; per-entry failures
/// inside the passes are logged through the sink and never surface here.
pub fn run_cycle(
    source_root: &Path,
    replica_root: &Path,
    sink: &dyn EventSink,
) -> Result<(), CycleError> {
    let source_empty = is_dir_empty(source_root)?;
    let replica_empty = is_dir_empty(replica_root)?;

    if source_empty && replica_empty {
        return Ok(());
    }

    if source_empty {
        // Everything in the replica is an orphan.
        prune(source_root, replica_root, sink);
        return Ok(());
    }

    if replica_empty {
        // Everything in the source is missing from the replica.
        reconcile(source_root, replica_root, sink);
        return Ok(());
    }

    reconcile(source_root, replica_root, sink);
    prune(source_root, replica_root, sink);
    Ok(())
}

fn is_dir_empty(path: &Path) -> Result<bool, CycleError> {
    let mut entries = fs::read_dir(path).map_err(|e| CycleError::ListFailed {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(entries.next().is_none())
}
