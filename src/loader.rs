//! FileLoader: read contents for every inventoried file
//!
//! Skips files matching the configured ignore globs, then reads each
//! remaining path under the project root. A file that went missing or
//! cannot be read since the scan is a recoverable condition: it is logged
//! and omitted, never aborting the run. The result is an ordered
//! path -> content map that is a strict subset of the inventory.

use crate::errors::GrouperError;
use crate::models::FileRecord;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// Compile glob patterns into a matcher. `*` stays within a path segment;
/// `**` crosses separators.
pub fn build_globset(patterns: &[String]) -> Result<GlobSet, GrouperError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|e| GrouperError::Config(format!("bad glob pattern '{pattern}': {e}")))?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| GrouperError::Config(format!("cannot compile glob set: {e}")))
}

/// Read contents for every record not excluded by `ignore`.
pub fn load_files(
    project_root: &Path,
    records: &[FileRecord],
    ignore: &GlobSet,
) -> BTreeMap<String, String> {
    let mut loaded = BTreeMap::new();
    for record in records {
        if ignore.is_match(&record.path) {
            debug!("ignoring {} (matched ignore pattern)", record.path);
            continue;
        }
        let abs = project_root.join(&record.path);
        match std::fs::read_to_string(&abs) {
            Ok(content) => {
                loaded.insert(record.path.clone(), content);
            }
            Err(e) => {
                warn!("skipping unreadable file {}: {e}", abs.display());
            }
        }
    }
    debug!(
        "loaded {} of {} inventoried files",
        loaded.len(),
        records.len()
    );
    loaded
}
