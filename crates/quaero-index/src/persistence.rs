//! Persistence layer for quaero-index.
//!
//! The full index (dimensionality, metric, and every record with its chunk
//! payload and vector) is serialized as a single JSON snapshot inside the
//! index directory. Writes go to a temporary file which is renamed over the
//! live file, so a concurrent or crashing reader never observes a torn
//! index.

use crate::distance::DistanceMetric;
use crate::error::{Error, Result};
use crate::types::IndexRecord;
use crate::VectorIndex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Name of the snapshot file inside the index directory.
const INDEX_FILE: &str = "index.json";

/// Name of the staging file used for atomic replacement.
const INDEX_TMP_FILE: &str = "index.json.tmp";

/// On-disk snapshot of a full index.
#[derive(Debug, Serialize, Deserialize)]
struct IndexSnapshot {
    dimensions: usize,
    metric: DistanceMetric,
    records: Vec<IndexRecord>,
}

/// Check whether a persisted index is present at `path`.
///
/// This only checks for the snapshot file; structural validity is verified
/// by [`load_index`], whose failure the caller treats as "no index".
pub fn index_exists(path: &Path) -> bool {
    path.join(INDEX_FILE).is_file()
}

/// Atomically write the full index to `{path}/index.json`.
///
/// The snapshot is first written to `{path}/index.json.tmp` and then
/// renamed into place, which is atomic on POSIX filesystems.
pub async fn save_index(path: &Path, index: &VectorIndex) -> Result<()> {
    tokio::fs::create_dir_all(path).await?;

    let snapshot = IndexSnapshot {
        dimensions: index.dimensions(),
        metric: index.metric(),
        records: index.export_records(),
    };

    let data = serde_json::to_vec(&snapshot)
        .map_err(|e| Error::Persistence(format!("Failed to serialize index: {}", e)))?;

    let tmp_path = path.join(INDEX_TMP_FILE);
    let final_path = path.join(INDEX_FILE);

    tokio::fs::write(&tmp_path, &data).await?;
    tokio::fs::rename(&tmp_path, &final_path).await?;

    info!(
        path = %final_path.display(),
        records = snapshot.records.len(),
        bytes = data.len(),
        "Saved index"
    );
    Ok(())
}

/// Load a persisted index from `{path}/index.json`.
///
/// Any missing file, malformed JSON, or record that contradicts the
/// declared dimensionality is an error; callers are expected to treat a
/// failed load as "no index" rather than propagate it.
pub async fn load_index(path: &Path) -> Result<VectorIndex> {
    let file_path = path.join(INDEX_FILE);

    let data = tokio::fs::read_to_string(&file_path).await?;
    let snapshot: IndexSnapshot = serde_json::from_str(&data)
        .map_err(|e| Error::Persistence(format!("Failed to parse index file: {}", e)))?;

    let count = snapshot.records.len();
    let index = VectorIndex::from_records(snapshot.dimensions, snapshot.metric, snapshot.records)?;

    debug!(path = %file_path.display(), records = count, "Loaded index");
    Ok(index)
}
