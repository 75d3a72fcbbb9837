use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Collection, RecordPatch};
use crate::store::{ListingStore, StorageBackend};

/// Shallow-merge `patch` into the record with the given id.
///
/// `RecordNotFound` propagates distinctly so the caller can navigate away
/// rather than show stale data. An empty patch is a no-op.
pub fn run<B: StorageBackend>(
    store: &ListingStore<B>,
    collection: Collection,
    id: &str,
    patch: &RecordPatch,
) -> Result<CmdResult> {
    if patch.is_empty() {
        return Ok(CmdResult::default());
    }

    let updated = store.upsert_patch(collection, id, patch)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Listing updated: {}",
        updated.title
    )));
    result.affected_records.push(updated);
    Ok(result)
}
