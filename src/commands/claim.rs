use crate::commands::{CmdMessage, CmdResult};
use crate::error::{RecircleError, Result};
use crate::model::{Collection, ListingRecord, ListingStatus, RecordPatch};
use crate::store::{ListingStore, StorageBackend};

/// Returns the record a claim would affect, without mutating anything.
///
/// Use this to populate the confirmation dialog before calling `run`.
/// Fails when the record is missing or already claimed, so the UI can
/// refuse up front instead of after confirmation.
pub fn preview<B: StorageBackend>(
    store: &ListingStore<B>,
    collection: Collection,
    id: &str,
) -> Result<ListingRecord> {
    let record = store
        .get(collection, id)?
        .ok_or_else(|| RecircleError::RecordNotFound(id.to_string()))?;
    if record.status == ListingStatus::Claimed {
        return Err(RecircleError::Invalid(format!(
            "already claimed: {}",
            record.title
        )));
    }
    Ok(record)
}

/// Marks a donation as claimed: `not-claimed` → `claimed`.
///
/// The transition is terminal; there is no un-claim. This function does NOT
/// prompt for confirmation — the UI layer calls `preview()`, shows its
/// dialog, then calls this.
pub fn run<B: StorageBackend>(
    store: &ListingStore<B>,
    collection: Collection,
    id: &str,
) -> Result<CmdResult> {
    // Re-validates the transition; the store may have moved since preview.
    preview(store, collection, id)?;

    let claimed = store.upsert_patch(
        collection,
        id,
        &RecordPatch::new().with_status(ListingStatus::Claimed),
    )?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Successfully claimed: {}",
        claimed.title
    )));
    result.affected_records.push(claimed);
    Ok(result)
}
