use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Collection;
use crate::store::{ListingStore, StorageBackend};

/// Remove a record by id. Deleting a record that is already gone is a no-op
/// with an informational message, never a failure.
pub fn run<B: StorageBackend>(
    store: &ListingStore<B>,
    collection: Collection,
    id: &str,
) -> Result<CmdResult> {
    let existing = store.get(collection, id)?;
    store.remove(collection, id)?;

    let mut result = CmdResult::default();
    match existing {
        Some(record) => {
            result.add_message(CmdMessage::success(format!(
                "Listing deleted: {}",
                record.title
            )));
            result.affected_records.push(record);
        }
        None => {
            result.add_message(CmdMessage::info("Nothing to delete."));
        }
    }
    Ok(result)
}
