use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Collection, ListingRecord};
use crate::store::{ListingStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &ListingStore<B>,
    collection: Collection,
    record: ListingRecord,
) -> Result<CmdResult> {
    store.create(collection, record.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Listing created: {}",
        record.title
    )));
    result.affected_records.push(record);
    Ok(result)
}
