use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Collection, ListingRecord};
use crate::store::{ListingStore, StorageBackend};

/// Explicit first-access seeding. Idempotent: a collection that already has
/// any persisted value — including an emptied one — is left untouched.
pub fn run<B: StorageBackend>(
    store: &ListingStore<B>,
    collection: Collection,
    defaults: &[ListingRecord],
) -> Result<CmdResult> {
    store.ensure_seeded(collection, defaults)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Collection ready: {}", collection)));
    Ok(result)
}
