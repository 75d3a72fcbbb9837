use crate::error::Result;

/// Abstract interface for raw slot I/O.
/// This trait handles the "how" of storage (filesystem vs memory), while
/// [`super::listing_store::ListingStore`] handles the "what" (seeding,
/// merge-on-load, patching, deletion).
///
/// A slot holds one opaque serialized payload, usually a JSON array of
/// records keyed by a collection name. Backends make no attempt to parse it.
pub trait StorageBackend {
    /// Read the raw payload for a slot.
    /// Returns `Ok(None)` if the slot has never been written — callers use
    /// this to distinguish "never seeded" from "exists, zero records".
    /// Returns `Err` only on actual I/O errors (permissions, disk failure).
    fn read_raw(&self, key: &str) -> Result<Option<String>>;

    /// Replace the slot's payload in full.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_raw(&self, key: &str, payload: &str) -> Result<()>;

    /// Drop the slot entirely, returning it to the never-written state.
    /// Removing a nonexistent slot is a no-op.
    fn remove_raw(&self, key: &str) -> Result<()>;
}
