//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for the presentation layer (screens, dialogs),
//! regardless of which UI hosts the store.
//!
//! ## Role and Responsibilities
//!
//! The facade **dispatches** to the appropriate command function and
//! **returns structured types** (`Result<CmdResult>`). It carries no
//! business logic (that lives in `commands/*.rs`) and performs no
//! presentation work (no strings for display, no dialogs).
//!
//! ## Default Records Are Injected
//!
//! Screens that ship with sample data pass their defaults into `list` and
//! `seed` explicitly. The facade never bakes seed data in — tests supply
//! whatever seeds they need (see [`crate::seeds`] for the app's sets).
//!
//! ## Generic Over StorageBackend
//!
//! `RecircleApi<B: StorageBackend>` is generic over the raw storage:
//! - Production: `RecircleApi<FsBackend>`
//! - Testing: `RecircleApi<MemBackend>`
//!
//! This enables testing the full stack without touching the filesystem.

use crate::commands;
use crate::error::Result;
use crate::model::{Collection, ListingDraft, ListingRecord, RecordPatch};
use crate::store::{ListingStore, StorageBackend};

/// The main facade for ReCircle store operations.
pub struct RecircleApi<B: StorageBackend> {
    store: ListingStore<B>,
}

impl<B: StorageBackend> RecircleApi<B> {
    pub fn new(backend: B) -> Self {
        Self {
            store: ListingStore::with_backend(backend),
        }
    }

    /// Populate a listing screen: persisted records merged with `defaults`,
    /// then filtered.
    pub fn list(
        &self,
        collection: Collection,
        defaults: &[ListingRecord],
        filter: &ListingFilter,
    ) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, collection, defaults, filter)
    }

    /// Detail-screen lookup. `None` when the id is absent.
    pub fn get(&self, collection: Collection, id: &str) -> Result<Option<ListingRecord>> {
        self.store.get(collection, id)
    }

    /// Append a new record; the caller assigns the id beforehand
    /// (see [`ListingRecord::generate_id`]).
    pub fn create(
        &self,
        collection: Collection,
        record: ListingRecord,
    ) -> Result<commands::CmdResult> {
        commands::create::run(&self.store, collection, record)
    }

    pub fn update(
        &self,
        collection: Collection,
        id: &str,
        patch: &RecordPatch,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&self.store, collection, id, patch)
    }

    /// What a claim would affect, for the confirmation dialog.
    pub fn claim_preview(&self, collection: Collection, id: &str) -> Result<ListingRecord> {
        commands::claim::preview(&self.store, collection, id)
    }

    /// Perform the claim transition after the user confirmed.
    pub fn claim(&self, collection: Collection, id: &str) -> Result<commands::CmdResult> {
        commands::claim::run(&self.store, collection, id)
    }

    pub fn delete(&self, collection: Collection, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&self.store, collection, id)
    }

    /// First-access seeding; never overwrites existing state.
    pub fn seed(
        &self,
        collection: Collection,
        defaults: &[ListingRecord],
    ) -> Result<commands::CmdResult> {
        commands::seed::run(&self.store, collection, defaults)
    }

    pub fn save_draft(&self, draft: &ListingDraft) -> Result<()> {
        self.store.save_draft(draft)
    }

    pub fn load_draft(&self) -> Result<Option<ListingDraft>> {
        self.store.load_draft()
    }

    /// Read and clear the draft, for form screens resuming from it.
    pub fn take_draft(&self) -> Result<Option<ListingDraft>> {
        self.store.take_draft()
    }
}

pub use commands::list::{ListingFilter, StatusFilter};
pub use commands::{CmdMessage, CmdResult, MessageLevel};
