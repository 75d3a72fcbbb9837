//! # Storage Layer
//!
//! This module defines the storage abstraction for ReCircle. The
//! [`backend::StorageBackend`] trait handles raw slot I/O; the
//! [`listing_store::ListingStore`] on top of it owns the semantics every
//! screen shares.
//!
//! ## The Convention
//!
//! Each collection is one durable slot holding a JSON array of records.
//! Every operation is a whole-collection read-modify-write:
//!
//! 1. **Load**: read the slot, deserialize; absent or malformed ⇒ empty.
//! 2. **Seed**: on first access only, write the injected defaults verbatim.
//! 3. **Merge-on-load**: persisted records first, then defaults whose id is
//!    not already present.
//! 4. **Mutate**: patch or remove by id in memory, write the whole sequence
//!    back atomically.
//!
//! ## Failure Philosophy
//!
//! - **Reads fail soft**: corrupted payloads become empty collections, with
//!   a warning in the log. Availability over visibility.
//! - **Writes fail loud**: I/O and encode errors propagate as
//!   [`crate::error::RecircleError`]; nothing is retried.
//!
//! ## Emptiness vs. Absence
//!
//! An emptied collection persists as `[]`, never as an erased slot. The
//! distinction matters: `ensure_seeded` re-seeds an absent slot, but must
//! leave an explicitly emptied one alone.
//!
//! ## Storage Layout (filesystem backend)
//!
//! ```text
//! <data dir>/
//! ├── business-donations.json
//! ├── business-listings.json
//! ├── donation-products.json
//! ├── selling-products.json
//! └── draft-product.json       # in-progress form snapshot
//! ```
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production, one file per slot, atomic writes.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.

pub mod backend;
pub mod fs_backend;
pub mod listing_store;
pub mod mem_backend;

pub use backend::StorageBackend;
pub use fs_backend::FsBackend;
pub use listing_store::ListingStore;
pub use mem_backend::MemBackend;
