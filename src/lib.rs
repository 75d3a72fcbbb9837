//! # ReCircle Store Architecture
//!
//! ReCircle's persistence core is a **UI-agnostic library**. The mobile screens
//! (forms, lists, detail views) are clients of this crate; nothing in here knows
//! about rendering, navigation, or dialogs.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Presentation (external: screens, navigation, dialogs)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic: list, create, update, claim, …      │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StorageBackend trait (raw slot I/O)                      │
//! │  - ListingStore: seed / merge / patch / delete semantics    │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: One Store, One Convention
//!
//! Every collection in the app (business donations, wholesale listings,
//! donation products, selling products) follows the same convention:
//! read the whole sequence, reconcile with injected seed data by id,
//! mutate in memory, write the whole sequence back. That convention lives
//! in exactly one place, [`store::listing_store::ListingStore`], so the
//! dedup and patch invariants hold uniformly for every screen.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! `Result<CmdResult>`, and never assumes a terminal, a device, or a UI
//! toolkit. Failures surface as [`error::RecircleError`]; the presentation
//! layer decides how to show them.

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod seeds;
pub mod store;

pub use api::RecircleApi;
pub use error::{RecircleError, Result};
pub use model::{Collection, ListingRecord, ListingStatus, RecordPatch};
