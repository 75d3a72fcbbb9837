//! # Command Layer
//!
//! The core business logic of ReCircle. Each operation lives in its own
//! submodule as a pure `run` function over a generic store.
//!
//! ## Role and Responsibilities
//!
//! Commands implement the actual logic for each user action:
//! - Operate on [`crate::model::ListingRecord`] and friends
//! - Return structured [`CmdResult`] with affected records and messages
//! - Are completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: no stdout, dialogs, or navigation
//! - **User interaction**: confirmation dialogs are the UI's job; commands
//!   that need one expose a `preview` (see [`claim`])
//! - **Rendering**: messages are structured data, the UI decides how to show
//!   them
//!
//! ## Command Modules
//!
//! - [`list`]: merged listing for screen population, with status/search filters
//! - [`create`]: validate and append a new record
//! - [`update`]: patch an existing record by id
//! - [`claim`]: the donation claim transition (`not-claimed` → `claimed`)
//! - [`delete`]: remove a record by id
//! - [`seed`]: explicit first-access seeding policy
//!
//! ## Testing Strategy
//!
//! This is where the lion's share of testing lives. Command tests use
//! [`crate::store::MemBackend`] to avoid filesystem dependencies and verify
//! logic branches, edge cases, and `CmdResult` contents.

use crate::model::ListingRecord;
use serde::Serialize;

pub mod claim;
pub mod create;
pub mod delete;
pub mod list;
pub mod seed;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured command output for the presentation layer.
///
/// - `affected_records`: records a mutation touched
/// - `listed_records`: records to display
/// - `messages`: leveled notices; the UI decides whether they become toasts,
///   banners, or dialog text
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<ListingRecord>,
    pub listed_records: Vec<ListingRecord>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_records(mut self, records: Vec<ListingRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_affected_records(mut self, records: Vec<ListingRecord>) -> Self {
        self.affected_records = records;
        self
    }
}
