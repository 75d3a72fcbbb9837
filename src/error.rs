use thiserror::Error;

/// Crate-wide error type.
///
/// Malformed persisted data is deliberately *not* represented here: the read
/// path recovers from it by treating the collection as empty (see
/// [`crate::store::listing_store::ListingStore::load`]), so screens stay
/// usable even when prior data is corrupted. `Serialization` only occurs on
/// the encode side of a write.
#[derive(Error, Debug)]
pub enum RecircleError {
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Invalid record: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, RecircleError>;
