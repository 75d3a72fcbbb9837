use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Collection, ListingRecord, ListingStatus};
use crate::store::{ListingStore, StorageBackend};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    /// Records still up for grabs.
    Available,
    /// Past donations, already claimed.
    Claimed,
}

#[derive(Debug, Clone)]
pub struct ListingFilter {
    pub status: StatusFilter,
    /// Literal case-insensitive substring match on the title. No ranking.
    pub search_term: Option<String>,
}

impl Default for ListingFilter {
    fn default() -> Self {
        Self {
            status: StatusFilter::All,
            search_term: None,
        }
    }
}

impl ListingFilter {
    fn matches(&self, record: &ListingRecord) -> bool {
        let status_ok = match self.status {
            StatusFilter::All => true,
            StatusFilter::Available => record.status == ListingStatus::NotClaimed,
            StatusFilter::Claimed => record.status == ListingStatus::Claimed,
        };
        if !status_ok {
            return false;
        }
        match &self.search_term {
            Some(term) => record
                .title
                .to_lowercase()
                .contains(&term.to_lowercase()),
            None => true,
        }
    }
}

/// The standard screen-population read: merge persisted records with the
/// injected defaults, then filter.
pub fn run<B: StorageBackend>(
    store: &ListingStore<B>,
    collection: Collection,
    defaults: &[ListingRecord],
    filter: &ListingFilter,
) -> Result<CmdResult> {
    let records = store.load_merged(collection, defaults)?;
    let listed: Vec<ListingRecord> = records.into_iter().filter(|r| filter.matches(r)).collect();
    Ok(CmdResult::default().with_listed_records(listed))
}
