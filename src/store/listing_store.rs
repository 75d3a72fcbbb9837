use super::backend::StorageBackend;
use crate::error::{RecircleError, Result};
use crate::model::{Collection, ListingDraft, ListingRecord, RecordPatch};
use log::{debug, warn};
use std::collections::HashSet;

/// Storage slot for the single in-progress form draft.
const DRAFT_KEY: &str = "draft-product";

/// The collection-store convention shared by every screen: read a whole
/// collection, reconcile with seed data by id, mutate in memory, write the
/// whole collection back.
///
/// Centralizing it here guarantees the merge/dedup/patch invariants hold
/// uniformly instead of being re-implemented per screen.
///
/// Not safe under concurrent writers to one collection — last writer wins.
/// Acceptable for a single-device, single-user local store with one logical
/// writer per user action.
pub struct ListingStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> ListingStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// Load the persisted records for a collection.
    ///
    /// Absent slot, empty payload, and malformed payload all come back as an
    /// empty sequence. Malformed data is logged and dropped rather than
    /// propagated, so screens stay usable even when prior data is corrupted.
    /// (Older app builds sometimes wrote an empty string for an emptied
    /// collection; that parses as "zero records" here too.)
    pub fn load(&self, collection: Collection) -> Result<Vec<ListingRecord>> {
        let raw = match self.backend.read_raw(collection.key())? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        match serde_json::from_str(&raw) {
            Ok(records) => Ok(records),
            Err(err) => {
                warn!("{}: dropping malformed payload: {}", collection, err);
                Ok(Vec::new())
            }
        }
    }

    /// Seed a collection on first access. First-call-wins: any existing
    /// value, including an explicitly empty one, is left untouched.
    pub fn ensure_seeded(&self, collection: Collection, defaults: &[ListingRecord]) -> Result<()> {
        if self.backend.read_raw(collection.key())?.is_some() {
            return Ok(());
        }
        debug!("{}: seeding {} default records", collection, defaults.len());
        self.write_collection(collection, defaults)
    }

    /// The standard read path for screens that ship with sample data:
    /// persisted records first, then the defaults whose id is not already
    /// present, each source keeping its internal order.
    ///
    /// The merged sequence never contains two records with one id. Older
    /// builds appended to collections blindly, so a persisted payload may
    /// itself carry duplicates; the first occurrence wins and the rest are
    /// dropped with a warning.
    pub fn load_merged(
        &self,
        collection: Collection,
        defaults: &[ListingRecord],
    ) -> Result<Vec<ListingRecord>> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut records: Vec<ListingRecord> = Vec::new();
        for record in self.load(collection)? {
            if seen.insert(record.id.clone()) {
                records.push(record);
            } else {
                warn!("{}: dropping duplicate record id {}", collection, record.id);
            }
        }
        let fresh: Vec<ListingRecord> = defaults
            .iter()
            .filter(|d| !seen.contains(d.id.as_str()))
            .cloned()
            .collect();
        records.extend(fresh);
        Ok(records)
    }

    /// Look up one record by id.
    pub fn get(&self, collection: Collection, id: &str) -> Result<Option<ListingRecord>> {
        let records = self.load(collection)?;
        Ok(records.into_iter().find(|r| r.id == id))
    }

    /// Append a new record. The id is assigned by the caller and must be
    /// unique within the collection.
    pub fn create(&self, collection: Collection, record: ListingRecord) -> Result<()> {
        record.validate()?;
        let mut records = self.load(collection)?;
        if records.iter().any(|r| r.id == record.id) {
            return Err(RecircleError::Invalid(format!(
                "duplicate id in {}: {}",
                collection, record.id
            )));
        }
        debug!("{}: creating record {}", collection, record.id);
        records.push(record);
        self.write_collection(collection, &records)
    }

    /// Shallow-merge a patch into the record with the given id and persist
    /// the whole collection.
    ///
    /// If the id is absent, nothing is written back and `RecordNotFound` is
    /// returned so the caller can navigate away instead of showing stale
    /// data. The patched record must still validate: a patch cannot drive a
    /// record into a state `create` would have rejected.
    pub fn upsert_patch(
        &self,
        collection: Collection,
        id: &str,
        patch: &RecordPatch,
    ) -> Result<ListingRecord> {
        let mut records = self.load(collection)?;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| RecircleError::RecordNotFound(id.to_string()))?;
        patch.apply(record);
        record.validate()?;
        let updated = record.clone();
        debug!("{}: updating record {}", collection, id);
        self.write_collection(collection, &records)?;
        Ok(updated)
    }

    /// Remove the record with the given id. Removing a nonexistent id is a
    /// no-op, not a failure.
    ///
    /// An emptied collection is persisted as a valid empty sequence, so
    /// later loads see "exists, zero records" rather than "never seeded".
    pub fn remove(&self, collection: Collection, id: &str) -> Result<()> {
        let mut records = self.load(collection)?;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            debug!("{}: remove of absent record {} ignored", collection, id);
            return Ok(());
        }
        debug!("{}: removing record {}", collection, id);
        self.write_collection(collection, &records)
    }

    /// Persist the in-progress form draft, replacing any previous one.
    pub fn save_draft(&self, draft: &ListingDraft) -> Result<()> {
        let payload = serde_json::to_string(draft).map_err(RecircleError::Serialization)?;
        self.backend.write_raw(DRAFT_KEY, &payload)
    }

    /// Read the draft without consuming it. Malformed drafts read as `None`.
    pub fn load_draft(&self) -> Result<Option<ListingDraft>> {
        let raw = match self.backend.read_raw(DRAFT_KEY)? {
            Some(raw) => raw,
            None => return Ok(None),
        };
        match serde_json::from_str(&raw) {
            Ok(draft) => Ok(Some(draft)),
            Err(err) => {
                warn!("dropping malformed draft: {}", err);
                Ok(None)
            }
        }
    }

    /// Read and clear the draft, for form screens that resume from it.
    pub fn take_draft(&self) -> Result<Option<ListingDraft>> {
        let draft = self.load_draft()?;
        if draft.is_some() {
            self.backend.remove_raw(DRAFT_KEY)?;
        }
        Ok(draft)
    }

    fn write_collection(&self, collection: Collection, records: &[ListingRecord]) -> Result<()> {
        let payload = serde_json::to_string_pretty(records).map_err(RecircleError::Serialization)?;
        self.backend.write_raw(collection.key(), &payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        DonationDetails, ListingDetails, ListingStatus, SaleDetails, WholesaleDetails,
    };
    use crate::store::mem_backend::MemBackend;

    fn make_store() -> ListingStore<MemBackend> {
        ListingStore::with_backend(MemBackend::new())
    }

    fn donation(id: &str, title: &str) -> ListingRecord {
        ListingRecord::new(id, title, ListingDetails::Donate(DonationDetails::default()))
    }

    fn sale(id: &str, title: &str) -> ListingRecord {
        ListingRecord::new(
            id,
            title,
            ListingDetails::Sell(SaleDetails {
                price_per_unit: 10.0,
                quantity: 1,
            }),
        )
    }

    // --- Load / Fail-Soft Tests ---

    #[test]
    fn load_of_unseeded_collection_is_empty() {
        let store = make_store();
        let records = store.load(Collection::DonationProducts).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn load_treats_malformed_payload_as_empty() {
        let store = make_store();
        store
            .backend
            .plant_raw("donation-products", "{not json at all");
        let records = store.load(Collection::DonationProducts).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn load_treats_legacy_empty_string_as_empty() {
        // Older builds wrote "" instead of "[]" after the last delete.
        let store = make_store();
        store.backend.plant_raw("business-listings", "");
        let records = store.load(Collection::BusinessListings).unwrap();
        assert!(records.is_empty());
    }

    // --- Seeding Tests ---

    #[test]
    fn ensure_seeded_writes_defaults_once() {
        let store = make_store();
        let defaults = vec![donation("d1", "Rice")];

        store
            .ensure_seeded(Collection::DonationProducts, &defaults)
            .unwrap();
        let records = store.load(Collection::DonationProducts).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "d1");
    }

    #[test]
    fn ensure_seeded_never_overwrites_existing_value() {
        let store = make_store();
        store
            .create(Collection::DonationProducts, donation("mine", "Coats"))
            .unwrap();

        store
            .ensure_seeded(Collection::DonationProducts, &[donation("d1", "Rice")])
            .unwrap();

        let ids: Vec<_> = store
            .load(Collection::DonationProducts)
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["mine"]);
    }

    #[test]
    fn ensure_seeded_is_a_noop_on_explicitly_empty_collection() {
        let store = make_store();
        // Create then remove, leaving a persisted empty sequence.
        store
            .create(Collection::DonationProducts, donation("d9", "Gone"))
            .unwrap();
        store.remove(Collection::DonationProducts, "d9").unwrap();

        store
            .ensure_seeded(Collection::DonationProducts, &[donation("d1", "Rice")])
            .unwrap();

        assert!(store.load(Collection::DonationProducts).unwrap().is_empty());
    }

    // --- Merge-on-Load Tests ---

    #[test]
    fn load_merged_on_unseeded_collection_returns_defaults() {
        let store = make_store();
        let merged = store
            .load_merged(Collection::BusinessDonations, &[donation("d1", "Rice")])
            .unwrap();
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].id, "d1");
    }

    #[test]
    fn load_merged_dedups_by_id_preferring_persisted() {
        let store = make_store();
        let mut persisted = donation("d1", "Rice (edited)");
        persisted.status = ListingStatus::Claimed;
        store
            .create(Collection::BusinessDonations, persisted)
            .unwrap();
        store
            .create(Collection::BusinessDonations, donation("d2", "Coats"))
            .unwrap();

        let defaults = vec![donation("d1", "Rice"), donation("d3", "Blankets")];
        let merged = store
            .load_merged(Collection::BusinessDonations, &defaults)
            .unwrap();

        let ids: Vec<_> = merged.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["d1", "d2", "d3"]);
        // The persisted copy of d1 wins over the seed copy.
        assert_eq!(merged[0].title, "Rice (edited)");
        assert_eq!(merged[0].status, ListingStatus::Claimed);
    }

    #[test]
    fn load_merged_dedups_duplicates_inside_the_persisted_payload() {
        // Older builds appended blindly, so a stored payload can carry the
        // same id twice. The first occurrence wins; seeds for that id stay
        // out too.
        let store = make_store();
        store.backend.plant_raw(
            "donation-products",
            r#"[
                {"id": "d1", "title": "Rice (first)", "timestamp": "2024-03-01T10:00:00Z", "listingType": "donate"},
                {"id": "d1", "title": "Rice (second)", "timestamp": "2024-03-02T10:00:00Z", "listingType": "donate"},
                {"id": "d2", "title": "Coats", "timestamp": "2024-03-03T10:00:00Z", "listingType": "donate"}
            ]"#,
        );

        let merged = store
            .load_merged(Collection::DonationProducts, &[donation("d1", "Rice (seed)")])
            .unwrap();

        let ids: Vec<_> = merged.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["d1", "d2"]);
        assert_eq!(merged[0].title, "Rice (first)");
    }

    #[test]
    fn load_merged_is_idempotent() {
        let store = make_store();
        store
            .create(Collection::BusinessDonations, donation("d2", "Coats"))
            .unwrap();
        let defaults = vec![donation("d1", "Rice")];

        let first = store
            .load_merged(Collection::BusinessDonations, &defaults)
            .unwrap();
        let second = store
            .load_merged(Collection::BusinessDonations, &defaults)
            .unwrap();

        assert_eq!(first, second);
        let mut ids: Vec<_> = first.iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), first.len());
    }

    #[test]
    fn merge_scenario_create_after_seed_defaults() {
        // Unseeded collection, merge with [d1], create d2,
        // merge again -> [d1, d2] with no duplicates.
        let store = make_store();
        let defaults = vec![donation("d1", "Rice")];

        let merged = store
            .load_merged(Collection::BusinessDonations, &defaults)
            .unwrap();
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].id, "d1");

        // Persist the merged view (as listing screens do), then add d2.
        store
            .ensure_seeded(Collection::BusinessDonations, &defaults)
            .unwrap();
        store
            .create(Collection::BusinessDonations, donation("d2", "Coats"))
            .unwrap();

        let merged = store
            .load_merged(Collection::BusinessDonations, &defaults)
            .unwrap();
        let ids: Vec<_> = merged.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["d1", "d2"]);
    }

    // --- Create Tests ---

    #[test]
    fn create_rejects_duplicate_id() {
        let store = make_store();
        store
            .create(Collection::SellingProducts, sale("p1", "Chair"))
            .unwrap();
        let err = store
            .create(Collection::SellingProducts, sale("p1", "Other Chair"))
            .unwrap_err();
        assert!(matches!(err, RecircleError::Invalid(_)));
    }

    #[test]
    fn create_rejects_invalid_record() {
        let store = make_store();
        let mut bad = sale("p1", "Chair");
        if let ListingDetails::Sell(ref mut details) = bad.details {
            details.price_per_unit = -5.0;
        }
        assert!(store.create(Collection::SellingProducts, bad).is_err());
        // Nothing was persisted.
        assert!(store.load(Collection::SellingProducts).unwrap().is_empty());
    }

    // --- Patch Tests ---

    #[test]
    fn upsert_patch_merges_shallowly() {
        let store = make_store();
        let mut record = sale("p1", "Chair");
        record.description = "Solid oak".to_string();
        store.create(Collection::SellingProducts, record).unwrap();

        let updated = store
            .upsert_patch(
                Collection::SellingProducts,
                "p1",
                &RecordPatch::new().with_title("Oak Chair"),
            )
            .unwrap();

        assert_eq!(updated.title, "Oak Chair");
        assert_eq!(updated.description, "Solid oak");

        let reloaded = store.get(Collection::SellingProducts, "p1").unwrap().unwrap();
        assert_eq!(reloaded, updated);
    }

    #[test]
    fn claim_patch_touches_only_status() {
        let store = make_store();
        let record = donation("d1", "Rice");
        let original = record.clone();
        store.create(Collection::BusinessDonations, record).unwrap();

        store
            .upsert_patch(
                Collection::BusinessDonations,
                "d1",
                &RecordPatch::new().with_status(ListingStatus::Claimed),
            )
            .unwrap();

        let after = store
            .get(Collection::BusinessDonations, "d1")
            .unwrap()
            .unwrap();
        assert_eq!(after.status, ListingStatus::Claimed);
        assert_eq!(after.title, original.title);
        assert_eq!(after.timestamp, original.timestamp);
        assert_eq!(after.details, original.details);
    }

    #[test]
    fn upsert_patch_missing_id_writes_nothing() {
        let store = make_store();
        store
            .create(Collection::SellingProducts, sale("p1", "Chair"))
            .unwrap();
        let before = store.backend.read_raw("selling-products").unwrap().unwrap();

        let err = store
            .upsert_patch(
                Collection::SellingProducts,
                "ghost",
                &RecordPatch::new().with_title("Nope"),
            )
            .unwrap_err();
        assert!(matches!(err, RecircleError::RecordNotFound(ref id) if id == "ghost"));

        // Byte-for-byte unchanged.
        let after = store.backend.read_raw("selling-products").unwrap().unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn upsert_patch_rejects_patch_that_invalidates_record() {
        let store = make_store();
        store
            .create(Collection::SellingProducts, sale("p1", "Chair"))
            .unwrap();
        let before = store.backend.read_raw("selling-products").unwrap().unwrap();

        let err = store
            .upsert_patch(
                Collection::SellingProducts,
                "p1",
                &RecordPatch::new().with_title("  "),
            )
            .unwrap_err();
        assert!(matches!(err, RecircleError::Invalid(_)));

        // The stored record keeps its valid state.
        let after = store.backend.read_raw("selling-products").unwrap().unwrap();
        assert_eq!(before, after);
    }

    // --- Remove Tests ---

    #[test]
    fn remove_missing_id_is_a_noop() {
        let store = make_store();
        store
            .create(Collection::SellingProducts, sale("p1", "Chair"))
            .unwrap();

        store.remove(Collection::SellingProducts, "ghost").unwrap();

        let ids: Vec<_> = store
            .load(Collection::SellingProducts)
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["p1"]);
    }

    #[test]
    fn remove_last_record_persists_empty_sequence() {
        let store = make_store();
        store
            .create(Collection::BusinessListings, sale("l1", "Steel Rods"))
            .unwrap();
        store.remove(Collection::BusinessListings, "l1").unwrap();

        // The slot still exists and holds a valid empty sequence,
        // not an erased key and not an empty string.
        let raw = store.backend.read_raw("business-listings").unwrap().unwrap();
        let parsed: Vec<ListingRecord> = serde_json::from_str(&raw).unwrap();
        assert!(parsed.is_empty());
    }

    // --- Replay Property ---

    #[test]
    fn replayed_mutations_yield_expected_id_set_and_fields() {
        let store = make_store();
        let collection = Collection::SellingProducts;

        store.create(collection, sale("a", "A")).unwrap();
        store.create(collection, sale("b", "B")).unwrap();
        store.create(collection, sale("c", "C")).unwrap();
        store
            .upsert_patch(collection, "b", &RecordPatch::new().with_title("B2"))
            .unwrap();
        store.remove(collection, "a").unwrap();
        store
            .upsert_patch(
                collection,
                "b",
                &RecordPatch::new().with_description("bulk lot"),
            )
            .unwrap();

        let records = store.load(collection).unwrap();
        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);

        let b = records.iter().find(|r| r.id == "b").unwrap();
        assert_eq!(b.title, "B2");
        assert_eq!(b.description, "bulk lot");
    }

    // --- Wire Compatibility ---

    #[test]
    fn loads_data_written_by_older_builds() {
        let store = make_store();
        store.backend.plant_raw(
            "business-listings",
            r#"[{
                "id": "listing1",
                "title": "Textile Overstock - Cotton",
                "imageUrl": "https://via.placeholder.com/300?text=Cotton+Fabric",
                "pricePerUnit": 120,
                "bulkQuantity": 1000,
                "listingType": "wholesale",
                "locationName": "Surat, Gujarat",
                "timestamp": "2024-02-15T09:15:00Z"
            }]"#,
        );

        let records = store.load(Collection::BusinessListings).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].details,
            ListingDetails::Wholesale(WholesaleDetails {
                price_per_unit: 120.0,
                bulk_quantity: 1000,
            })
        );
        assert_eq!(records[0].location_name.as_deref(), Some("Surat, Gujarat"));
    }

    // --- Error Propagation ---

    #[test]
    fn write_errors_surface_to_the_caller() {
        let store = make_store();
        store.backend.set_simulate_write_error(true);
        let result = store.create(Collection::SellingProducts, sale("p1", "Chair"));
        assert!(matches!(result, Err(RecircleError::Store(_))));
    }

    // --- Draft Tests ---

    #[test]
    fn draft_round_trips_and_take_clears() {
        let store = make_store();
        let draft = ListingDraft {
            title: Some("Winter Coats".to_string()),
            category: Some("clothing".to_string()),
            reusable: Some(true),
            ..Default::default()
        };

        store.save_draft(&draft).unwrap();
        assert_eq!(store.load_draft().unwrap(), Some(draft.clone()));

        assert_eq!(store.take_draft().unwrap(), Some(draft));
        assert_eq!(store.take_draft().unwrap(), None);
    }
}
