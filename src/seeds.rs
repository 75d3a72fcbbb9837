//! Sample records shipped with the app.
//!
//! These are plain functions returning fresh vectors, passed explicitly into
//! `ensure_seeded`/`load_merged` by the presentation layer. Nothing in the
//! store depends on them, so tests can supply arbitrary seeds instead.

use chrono::{TimeZone, Utc};

use crate::model::{
    Condition, ContactPreference, DonationDetails, DonationVisibility, ListingDetails,
    ListingRecord, ListingStatus, Logistics, NgoDonationDetails, SaleDetails, Urgency,
    WholesaleDetails,
};

fn record(
    id: &str,
    title: &str,
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    details: ListingDetails,
) -> ListingRecord {
    let mut record = ListingRecord::new(id, title, details);
    record.timestamp = Utc
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .unwrap();
    record
}

/// Bulk goods businesses offer to NGOs.
pub fn business_donations() -> Vec<ListingRecord> {
    let mut medical = record(
        "donation1",
        "Medical Equipment Donation",
        2024,
        2,
        15,
        8,
        0,
        ListingDetails::NgoDonation(NgoDonationDetails {
            urgency: Urgency::High,
            bulk_quantity: 50,
        }),
    );
    medical.image_uri = Some("https://via.placeholder.com/300?text=Medical+Equipment".to_string());
    medical.location_name = Some("Mumbai, Maharashtra".to_string());

    let mut supplies = record(
        "donation2",
        "School Supplies for NGOs",
        2024,
        2,
        14,
        10,
        30,
        ListingDetails::NgoDonation(NgoDonationDetails {
            urgency: Urgency::Medium,
            bulk_quantity: 200,
        }),
    );
    supplies.image_uri = Some("https://via.placeholder.com/300?text=School+Supplies".to_string());
    supplies.location_name = Some("Bangalore, Karnataka".to_string());

    vec![medical, supplies]
}

/// Wholesale listings businesses offer for sale.
pub fn business_listings() -> Vec<ListingRecord> {
    let mut textile = record(
        "listing1",
        "Textile Overstock - Cotton",
        2024,
        2,
        15,
        9,
        15,
        ListingDetails::Wholesale(WholesaleDetails {
            price_per_unit: 120.0,
            bulk_quantity: 1000,
        }),
    );
    textile.image_uri = Some("https://via.placeholder.com/300?text=Cotton+Fabric".to_string());
    textile.location_name = Some("Surat, Gujarat".to_string());

    let mut steel = record(
        "listing2",
        "Steel Rods Construction Grade",
        2024,
        2,
        13,
        14,
        45,
        ListingDetails::Wholesale(WholesaleDetails {
            price_per_unit: 85.0,
            bulk_quantity: 5000,
        }),
    );
    steel.image_uri = Some("https://via.placeholder.com/300?text=Steel+Rods".to_string());
    steel.location_name = Some("Hyderabad, Telangana".to_string());

    vec![textile, steel]
}

/// Items individuals are giving away.
pub fn donation_products() -> Vec<ListingRecord> {
    let mut coat = record(
        "1",
        "Winter Coat",
        2023,
        10,
        1,
        12,
        0,
        ListingDetails::Donate(DonationDetails {
            donation_visibility: DonationVisibility::Public,
            logistics: Logistics::Pickup,
            contact_preference: ContactPreference::Chat,
            ..Default::default()
        }),
    );
    coat.category = "clothing".to_string();
    coat.image_uri = Some("https://via.placeholder.com/150".to_string());
    coat.condition = Some(Condition::Used);

    let mut chair = record(
        "2",
        "Office Chair",
        2023,
        10,
        2,
        14,
        30,
        ListingDetails::Donate(DonationDetails {
            donation_visibility: DonationVisibility::Private,
            recipient_name: Some("Local Charity".to_string()),
            logistics: Logistics::Dropoff,
            contact_preference: ContactPreference::Email,
            ..Default::default()
        }),
    );
    chair.category = "furniture".to_string();
    chair.image_uri = Some("https://via.placeholder.com/150".to_string());
    chair.condition = Some(Condition::New);
    chair.status = ListingStatus::Claimed;

    vec![coat, chair]
}

/// Items individuals are selling.
pub fn selling_products() -> Vec<ListingRecord> {
    let mut handbag = record(
        "3",
        "Designer Handbag",
        2023,
        10,
        3,
        9,
        15,
        ListingDetails::Sell(SaleDetails {
            price_per_unit: 299.0,
            quantity: 1,
        }),
    );
    handbag.category = "clothing".to_string();
    handbag.image_uri = Some("https://via.placeholder.com/150".to_string());
    handbag.condition = Some(Condition::New);
    handbag.location_name = Some("New York".to_string());

    vec![handbag]
}
