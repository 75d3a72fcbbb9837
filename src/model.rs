//! # Domain Model: Collections and Listing Records
//!
//! This module defines the core data structures: [`Collection`],
//! [`ListingRecord`], and the `listingType`-discriminated payloads.
//!
//! ## The Problem
//!
//! Earlier app builds persisted duck-typed records: fields were added ad hoc
//! per form, and every list view re-implemented defensive per-field fallbacks.
//! Here the record is a tagged variant instead: a common base shape plus a
//! kind-specific payload, validated once at creation time.
//!
//! ## Wire Format
//!
//! Each collection is persisted as a JSON array of records. Field names are
//! camelCase and the payload is internally tagged on `listingType`, so data
//! written by older app builds keeps parsing:
//!
//! ```json
//! {
//!   "id": "listing1",
//!   "title": "Textile Overstock - Cotton",
//!   "listingType": "wholesale",
//!   "pricePerUnit": 120.0,
//!   "bulkQuantity": 1000,
//!   "status": "not-claimed",
//!   "timestamp": "2024-02-15T09:15:00Z"
//! }
//! ```
//!
//! ## Legacy Tolerance
//!
//! Older builds were sloppy about some names and values; deserialization
//! accepts them via aliases rather than dropping the records:
//! - `imageUrl` is accepted for `imageUri`
//! - `"not claimed"` and `"available"` are accepted for `"not-claimed"`
//!
//! ## Record Lifecycle
//!
//! Created by a form submission (id assigned by the caller, never reassigned),
//! read by list/detail screens, mutated by [`RecordPatch`] or by the claim
//! transition (`not-claimed` → `claimed`, terminal), removed by explicit
//! delete. No soft-delete, versioning, or history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{RecircleError, Result};

/// A named, independently persisted sequence of listing records.
///
/// Collections never cross-reference each other; a record belongs to exactly
/// one collection and id uniqueness is scoped per collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Collection {
    /// Bulk goods a business offers to NGOs.
    BusinessDonations,
    /// Wholesale listings a business offers for sale.
    BusinessListings,
    /// Items individuals are giving away.
    DonationProducts,
    /// Items individuals are selling.
    SellingProducts,
}

impl Collection {
    /// Stable storage key, identical to the keys the app's screens use.
    pub fn key(self) -> &'static str {
        match self {
            Collection::BusinessDonations => "business-donations",
            Collection::BusinessListings => "business-listings",
            Collection::DonationProducts => "donation-products",
            Collection::SellingProducts => "selling-products",
        }
    }

    pub fn all() -> [Collection; 4] {
        [
            Collection::BusinessDonations,
            Collection::BusinessListings,
            Collection::DonationProducts,
            Collection::SellingProducts,
        ]
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Two-state claim lifecycle. `Claimed` is terminal; there is no
/// transition back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListingStatus {
    #[serde(alias = "not claimed", alias = "available")]
    NotClaimed,
    Claimed,
}

impl Default for ListingStatus {
    fn default() -> Self {
        Self::NotClaimed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    Medium,
    Low,
}

impl Default for Urgency {
    fn default() -> Self {
        Self::Medium
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationVisibility {
    Public,
    Private,
}

impl Default for DonationVisibility {
    fn default() -> Self {
        Self::Public
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Logistics {
    Pickup,
    Dropoff,
}

impl Default for Logistics {
    fn default() -> Self {
        Self::Pickup
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactPreference {
    Chat,
    Phone,
    Email,
}

impl Default for ContactPreference {
    fn default() -> Self {
        Self::Chat
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    New,
    Used,
    Refurbished,
}

/// Kind-specific payload, internally tagged on `listingType` in JSON.
///
/// The tag values (`sell`, `donate`, `wholesale`, `ngo-donation`) are the
/// ones the app's forms persist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "listingType", rename_all = "kebab-case")]
pub enum ListingDetails {
    Sell(SaleDetails),
    Donate(DonationDetails),
    Wholesale(WholesaleDetails),
    NgoDonation(NgoDonationDetails),
}

impl ListingDetails {
    /// The tag value, for messages and filtering.
    pub fn kind(&self) -> &'static str {
        match self {
            ListingDetails::Sell(_) => "sell",
            ListingDetails::Donate(_) => "donate",
            ListingDetails::Wholesale(_) => "wholesale",
            ListingDetails::NgoDonation(_) => "ngo-donation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleDetails {
    pub price_per_unit: f64,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationDetails {
    #[serde(default)]
    pub urgency: Urgency,
    #[serde(default)]
    pub donation_visibility: DonationVisibility,
    #[serde(default)]
    pub logistics: Logistics,
    #[serde(default)]
    pub contact_preference: ContactPreference,
    /// Required when `donation_visibility` is `Private`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WholesaleDetails {
    pub price_per_unit: f64,
    pub bulk_quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NgoDonationDetails {
    #[serde(default)]
    pub urgency: Urgency,
    pub bulk_quantity: u32,
}

/// One item of goods, donation, or request.
///
/// `id` is assigned by the creator before the record enters a collection and
/// is never reassigned. `timestamp` is display/sort material only; it plays
/// no role in conflict resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, alias = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    #[serde(default)]
    pub status: ListingStatus,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub details: ListingDetails,
}

impl ListingRecord {
    pub fn new(id: impl Into<String>, title: impl Into<String>, details: ListingDetails) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category: String::new(),
            image_uri: None,
            location_name: None,
            condition: None,
            status: ListingStatus::NotClaimed,
            timestamp: Utc::now(),
            details,
        }
    }

    /// Fresh caller-assigned id, in the `product-` convention the forms use.
    pub fn generate_id() -> String {
        format!("product-{}", Uuid::new_v4())
    }

    /// The image to display: the stored URI, or a category-appropriate
    /// placeholder when the record has none.
    pub fn display_image(&self) -> String {
        match &self.image_uri {
            Some(uri) if !uri.is_empty() => uri.clone(),
            _ => default_image_for(&self.category),
        }
    }

    /// Creation-time validation. Kind-specific fields are checked here once
    /// instead of being defensively re-checked by every screen.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(RecircleError::Invalid("id must not be empty".to_string()));
        }
        if self.title.trim().is_empty() {
            return Err(RecircleError::Invalid("title is required".to_string()));
        }
        match &self.details {
            ListingDetails::Sell(sale) => {
                if sale.price_per_unit <= 0.0 {
                    return Err(RecircleError::Invalid(
                        "price per unit must be positive".to_string(),
                    ));
                }
                if sale.quantity == 0 {
                    return Err(RecircleError::Invalid(
                        "quantity must be at least 1".to_string(),
                    ));
                }
            }
            ListingDetails::Wholesale(wholesale) => {
                if wholesale.price_per_unit <= 0.0 {
                    return Err(RecircleError::Invalid(
                        "price per unit must be positive".to_string(),
                    ));
                }
                if wholesale.bulk_quantity == 0 {
                    return Err(RecircleError::Invalid(
                        "bulk quantity must be at least 1".to_string(),
                    ));
                }
            }
            ListingDetails::Donate(donation) => {
                if donation.donation_visibility == DonationVisibility::Private
                    && donation
                        .recipient_name
                        .as_deref()
                        .map_or(true, |name| name.trim().is_empty())
                {
                    return Err(RecircleError::Invalid(
                        "a private donation requires a recipient name".to_string(),
                    ));
                }
            }
            ListingDetails::NgoDonation(request) => {
                if request.bulk_quantity == 0 {
                    return Err(RecircleError::Invalid(
                        "bulk quantity must be at least 1".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}

fn default_image_for(category: &str) -> String {
    let label = match category.to_ascii_lowercase().as_str() {
        "food" => "Food",
        "clothing" => "Clothing",
        "furniture" => "Furniture",
        "electronics" => "Electronics",
        _ => "Item",
    };
    format!("https://via.placeholder.com/300?text={}", label)
}

/// Shallow partial update of a [`ListingRecord`].
///
/// Present fields override; absent fields retain the prior value. The kind
/// payload is replaced as a whole when given — the patch is shallow at the
/// record level, not recursive.
#[derive(Debug, Clone, Default)]
pub struct RecordPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image_uri: Option<String>,
    pub location_name: Option<String>,
    pub condition: Option<Condition>,
    pub status: Option<ListingStatus>,
    pub details: Option<ListingDetails>,
}

impl RecordPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_status(mut self, status: ListingStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_details(mut self, details: ListingDetails) -> Self {
        self.details = Some(details);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.image_uri.is_none()
            && self.location_name.is_none()
            && self.condition.is_none()
            && self.status.is_none()
            && self.details.is_none()
    }

    /// Merge this patch into `record`, field by field.
    pub fn apply(&self, record: &mut ListingRecord) {
        if let Some(title) = &self.title {
            record.title = title.clone();
        }
        if let Some(description) = &self.description {
            record.description = description.clone();
        }
        if let Some(category) = &self.category {
            record.category = category.clone();
        }
        if let Some(image_uri) = &self.image_uri {
            record.image_uri = Some(image_uri.clone());
        }
        if let Some(location_name) = &self.location_name {
            record.location_name = Some(location_name.clone());
        }
        if let Some(condition) = self.condition {
            record.condition = Some(condition);
        }
        if let Some(status) = self.status {
            record.status = status;
        }
        if let Some(details) = &self.details {
            record.details = details.clone();
        }
    }
}

/// A single in-progress form snapshot, persisted outside any collection so a
/// half-filled form survives navigating away.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default, alias = "imageUrl")]
    pub image_uri: Option<String>,
    #[serde(default)]
    pub reusable: Option<bool>,
    #[serde(default)]
    pub reason: Option<String>,
}
