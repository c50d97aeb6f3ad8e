//! Core domain types for the SwapIt marketplace.
//!
//! This module defines the records shared by every other crate in the
//! workspace: listings, notifications, and the `Catalog` that owns them.
//! Closed sets (condition, listing type, notification kind) are enums;
//! the category set is left open as a plain string.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a listing (e.g. "1", "rec_1", "item_1718000000000")
pub type ListingId = String;

/// Unique identifier for a user
pub type UserId = String;

/// Categories offered by the listing form and the browse selector.
///
/// Listings with other categories are still accepted.
pub const KNOWN_CATEGORIES: [&str; 9] = [
    "Electronics",
    "Clothing",
    "Books",
    "Home & Garden",
    "Sports",
    "Music",
    "Toys",
    "Furniture",
    "Other",
];

// =============================================================================
// Listing-related Types
// =============================================================================

/// Physical condition of a listed item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    New,
    LikeNew,
    Good,
    Fair,
    Poor,
}

impl Condition {
    pub const ALL: [Condition; 5] = [
        Condition::New,
        Condition::LikeNew,
        Condition::Good,
        Condition::Fair,
        Condition::Poor,
    ];

    /// Wire form, as stored in fixtures
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "new",
            Condition::LikeNew => "like_new",
            Condition::Good => "good",
            Condition::Fair => "fair",
            Condition::Poor => "poor",
        }
    }

    /// Human-readable form
    pub fn label(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::LikeNew => "Like New",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
            Condition::Poor => "Poor",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Condition {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CatalogError::InvalidValue {
                field: "condition".to_string(),
                value: s.to_string(),
            })
    }
}

/// Whether the owner wants something back for the item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingType {
    Swap,
    Donation,
}

impl ListingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::Swap => "swap",
            ListingType::Donation => "donation",
        }
    }
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingType::Swap => f.write_str("Swap"),
            ListingType::Donation => f.write_str("Donation"),
        }
    }
}

impl FromStr for ListingType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "swap" => Ok(ListingType::Swap),
            "donation" => Ok(ListingType::Donation),
            _ => Err(CatalogError::InvalidValue {
                field: "listing_type".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Lifecycle of a listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    #[default]
    Available,
    Pending,
    Completed,
}

/// An item offered for swap or donation.
///
/// Listings are read-only once they enter a `Catalog`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub owner_id: UserId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub condition: Condition,
    pub listing_type: ListingType,
    pub location: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub boosted: bool,
    #[serde(default)]
    pub status: ListingStatus,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Notification Types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    SwapRequest,
    SwapAccepted,
    SwapRejected,
    Message,
    ItemBoosted,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 5] = [
        NotificationKind::SwapRequest,
        NotificationKind::SwapAccepted,
        NotificationKind::SwapRejected,
        NotificationKind::Message,
        NotificationKind::ItemBoosted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::SwapRequest => "swap_request",
            NotificationKind::SwapAccepted => "swap_accepted",
            NotificationKind::SwapRejected => "swap_rejected",
            NotificationKind::Message => "message",
            NotificationKind::ItemBoosted => "item_boosted",
        }
    }
}

impl FromStr for NotificationKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NotificationKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| CatalogError::InvalidValue {
                field: "notification kind".to_string(),
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub user_id: UserId,
    pub kind: NotificationKind,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub read: bool,
    /// Listing or conversation this notification points at
    #[serde(default)]
    pub related_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Catalog - The In-Memory Listing Store
// =============================================================================

/// Holds every listing and notification known to the session.
///
/// Listings keep their insertion order; `listing_positions` gives O(1)
/// lookup by id and guarantees ids are unique.
#[derive(Debug, Default)]
pub struct Catalog {
    pub(crate) listings: Vec<Listing>,
    pub(crate) listing_positions: HashMap<ListingId, usize>,

    /// Listing ids grouped by category, in insertion order
    pub(crate) category_index: HashMap<String, Vec<ListingId>>,

    pub(crate) notifications: Vec<Notification>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All listings in insertion order
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn get_listing(&self, id: &str) -> Option<&Listing> {
        self.listing_positions
            .get(id)
            .map(|&position| &self.listings[position])
    }

    /// Ids of every listing in a category; empty if the category is unknown
    pub fn listings_in_category(&self, category: &str) -> &[ListingId] {
        self.category_index
            .get(category)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// (category, listing count) pairs sorted by category name
    pub fn categories(&self) -> Vec<(&str, usize)> {
        let mut categories: Vec<(&str, usize)> = self
            .category_index
            .iter()
            .map(|(category, ids)| (category.as_str(), ids.len()))
            .collect();
        categories.sort_unstable_by(|a, b| a.0.cmp(b.0));
        categories
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Insert a listing.
    ///
    /// Fails without modifying the catalog if the id is already present.
    pub fn insert_listing(&mut self, listing: Listing) -> crate::Result<()> {
        if self.listing_positions.contains_key(&listing.id) {
            return Err(CatalogError::DuplicateListing { id: listing.id });
        }
        self.listing_positions
            .insert(listing.id.clone(), self.listings.len());
        self.category_index
            .entry(listing.category.clone())
            .or_default()
            .push(listing.id.clone());
        self.listings.push(listing);
        Ok(())
    }

    pub fn insert_notification(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// (listings, notifications) counts for logging
    pub fn counts(&self) -> (usize, usize) {
        (self.listings.len(), self.notifications.len())
    }
}
