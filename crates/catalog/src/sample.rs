//! Built-in sample catalog.
//!
//! Eight listings and seven notifications, with timestamps anchored to
//! the `now` passed in so relative times stay meaningful. Listings are
//! inserted newest first, the order the browse view shows them in.

use crate::types::*;
use chrono::{DateTime, Duration, Utc};
use tracing::warn;

struct SampleListing {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: &'static str,
    condition: Condition,
    listing_type: ListingType,
    location: &'static str,
    boosted: bool,
    hours_ago: i64,
}

const SAMPLE_LISTINGS: [SampleListing; 8] = [
    SampleListing {
        id: "1",
        title: "Vintage Leather Jacket",
        description: "Classic brown leather jacket in excellent condition. Perfect for fall weather.",
        category: "Clothing",
        condition: Condition::Good,
        listing_type: ListingType::Swap,
        location: "Downtown, City Center",
        boosted: true,
        hours_ago: 2,
    },
    SampleListing {
        id: "2",
        title: "MacBook Pro 13\" 2019",
        description: "Well-maintained MacBook Pro with original charger and box. Great for students.",
        category: "Electronics",
        condition: Condition::Good,
        listing_type: ListingType::Swap,
        location: "Tech District",
        boosted: false,
        hours_ago: 3,
    },
    SampleListing {
        id: "3",
        title: "Coffee Table Books Set",
        description: "Beautiful collection of photography and art books. Great for coffee table display.",
        category: "Books",
        condition: Condition::LikeNew,
        listing_type: ListingType::Donation,
        location: "Westside, Residential",
        boosted: false,
        hours_ago: 5,
    },
    SampleListing {
        id: "4",
        title: "Acoustic Guitar",
        description: "Yamaha acoustic guitar with case. Some wear but sounds great.",
        category: "Music",
        condition: Condition::Fair,
        listing_type: ListingType::Swap,
        location: "Eastside, University Area",
        boosted: false,
        hours_ago: 8,
    },
    SampleListing {
        id: "5",
        title: "Indoor Plant Collection",
        description: "Various houseplants including pothos, snake plant, and rubber tree.",
        category: "Home & Garden",
        condition: Condition::Good,
        listing_type: ListingType::Donation,
        location: "Northside, Suburbs",
        boosted: true,
        hours_ago: 12,
    },
    SampleListing {
        id: "6",
        title: "Gaming Chair",
        description: "Ergonomic gaming chair with lumbar support. Minor wear on armrests.",
        category: "Furniture",
        condition: Condition::Good,
        listing_type: ListingType::Swap,
        location: "Gaming District",
        boosted: false,
        hours_ago: 15,
    },
    SampleListing {
        id: "7",
        title: "Children's Toy Collection",
        description: "Various educational toys and games for ages 3-8. All clean and sanitized.",
        category: "Toys",
        condition: Condition::Good,
        listing_type: ListingType::Donation,
        location: "Family Neighborhood",
        boosted: true,
        hours_ago: 18,
    },
    SampleListing {
        id: "8",
        title: "Tennis Racket Set",
        description: "Professional tennis rackets with carrying case. Perfect for beginners.",
        category: "Sports",
        condition: Condition::LikeNew,
        listing_type: ListingType::Swap,
        location: "Sports Complex Area",
        boosted: false,
        hours_ago: 24,
    },
];

struct SampleNotification {
    id: &'static str,
    kind: NotificationKind,
    title: &'static str,
    content: &'static str,
    read: bool,
    related_id: &'static str,
    minutes_ago: i64,
}

const SAMPLE_NOTIFICATIONS: [SampleNotification; 7] = [
    SampleNotification {
        id: "notif_1",
        kind: NotificationKind::SwapRequest,
        title: "New Swap Proposal",
        content: "Sarah Johnson wants to swap her \"Denim Jacket\" for your \"Vintage Leather Jacket\"",
        read: false,
        related_id: "1",
        minutes_ago: 30,
    },
    SampleNotification {
        id: "notif_2",
        kind: NotificationKind::Message,
        title: "New Message",
        content: "Mike Chen sent you a message about \"Coffee Table Books Set\"",
        read: false,
        related_id: "conv_2",
        minutes_ago: 2 * 60,
    },
    SampleNotification {
        id: "notif_3",
        kind: NotificationKind::SwapAccepted,
        title: "Swap Accepted!",
        content: "Emma Davis accepted your swap proposal for \"Acoustic Guitar\"",
        read: false,
        related_id: "4",
        minutes_ago: 4 * 60,
    },
    SampleNotification {
        id: "notif_4",
        kind: NotificationKind::ItemBoosted,
        title: "Item Boosted",
        content: "Your \"Indoor Plant Collection\" listing has been boosted and is now featured",
        read: true,
        related_id: "5",
        minutes_ago: 6 * 60,
    },
    SampleNotification {
        id: "notif_5",
        kind: NotificationKind::SwapRequest,
        title: "Donation Request",
        content: "Alex Wilson requested your \"Indoor Plant Collection\" donation",
        read: true,
        related_id: "5",
        minutes_ago: 12 * 60,
    },
    SampleNotification {
        id: "notif_6",
        kind: NotificationKind::SwapRejected,
        title: "Swap Declined",
        content: "Your swap proposal for \"Gaming Chair\" was declined",
        read: true,
        related_id: "6",
        minutes_ago: 24 * 60,
    },
    SampleNotification {
        id: "notif_7",
        kind: NotificationKind::Message,
        title: "New Message",
        content: "Lisa Park sent you a message about \"Coffee Table Books Set\"",
        read: true,
        related_id: "conv_3",
        minutes_ago: 2 * 24 * 60,
    },
];

/// User id the sample notifications are addressed to
pub const SAMPLE_USER: &str = "current_user";

impl Catalog {
    /// Build the sample catalog relative to `now`
    pub fn sample(now: DateTime<Utc>) -> Self {
        let mut catalog = Catalog::new();

        for (n, sample) in SAMPLE_LISTINGS.iter().enumerate() {
            let inserted = catalog.insert_listing(Listing {
                id: sample.id.to_string(),
                owner_id: format!("user{}", n + 1),
                title: sample.title.to_string(),
                description: sample.description.to_string(),
                category: sample.category.to_string(),
                condition: sample.condition,
                listing_type: sample.listing_type,
                location: sample.location.to_string(),
                images: Vec::new(),
                boosted: sample.boosted,
                status: ListingStatus::Available,
                created_at: now - Duration::hours(sample.hours_ago),
            });
            if let Err(e) = inserted {
                warn!("Skipping sample listing: {}", e);
            }
        }

        for sample in &SAMPLE_NOTIFICATIONS {
            catalog.insert_notification(Notification {
                id: sample.id.to_string(),
                user_id: SAMPLE_USER.to_string(),
                kind: sample.kind,
                title: sample.title.to_string(),
                content: sample.content.to_string(),
                read: sample.read,
                related_id: Some(sample.related_id.to_string()),
                created_at: now - Duration::minutes(sample.minutes_ago),
            });
        }

        catalog
    }
}
