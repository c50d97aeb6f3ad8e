//! # Catalog Crate
//!
//! This crate owns the SwapIt marketplace data: listings and notifications.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Listing, Notification, Catalog)
//! - **parser**: Parse JSON fixtures into Rust structs
//! - **index**: Load and validate a `Catalog` from a fixture directory
//! - **sample**: Built-in sample catalog
//! - **time**: Relative timestamp formatting
//! - **error**: Error types for loading and validation
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_dir(Path::new("data"))?;
//!
//! let guitar = catalog.get_listing("4").unwrap();
//! println!("{} ({})", guitar.title, guitar.condition);
//! ```

pub mod error;
pub mod index;
pub mod parser;
pub mod sample;
pub mod time;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use sample::SAMPLE_USER;
pub use time::format_time_ago;
pub use types::{
    // Type aliases
    ListingId,
    UserId,
    // Core types
    Catalog,
    Listing,
    Notification,
    // Enums
    Condition,
    ListingStatus,
    ListingType,
    NotificationKind,
    // Constants
    KNOWN_CATEGORIES,
};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn listing(id: &str, category: &str) -> Listing {
        Listing {
            id: id.to_string(),
            owner_id: "user1".to_string(),
            title: format!("Listing {}", id),
            description: String::new(),
            category: category.to_string(),
            condition: Condition::Good,
            listing_type: ListingType::Swap,
            location: "Downtown".to_string(),
            images: Vec::new(),
            boosted: false,
            status: ListingStatus::Available,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        assert_eq!(catalog.counts(), (0, 0));
        assert!(catalog.listings().is_empty());
    }

    #[test]
    fn test_insert_listing() {
        let mut catalog = Catalog::new();
        catalog.insert_listing(listing("1", "Books")).unwrap();
        catalog.insert_listing(listing("2", "Books")).unwrap();

        assert_eq!(catalog.get_listing("2").unwrap().id, "2");
        assert_eq!(catalog.listings_in_category("Books").len(), 2);
    }

    #[test]
    fn test_duplicate_listing_rejected() {
        let mut catalog = Catalog::new();
        catalog.insert_listing(listing("1", "Books")).unwrap();

        let result = catalog.insert_listing(listing("1", "Music"));
        assert!(matches!(result, Err(CatalogError::DuplicateListing { .. })));
        // Catalog is untouched by the failed insert
        assert_eq!(catalog.counts(), (1, 0));
        assert!(catalog.listings_in_category("Music").is_empty());
    }

    #[test]
    fn test_empty_queries() {
        let catalog = Catalog::new();

        assert!(catalog.get_listing("999").is_none());
        assert!(catalog.listings_in_category("Books").is_empty());
        assert!(catalog.categories().is_empty());
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("like_new".parse::<Condition>().unwrap(), Condition::LikeNew);
        assert_eq!("donation".parse::<ListingType>().unwrap(), ListingType::Donation);
        assert_eq!(
            "item_boosted".parse::<NotificationKind>().unwrap(),
            NotificationKind::ItemBoosted
        );
        assert!("mint".parse::<Condition>().is_err());
        assert_eq!(Condition::LikeNew.label(), "Like New");
    }
}
