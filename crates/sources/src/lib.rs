//! # Sources Crate
//!
//! This crate supplies listings to the browse pipeline.
//!
//! ## Components
//!
//! ### ListingSource
//! The query interface the rest of the system consumes: given a coarse
//! `Scope`, return the listings in creation order.
//!
//! ### CatalogSource
//! A `ListingSource` over a shared in-memory `Catalog` (fixtures or the
//! built-in sample).
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{CatalogSource, ListingSource, Scope};
//! use catalog::Catalog;
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(Catalog::load_from_dir(Path::new("data"))?);
//! let source = CatalogSource::new(catalog.clone());
//!
//! let books = source.listings(&Scope::Category("Books".to_string()))?;
//! ```

pub mod catalog_source;
pub mod types;

// Re-export commonly used types
pub use catalog_source::CatalogSource;
pub use types::{ListingSource, Scope};

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Catalog, Condition, Listing, ListingStatus, ListingType};
    use chrono::Utc;
    use std::sync::Arc;

    fn listing(category: &str, owner: &str) -> Listing {
        Listing {
            id: "1".to_string(),
            owner_id: owner.to_string(),
            title: "Tennis Racket Set".to_string(),
            description: String::new(),
            category: category.to_string(),
            condition: Condition::LikeNew,
            listing_type: ListingType::Swap,
            location: "Sports Complex Area".to_string(),
            images: Vec::new(),
            boosted: false,
            status: ListingStatus::Available,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_scope_includes() {
        let racket = listing("Sports", "user8");

        assert!(Scope::All.includes(&racket));
        assert!(Scope::Category("Sports".to_string()).includes(&racket));
        assert!(!Scope::Category("sports".to_string()).includes(&racket));
        assert!(Scope::Owner("user8".to_string()).includes(&racket));
        assert!(!Scope::Owner("user1".to_string()).includes(&racket));
    }

    #[test]
    fn test_source_behind_trait_object() {
        let source: Box<dyn ListingSource> =
            Box::new(CatalogSource::new(Arc::new(Catalog::new())));

        assert_eq!(source.name(), "CatalogSource");
        assert!(source.listings(&Scope::All).unwrap().is_empty());
    }
}
