//! Catalog loading and validation.
//!
//! Builds a `Catalog` from a fixture directory:
//! - listings.json (required)
//! - notifications.json (optional)
//!
//! Validation happens here, before any listing reaches the browse
//! pipeline. A catalog that fails validation is never returned.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use std::path::Path;
use tracing::info;

impl Catalog {
    /// Load a catalog from a fixture directory
    ///
    /// Steps:
    /// 1. Parse both fixture files in parallel
    /// 2. Insert listings (rejecting duplicate ids) and notifications
    /// 3. Validate the result
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        info!("Loading catalog from {:?}", data_dir);

        let listings_path = data_dir.join("listings.json");
        let notifications_path = data_dir.join("notifications.json");

        let (listings, notifications) = rayon::join(
            || parser::parse_listings(&listings_path),
            || {
                if notifications_path.exists() {
                    parser::parse_notifications(&notifications_path)
                } else {
                    Ok(Vec::new())
                }
            },
        );
        let listings = listings?;
        let notifications = notifications?;

        info!(
            "Parsed {} listings, {} notifications",
            listings.len(),
            notifications.len()
        );

        let mut catalog = Catalog::new();
        for listing in listings {
            catalog.insert_listing(listing)?;
        }
        for notification in notifications {
            catalog.insert_notification(notification);
        }

        catalog.validate()?;

        info!("Catalog successfully built and validated");
        Ok(catalog)
    }

    /// Validate data integrity
    ///
    /// Check that:
    /// - Every listing has a non-empty id and title
    /// - Every notification has a non-empty id
    ///
    /// Id uniqueness is already enforced by `insert_listing`.
    pub fn validate(&self) -> Result<()> {
        for (position, listing) in self.listings.iter().enumerate() {
            if listing.id.trim().is_empty() {
                return Err(CatalogError::ValidationError(format!(
                    "listing at position {} has an empty id",
                    position
                )));
            }
            if listing.title.trim().is_empty() {
                return Err(CatalogError::ValidationError(format!(
                    "listing {} has an empty title",
                    listing.id
                )));
            }
        }
        for notification in &self.notifications {
            if notification.id.trim().is_empty() {
                return Err(CatalogError::ValidationError(
                    "notification with an empty id".to_string(),
                ));
            }
        }
        Ok(())
    }
}
