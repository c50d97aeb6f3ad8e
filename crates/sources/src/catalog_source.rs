//! Listing source backed by an in-memory `Catalog`.

use crate::types::{ListingSource, Scope};
use anyhow::Result;
use catalog::{Catalog, Listing};
use std::sync::Arc;
use tracing::debug;

/// Serves listings straight out of a shared `Catalog`.
///
/// Category scopes use the catalog's category index; other scopes scan
/// the listings in insertion order.
#[derive(Clone)]
pub struct CatalogSource {
    catalog: Arc<Catalog>,
}

impl CatalogSource {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl ListingSource for CatalogSource {
    fn name(&self) -> &str {
        "CatalogSource"
    }

    fn listings(&self, scope: &Scope) -> Result<Vec<Listing>> {
        let listings: Vec<Listing> = match scope {
            Scope::Category(category) => self
                .catalog
                .listings_in_category(category)
                .iter()
                .filter_map(|id| self.catalog.get_listing(id))
                .cloned()
                .collect(),
            _ => self
                .catalog
                .listings()
                .iter()
                .filter(|listing| scope.includes(listing))
                .cloned()
                .collect(),
        };

        debug!(
            "{} served {} listings for scope {:?}",
            self.name(),
            listings.len(),
            scope
        );
        Ok(listings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn source() -> CatalogSource {
        CatalogSource::new(Arc::new(Catalog::sample(Utc::now())))
    }

    #[test]
    fn test_all_scope_keeps_catalog_order() {
        let listings = source().listings(&Scope::All).unwrap();
        let ids: Vec<&str> = listings.iter().map(|l| l.id.as_str()).collect();

        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn test_category_scope() {
        let listings = source()
            .listings(&Scope::Category("Electronics".to_string()))
            .unwrap();

        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].id, "2");
    }

    #[test]
    fn test_owner_scope() {
        let listings = source()
            .listings(&Scope::Owner("user4".to_string()))
            .unwrap();

        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].title, "Acoustic Guitar");
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let listings = source()
            .listings(&Scope::Category("Vehicles".to_string()))
            .unwrap();
        assert!(listings.is_empty());
    }
}
