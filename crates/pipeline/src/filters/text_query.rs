//! Free-text search over a listing's title, description and category.

use crate::traits::Filter;
use catalog::Listing;

/// Keeps listings whose title, description or category contains the query.
///
/// ## Algorithm
/// 1. Lowercase the query once, at construction
/// 2. For each listing, lowercase the three text fields
/// 3. Keep the listing if any field contains the query
///
/// An empty query matches everything. The query is not trimmed.
pub struct TextQueryFilter {
    needle: String,
}

impl TextQueryFilter {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }
}

impl Filter for TextQueryFilter {
    fn name(&self) -> &str {
        "TextQueryFilter"
    }

    fn matches(&self, listing: &Listing) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        [&listing.title, &listing.description, &listing.category]
            .iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}
