//! Filter to keep a single category.

use crate::traits::Filter;
use catalog::Listing;

/// Keeps listings whose category equals the selected one exactly.
///
/// The comparison is case-sensitive: categories come from a fixed
/// selector, not free text.
pub struct CategoryFilter {
    category: String,
}

impl CategoryFilter {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }
}

impl Filter for CategoryFilter {
    fn name(&self) -> &str {
        "CategoryFilter"
    }

    fn matches(&self, listing: &Listing) -> bool {
        listing.category == self.category
    }
}
