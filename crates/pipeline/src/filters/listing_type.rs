use crate::traits::Filter;
use catalog::{Listing, ListingType};

/// Keeps only swaps or only donations.
pub struct ListingTypeFilter {
    listing_type: ListingType,
}

impl ListingTypeFilter {
    pub fn new(listing_type: ListingType) -> Self {
        Self { listing_type }
    }
}

impl Filter for ListingTypeFilter {
    fn name(&self) -> &str {
        "ListingTypeFilter"
    }

    fn matches(&self, listing: &Listing) -> bool {
        listing.listing_type == self.listing_type
    }
}
