//! Filter for the "Show boosted items only" toggle.

use crate::traits::Filter;
use catalog::Listing;

/// Removes every listing that is not boosted.
///
/// Only added to a pipeline when the toggle is on; an unset toggle
/// means no filter at all.
pub struct BoostedOnlyFilter;

impl Filter for BoostedOnlyFilter {
    fn name(&self) -> &str {
        "BoostedOnlyFilter"
    }

    fn matches(&self, listing: &Listing) -> bool {
        listing.boosted
    }
}
