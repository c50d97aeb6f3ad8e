//! Browse entry point: filter, then sort.

use crate::criteria::FilterCriteria;
use catalog::Listing;

/// Produce the visible, ordered subset of `listings` for `criteria`.
///
/// ## Algorithm
/// 1. Build a pipeline from the active criteria
/// 2. Keep the listings passing every filter, in input order
/// 3. Apply the sort key, if any (stable)
///
/// Pure: the same inputs always give the same output, and the input is
/// only borrowed. An empty input gives an empty output.
pub fn browse<'a>(listings: &'a [Listing], criteria: &FilterCriteria) -> Vec<&'a Listing> {
    let mut visible = criteria.pipeline().apply(listings);
    if let Some(sort) = criteria.sort {
        sort.sort(&mut visible);
    }
    tracing::debug!(
        "Browse kept {} of {} listings ({} active filters, sort: {:?})",
        visible.len(),
        listings.len(),
        criteria.active_filter_count(),
        criteria.sort
    );
    visible
}
